//! Exact assignment solver.
//!
//! Formulates pallet assignment as a 0/1 optimization model: one boolean
//! per item/candidate pair plus one boolean per candidate, minimizing the
//! number of pallets used with a small tie-break toward smaller pallet
//! sizes. The candidate pool is generated per item (one template each), so
//! a feasible batch always admits the trivial one-item-per-pallet solution.
//!
//! Failure to find an optimal solution is not an error: it yields an empty
//! plan, which is the dispatcher's signal to fall back to the heuristic
//! solver.

use palletize_core::{Item, PalletInstance, PalletTemplate};

use crate::backend::{Comparator, MilpBackend, Outcome, VarId};
#[cfg(feature = "milp")]
use crate::backend::GoodLpBackend;

pub use crate::backend::is_available;

/// Solves the assignment with the default compiled-in backend.
///
/// `candidates` holds one template per item (order-aligned with `items`,
/// but any item may be assigned to any candidate). Returns an empty plan
/// when the model is infeasible.
#[cfg(feature = "milp")]
pub fn solve(items: &[Item], candidates: &[PalletTemplate]) -> Vec<PalletInstance> {
    solve_with_backend(items, candidates, Box::new(GoodLpBackend::new()))
}

/// Exact solve without a compiled-in backend (stub).
#[cfg(not(feature = "milp"))]
pub fn solve(items: &[Item], _candidates: &[PalletTemplate]) -> Vec<PalletInstance> {
    if !items.is_empty() {
        log::warn!("exact solver not available (compile with the `milp` feature)");
    }
    Vec::new()
}

/// Solves the assignment against an explicit backend.
///
/// The backend is request-scoped and consumed by the solve; variables and
/// constraints are never reused across calls.
pub fn solve_with_backend(
    items: &[Item],
    candidates: &[PalletTemplate],
    mut backend: Box<dyn MilpBackend>,
) -> Vec<PalletInstance> {
    let n = items.len();
    debug_assert_eq!(n, candidates.len());
    if n == 0 {
        return Vec::new();
    }

    // assign[i][j] = 1 when item i rides on candidate j.
    let assign: Vec<Vec<VarId>> = (0..n)
        .map(|i| {
            (0..n)
                .map(|j| backend.bool_var(format!("item_{i}_on_pallet_{j}")))
                .collect()
        })
        .collect();

    // used[j] = 1 when candidate j receives at least one item.
    let used: Vec<VarId> = (0..n)
        .map(|j| backend.bool_var(format!("pallet_{j}_used")))
        .collect();

    // Coverage: every item lands on exactly one candidate.
    for row in &assign {
        let terms = row.iter().map(|&var| (var, 1.0)).collect();
        backend.constraint(terms, Comparator::Eq, 1.0);
    }

    // Footprint and class feasibility are independent of co-occupants, so
    // infeasible pairs are forced to zero outright.
    for (i, item) in items.iter().enumerate() {
        for (j, candidate) in candidates.iter().enumerate() {
            let fits = item.length <= candidate.length && item.width <= candidate.width;
            let class_ok = if candidate.is_bundle() {
                item.bundled
            } else if candidate.assembled {
                item.assembled
            } else {
                !item.assembled && !item.bundled
            };
            if !fits || !class_ok {
                backend.constraint(vec![(assign[i][j], 1.0)], Comparator::Eq, 0.0);
            }
        }
    }

    // Volume capacity per candidate.
    for (j, candidate) in candidates.iter().enumerate() {
        let terms = items
            .iter()
            .enumerate()
            .map(|(i, item)| (assign[i][j], item.volume()))
            .collect();
        backend.constraint(terms, Comparator::Le, candidate.max_volume);
    }

    // Usage linkage: used[j] * N >= sum_i assign[i][j].
    for (j, &used_var) in used.iter().enumerate() {
        let mut terms = vec![(used_var, n as f64)];
        terms.extend((0..n).map(|i| (assign[i][j], -1.0)));
        backend.constraint(terms, Comparator::Ge, 0.0);
    }

    // Minimize pallet count; the fractional size-rank term only breaks ties
    // toward smaller pallets and never changes the integral count.
    let objective = used
        .iter()
        .zip(candidates)
        .map(|(&used_var, candidate)| (used_var, 1.0 + candidate.size_rank as f64 / 1000.0))
        .collect();
    backend.minimize(objective);

    log::info!("solving exact assignment for {n} items");
    let values = match backend.solve() {
        Outcome::Optimal(values) => values,
        Outcome::Infeasible => {
            log::info!("exact assignment has no optimal solution");
            return Vec::new();
        }
    };

    extract_plan(items, candidates, &assign, &used, &values)
}

/// Builds pallet instances from the solved variable values.
fn extract_plan(
    items: &[Item],
    candidates: &[PalletTemplate],
    assign: &[Vec<VarId>],
    used: &[VarId],
    values: &[f64],
) -> Vec<PalletInstance> {
    let mut plan = Vec::new();
    for (j, candidate) in candidates.iter().enumerate() {
        if values[used[j]] < 0.5 {
            continue;
        }
        let loaded: Vec<Item> = items
            .iter()
            .enumerate()
            .filter(|(i, _)| values[assign[*i][j]] > 0.5)
            .map(|(_, item)| item.clone())
            .collect();
        if loaded.is_empty() {
            continue;
        }
        plan.push(PalletInstance::from_assignment(candidate, loaded));
    }
    log::info!("exact assignment uses {} pallets", plan.len());
    plan
}
