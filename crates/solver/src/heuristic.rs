//! Heuristic fallback solver.
//!
//! Sizes standard pallets by aggregate weight rather than per-item
//! assignment: enough full pallets to carry the batch weight, plus one
//! partial pallet whose height scales with the remaining weight. Bundled
//! units each get a dedicated bundle pallet, never consolidated.
//!
//! This is the high-volume and infeasibility path: it always produces a
//! usable plan, but non-bundled pallets carry no item-level breakdown.

use palletize_core::{Item, PalletInstance, PalletKind};

/// Configuration for the heuristic solver.
///
/// Defaults are the empirically calibrated standard pallet used by the
/// quoting workflow.
#[derive(Debug, Clone)]
pub struct HeuristicConfig {
    /// Standard pallet deck length.
    pub pallet_length: f64,
    /// Standard pallet deck width.
    pub pallet_width: f64,
    /// Loaded height of a full standard pallet.
    pub pallet_height: f64,
    /// Weight carried by one full standard pallet.
    pub pallet_max_weight: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            pallet_length: 48.0,
            pallet_width: 40.5,
            pallet_height: 48.0,
            pallet_max_weight: 518.0,
        }
    }
}

impl HeuristicConfig {
    /// Creates a configuration with the default standard pallet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the standard pallet footprint.
    pub fn with_footprint(mut self, length: f64, width: f64) -> Self {
        self.pallet_length = length;
        self.pallet_width = width;
        self
    }

    /// Sets the loaded height of a full standard pallet.
    pub fn with_pallet_height(mut self, height: f64) -> Self {
        self.pallet_height = height;
        self
    }

    /// Sets the weight carried by one full standard pallet.
    pub fn with_pallet_max_weight(mut self, max_weight: f64) -> Self {
        self.pallet_max_weight = max_weight;
        self
    }
}

/// Bundle pallet deck length used by the heuristic path.
const BUNDLE_LENGTH: f64 = 98.0;
/// Bundle pallet deck width.
const BUNDLE_WIDTH: f64 = 10.0;
/// Bundle pallet height.
const BUNDLE_HEIGHT: f64 = 10.0;
/// Bundle pallet tare weight.
const BUNDLE_TARE: f64 = 3.0;

/// Solves by aggregate weight.
///
/// Operates on expanded units. Returns an empty plan only for empty input;
/// there is no other failure mode.
pub fn solve(items: &[Item], config: &HeuristicConfig) -> Vec<PalletInstance> {
    let mut plan = Vec::new();
    if items.is_empty() {
        return plan;
    }

    let assembled = items.iter().any(|item| !item.bundled && item.assembled);
    let total_weight: f64 = items
        .iter()
        .filter(|item| !item.bundled)
        .map(|item| item.weight)
        .sum();

    // Full standard pallets at capacity weight.
    let full_pallets = (total_weight / config.pallet_max_weight).floor() as usize;
    for _ in 0..full_pallets {
        plan.push(PalletInstance::aggregate(
            PalletKind::StandardSmall,
            config.pallet_length,
            config.pallet_width,
            config.pallet_height,
            config.pallet_max_weight,
            assembled,
        ));
    }

    // One partial pallet sized proportionally to the remaining weight.
    let remaining_weight = total_weight - config.pallet_max_weight * full_pallets as f64;
    if remaining_weight > 0.0 {
        plan.push(PalletInstance::aggregate(
            PalletKind::StandardSmall,
            config.pallet_length,
            config.pallet_width,
            config.pallet_height * (remaining_weight / config.pallet_max_weight),
            remaining_weight,
            assembled,
        ));
    }

    // One dedicated bundle pallet per bundled unit, never consolidated.
    for item in items.iter().filter(|item| item.bundled) {
        plan.push(PalletInstance::aggregate(
            PalletKind::Bundle,
            BUNDLE_LENGTH,
            BUNDLE_WIDTH,
            BUNDLE_HEIGHT,
            item.weight + BUNDLE_TARE,
            false,
        ));
    }

    log::info!(
        "heuristic solver produced {} pallets for {} units ({:.1} lb non-bundled)",
        plan.len(),
        items.len(),
        total_weight
    );
    plan
}
