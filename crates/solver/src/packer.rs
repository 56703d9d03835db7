//! Packing dispatcher.
//!
//! Entry point of the engine: expands order lines into units, picks a
//! solving strategy, and guarantees a usable plan. Precision first
//! (exact assignment), throughput second (heuristic fallback) — the exact
//! model is bypassed entirely above a fixed unit-count threshold so
//! worst-case latency stays bounded.

use palletize_core::{expand_requests, template_for, Error, ItemRequest, PalletInstance, Result};

use crate::heuristic::{self, HeuristicConfig};
use crate::{backend, exact};

/// Solving strategy chosen for a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackStrategy {
    /// Exact 0/1 assignment model.
    Exact,
    /// Aggregate-weight heuristic.
    Heuristic,
}

/// Configuration for the packing dispatcher.
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Maximum unit count admitted to the exact solver.
    pub exact_unit_limit: usize,
    /// Heuristic solver configuration.
    pub heuristic: HeuristicConfig,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            exact_unit_limit: 70,
            heuristic: HeuristicConfig::default(),
        }
    }
}

impl PackConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the exact-solver admission threshold.
    pub fn with_exact_unit_limit(mut self, limit: usize) -> Self {
        self.exact_unit_limit = limit;
        self
    }

    /// Sets the heuristic solver configuration.
    pub fn with_heuristic(mut self, heuristic: HeuristicConfig) -> Self {
        self.heuristic = heuristic;
        self
    }
}

/// Packing engine entry point.
///
/// Stateless across requests; every call builds and solves a fresh model.
pub struct Packer {
    config: PackConfig,
}

impl Packer {
    /// Creates a packer, verifying that an optimization backend exists.
    ///
    /// A deployment without a MILP backend is a configuration error and
    /// must fail at initialization, not per request.
    pub fn new(config: PackConfig) -> Result<Self> {
        if !backend::is_available() {
            return Err(Error::BackendUnavailable);
        }
        Ok(Self { config })
    }

    /// Creates a packer with the default configuration.
    pub fn default_config() -> Result<Self> {
        Self::new(PackConfig::default())
    }

    /// Strategy the dispatcher will use for a batch of the given unit count.
    pub fn strategy_for(&self, unit_count: usize) -> PackStrategy {
        if unit_count > self.config.exact_unit_limit {
            PackStrategy::Heuristic
        } else {
            PackStrategy::Exact
        }
    }

    /// Packs an order into pallet instances.
    ///
    /// Never fails for "no solution": an infeasible or over-threshold batch
    /// degrades to the heuristic plan. Errors only on invalid input.
    pub fn pack(&self, requests: &[ItemRequest]) -> Result<Vec<PalletInstance>> {
        let items = expand_requests(requests)?;
        if items.is_empty() {
            return Ok(Vec::new());
        }

        if self.strategy_for(items.len()) == PackStrategy::Heuristic {
            log::info!(
                "batch of {} units exceeds exact limit {}, using heuristic solver",
                items.len(),
                self.config.exact_unit_limit
            );
            return Ok(heuristic::solve(&items, &self.config.heuristic));
        }

        let candidates: Vec<_> = items.iter().map(template_for).collect();
        let plan = exact::solve(&items, &candidates);
        if !plan.is_empty() {
            return Ok(plan);
        }

        log::warn!("exact solver returned no plan, falling back to heuristic solver");
        Ok(heuristic::solve(&items, &self.config.heuristic))
    }
}
