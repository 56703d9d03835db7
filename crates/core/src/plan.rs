//! Packing plan output: pallet instances and the height-estimation policy.

use crate::item::Item;
use crate::pallet::{PalletKind, PalletTemplate};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Height-estimation policy.
///
/// Estimated pallet height is a footprint/volume approximation, not true
/// stacking geometry: items are assumed to fill the deck evenly, then the
/// pallet deck and a handling clearance are added on top. Kept isolated so
/// the constants can be tuned without touching the solvers.
pub mod height {
    /// Height of the pallet deck itself.
    pub const DECK_HEIGHT: f64 = 4.5;
    /// Headroom added above the load for strapping and forklift handling.
    pub const STACK_CLEARANCE: f64 = 2.0;

    /// Estimates the loaded height of a pallet from accumulated item volume.
    pub fn estimate(used_volume: f64, length: f64, width: f64) -> f64 {
        used_volume / (length * width) + DECK_HEIGHT + STACK_CLEARANCE
    }
}

/// Rounds to one decimal place (weights, as printed on freight documents).
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Rounds to two decimal places (volumes and heights).
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A pallet committed to by a solving strategy, with the items loaded on it.
///
/// Created only when a candidate is actually used; immutable once produced.
/// Instances emitted by the heuristic solver size pallets by aggregate
/// weight and carry no item-level detail (`items` is empty).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletInstance {
    /// Catalog shape tag of the selected template.
    pub kind: PalletKind,
    /// Deck length.
    pub length: f64,
    /// Deck width.
    pub width: f64,
    /// Estimated loaded height.
    pub estimated_height: f64,
    /// Tare weight plus the weight of all committed items.
    pub total_weight: f64,
    /// Accumulated item volume.
    pub used_volume: f64,
    /// Whether the pallet belongs to the assembled class.
    pub assembled: bool,
    /// Items committed to this pallet, in assignment order.
    pub items: Vec<Item>,
}

impl PalletInstance {
    /// Builds an instance from a used candidate template and its assigned items.
    ///
    /// Accumulates item weight onto the tare weight, sums item volumes, and
    /// estimates the loaded height from the accumulated volume.
    pub fn from_assignment(template: &PalletTemplate, items: Vec<Item>) -> Self {
        let mut total_weight = template.tare_weight;
        let mut used_volume = 0.0;
        for item in &items {
            total_weight += item.weight;
            used_volume += item.volume();
        }
        Self {
            kind: template.kind,
            length: template.length,
            width: template.width,
            estimated_height: round2(height::estimate(used_volume, template.length, template.width)),
            total_weight: round1(total_weight),
            used_volume: round2(used_volume),
            assembled: template.assembled,
            items,
        }
    }

    /// Builds an aggregate instance with explicit dimensions and weight.
    ///
    /// Used by the heuristic solver, which sizes pallets by total weight
    /// rather than per-item assignment.
    pub fn aggregate(
        kind: PalletKind,
        length: f64,
        width: f64,
        estimated_height: f64,
        total_weight: f64,
        assembled: bool,
    ) -> Self {
        Self {
            kind,
            length,
            width,
            estimated_height: round2(estimated_height),
            total_weight: round1(total_weight),
            used_volume: 0.0,
            assembled,
            items: Vec::new(),
        }
    }

    /// Number of items committed to this pallet.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}
