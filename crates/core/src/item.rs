//! Shippable items and order-line expansion.

use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Handling class of an item, derived from its flags.
///
/// The three classes map to disjoint pallet classes: a pallet never mixes
/// items of different classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ItemClass {
    /// Knocked-down (RTA) item, no segregation rule beyond footprint/capacity.
    Standard,
    /// Pre-built item; travels only with other assembled items.
    Assembled,
    /// Long/narrow item requiring a dedicated bundle pallet.
    Bundled,
}

impl std::fmt::Display for ItemClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard => write!(f, "standard"),
            Self::Assembled => write!(f, "assembled"),
            Self::Bundled => write!(f, "bundled"),
        }
    }
}

/// One order line of a packing request: item attributes plus quantity.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemRequest {
    /// Stock keeping unit.
    pub sku: String,
    /// Weight of one unit.
    pub weight: f64,
    /// Length of one unit.
    pub length: f64,
    /// Width of one unit.
    pub width: f64,
    /// Height of one unit.
    pub height: f64,
    /// Whether the item ships pre-assembled.
    pub assembled: bool,
    /// Whether the item ships as a bundle.
    pub bundled: bool,
    /// Requested quantity.
    pub quantity: u32,
}

/// A single shippable unit.
///
/// One `Item` exists per unit of requested quantity; quantity expansion
/// happens before any optimization. Items are immutable value records for
/// the lifetime of one packing request.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Stock keeping unit.
    pub sku: String,
    /// Unit weight.
    pub weight: f64,
    /// Unit length.
    pub length: f64,
    /// Unit width.
    pub width: f64,
    /// Unit height.
    pub height: f64,
    /// Whether the item is pre-assembled.
    pub assembled: bool,
    /// Whether the item is a bundle.
    pub bundled: bool,
}

impl Item {
    /// Creates a new item, validating the handling flags.
    ///
    /// `assembled` and `bundled` are mutually exclusive; violating this is
    /// rejected here, before any optimization runs.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        sku: impl Into<String>,
        weight: f64,
        length: f64,
        width: f64,
        height: f64,
        assembled: bool,
        bundled: bool,
    ) -> Result<Self> {
        let sku = sku.into();
        if assembled && bundled {
            return Err(Error::ConflictingFlags { sku });
        }
        if !(weight.is_finite() && length.is_finite() && width.is_finite() && height.is_finite()) {
            return Err(Error::InvalidItem {
                sku,
                reason: "dimensions and weight must be finite".to_string(),
            });
        }
        if length <= 0.0 || width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidItem {
                sku,
                reason: "dimensions must be positive".to_string(),
            });
        }
        Ok(Self {
            sku,
            weight,
            length,
            width,
            height,
            assembled,
            bundled,
        })
    }

    /// Volume of the unit (length x width x height).
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }

    /// Handling class derived from the flags.
    pub fn class(&self) -> ItemClass {
        if self.bundled {
            ItemClass::Bundled
        } else if self.assembled {
            ItemClass::Assembled
        } else {
            ItemClass::Standard
        }
    }
}

/// Expands order lines into individual item units.
///
/// Produces one [`Item`] per unit of requested quantity, in request order.
/// Validation failures on any line abort the whole request.
pub fn expand_requests(requests: &[ItemRequest]) -> Result<Vec<Item>> {
    let mut items = Vec::with_capacity(requests.iter().map(|r| r.quantity as usize).sum());
    for request in requests {
        let unit = Item::new(
            request.sku.clone(),
            request.weight,
            request.length,
            request.width,
            request.height,
            request.assembled,
            request.bundled,
        )?;
        for _ in 0..request.quantity {
            items.push(unit.clone());
        }
    }
    Ok(items)
}
