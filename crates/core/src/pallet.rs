//! Pallet catalog and the per-item template selector.
//!
//! The catalog is a small fixed set of pallet shapes. Template *choice* is
//! item-driven (length thresholds), but every template's capacity, footprint
//! and tare weight are fixed catalog constants, never derived from the item.

use crate::item::Item;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Assembled items fit the small assembled pallet up to this length.
pub const ASSEMBLED_SMALL_MAX_LENGTH: f64 = 55.0;
/// Standard items fit the small standard pallet up to this length.
pub const STANDARD_SMALL_MAX_LENGTH: f64 = 48.0;
/// Standard items fit the medium standard pallet up to this length.
pub const STANDARD_MEDIUM_MAX_LENGTH: f64 = 70.0;

/// Pallet shape tags in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PalletKind {
    /// Long, narrow pallet dedicated to a single bundle.
    Bundle,
    /// Small pallet for assembled items.
    AssembledSmall,
    /// Large pallet for assembled items.
    AssembledLarge,
    /// Small standard (RTA) pallet.
    StandardSmall,
    /// Medium standard (RTA) pallet.
    StandardMedium,
    /// Large standard (RTA) pallet.
    StandardLarge,
}

impl PalletKind {
    /// Catalog code used on freight documents.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Bundle => "BD",
            Self::AssembledSmall => "PLT5",
            Self::AssembledLarge | Self::StandardLarge => "PLT8",
            Self::StandardSmall => "PLT4",
            Self::StandardMedium => "PLT6",
        }
    }
}

impl std::fmt::Display for PalletKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A hypothetical pallet shape offered to the solving stage.
///
/// Templates are stateless and derived deterministically from catalog
/// constants. A batch produces exactly one candidate template per item; the
/// candidate pool is owned by the solving call that generated it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PalletTemplate {
    /// Catalog shape tag.
    pub kind: PalletKind,
    /// Maximum total item volume the pallet accepts.
    pub max_volume: f64,
    /// Deck length.
    pub length: f64,
    /// Deck width.
    pub width: f64,
    /// Empty pallet weight.
    pub tare_weight: f64,
    /// Whether this pallet belongs to the assembled class.
    pub assembled: bool,
    /// Ordinal used only for objective tie-breaking (smaller is preferred).
    pub size_rank: u32,
}

impl PalletTemplate {
    /// Looks up the fixed catalog entry for a pallet kind.
    pub fn of(kind: PalletKind) -> Self {
        match kind {
            PalletKind::Bundle => Self {
                kind,
                max_volume: 9600.0,
                length: 96.0,
                width: 10.0,
                tare_weight: 2.0,
                assembled: false,
                size_rank: 96,
            },
            PalletKind::AssembledSmall => Self {
                kind,
                max_volume: 144_738.0,
                length: 55.0,
                width: 45.0,
                tare_weight: 55.0,
                assembled: true,
                size_rank: 15,
            },
            PalletKind::AssembledLarge => Self {
                kind,
                max_volume: 131_090.0,
                length: 102.0,
                width: 45.0,
                tare_weight: 80.0,
                assembled: true,
                size_rank: 18,
            },
            PalletKind::StandardSmall => Self {
                kind,
                max_volume: 58_372.0,
                length: 45.0,
                width: 45.0,
                tare_weight: 40.0,
                assembled: false,
                size_rank: 4,
            },
            PalletKind::StandardMedium => Self {
                kind,
                max_volume: 236_275.0,
                length: 70.0,
                width: 45.0,
                tare_weight: 70.0,
                assembled: false,
                size_rank: 6,
            },
            PalletKind::StandardLarge => Self {
                kind,
                max_volume: 176_256.0,
                length: 102.0,
                width: 45.0,
                tare_weight: 80.0,
                assembled: false,
                size_rank: 8,
            },
        }
    }

    /// True for bundle-class pallets.
    pub fn is_bundle(&self) -> bool {
        self.kind == PalletKind::Bundle
    }
}

/// Selects the representative pallet template for one item.
///
/// Pure and total: every item maps to exactly one catalog entry.
/// Priority order: bundled, then assembled, then standard length classes.
/// Bundled items are never evaluated against length thresholds.
pub fn template_for(item: &Item) -> PalletTemplate {
    if item.bundled {
        return PalletTemplate::of(PalletKind::Bundle);
    }
    if item.assembled {
        if item.length <= ASSEMBLED_SMALL_MAX_LENGTH {
            return PalletTemplate::of(PalletKind::AssembledSmall);
        }
        return PalletTemplate::of(PalletKind::AssembledLarge);
    }
    if item.length <= STANDARD_SMALL_MAX_LENGTH {
        PalletTemplate::of(PalletKind::StandardSmall)
    } else if item.length <= STANDARD_MEDIUM_MAX_LENGTH {
        PalletTemplate::of(PalletKind::StandardMedium)
    } else {
        PalletTemplate::of(PalletKind::StandardLarge)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Item;

    fn item(length: f64, assembled: bool, bundled: bool) -> Item {
        Item::new("SKU", 10.0, length, 5.0, 5.0, assembled, bundled).unwrap()
    }

    #[test]
    fn test_bundled_always_bundle_pallet() {
        // Length thresholds must not apply to bundled items.
        for length in [1.0, 48.0, 96.0, 200.0] {
            let template = template_for(&item(length, false, true));
            assert_eq!(template.kind, PalletKind::Bundle);
        }
    }

    #[test]
    fn test_assembled_length_threshold() {
        assert_eq!(
            template_for(&item(55.0, true, false)).kind,
            PalletKind::AssembledSmall
        );
        assert_eq!(
            template_for(&item(55.1, true, false)).kind,
            PalletKind::AssembledLarge
        );
    }

    #[test]
    fn test_standard_length_thresholds() {
        assert_eq!(
            template_for(&item(48.0, false, false)).kind,
            PalletKind::StandardSmall
        );
        assert_eq!(
            template_for(&item(48.1, false, false)).kind,
            PalletKind::StandardMedium
        );
        assert_eq!(
            template_for(&item(70.0, false, false)).kind,
            PalletKind::StandardMedium
        );
        assert_eq!(
            template_for(&item(70.1, false, false)).kind,
            PalletKind::StandardLarge
        );
    }

    #[test]
    fn test_catalog_class_flags() {
        assert!(PalletTemplate::of(PalletKind::AssembledSmall).assembled);
        assert!(PalletTemplate::of(PalletKind::AssembledLarge).assembled);
        assert!(!PalletTemplate::of(PalletKind::StandardLarge).assembled);
        assert!(PalletTemplate::of(PalletKind::Bundle).is_bundle());
        assert!(!PalletTemplate::of(PalletKind::StandardSmall).is_bundle());
    }

    #[test]
    fn test_size_rank_prefers_smaller_standard_pallets() {
        let small = PalletTemplate::of(PalletKind::StandardSmall);
        let medium = PalletTemplate::of(PalletKind::StandardMedium);
        let large = PalletTemplate::of(PalletKind::StandardLarge);
        assert!(small.size_rank < medium.size_rank);
        assert!(medium.size_rank < large.size_rank);
    }

    #[test]
    fn test_pallet_codes() {
        assert_eq!(PalletKind::Bundle.code(), "BD");
        assert_eq!(PalletKind::AssembledSmall.code(), "PLT5");
        assert_eq!(PalletKind::AssembledLarge.code(), "PLT8");
        assert_eq!(PalletKind::StandardLarge.code(), "PLT8");
        assert_eq!(format!("{}", PalletKind::StandardMedium), "PLT6");
    }
}
