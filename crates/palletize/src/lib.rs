//! # Palletize
//!
//! Pallet packing engine for a freight-quoting workflow.
//!
//! Given an order's line items (weight, footprint, height, handling flags),
//! Palletize produces a packing plan: the pallets to use, their estimated
//! loaded heights and total weights, and the items committed to each. The
//! plan minimizes the number/size of pallets while keeping assembled,
//! bundled and standard freight strictly segregated.
//!
//! ## Quick Start
//!
//! ```rust
//! use palletize::{ItemRequest, PackConfig, Packer};
//!
//! let packer = Packer::new(PackConfig::default())?;
//! let plan = packer.pack(&[ItemRequest {
//!     sku: "CAB-100".to_string(),
//!     weight: 42.0,
//!     length: 30.0,
//!     width: 20.0,
//!     height: 15.0,
//!     assembled: false,
//!     bundled: false,
//!     quantity: 2,
//! }])?;
//!
//! for pallet in &plan {
//!     println!(
//!         "{} {}x{} est. height {} total {} lb",
//!         pallet.kind, pallet.length, pallet.width,
//!         pallet.estimated_height, pallet.total_weight,
//!     );
//! }
//! # Ok::<(), palletize::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `milp` (default): `good_lp` MILP backend for the exact solver
//! - `serde`: serialization/deserialization support

/// Core data types.
pub use palletize_core as core;

/// Packing solvers and the dispatcher.
pub use palletize_solver as solver;

// Re-export commonly used types at root level
pub use palletize_core::{
    expand_requests, template_for, Error, Item, ItemClass, ItemRequest, PalletInstance, PalletKind,
    PalletTemplate, Result,
};
pub use palletize_solver::{HeuristicConfig, MilpBackend, PackConfig, PackStrategy, Packer};
