//! # Palletize Solver
//!
//! Packing-decision engine for the Palletize freight quoting workflow.
//!
//! ## Components
//!
//! - **Backend abstraction**: [`MilpBackend`] — the pluggable 0/1
//!   optimization capability (default: `good_lp` with the bundled
//!   pure-Rust solver, behind the `milp` feature)
//! - **Exact solver**: [`exact`] — 0/1 assignment model minimizing pallet
//!   count with a small-size tie-break
//! - **Heuristic solver**: [`heuristic`] — aggregate-weight fallback for
//!   large or infeasible batches
//! - **Dispatcher**: [`Packer`] — expands order lines, applies the
//!   admission threshold, and degrades exact → heuristic
//!
//! ## Quick Start
//!
//! ```rust
//! use palletize_solver::{Packer, PackConfig};
//! use palletize_core::ItemRequest;
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
//! assert!(!plan.is_empty());
//! # Ok::<(), palletize_core::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `milp` (default): `good_lp` MILP backend for the exact solver
//! - `serde`: serialization support on the core data types

pub mod backend;
pub mod exact;
pub mod heuristic;
pub mod packer;

// Re-exports
#[cfg(feature = "milp")]
pub use backend::GoodLpBackend;
pub use backend::{Comparator, MilpBackend, Outcome, VarId};
pub use heuristic::HeuristicConfig;
pub use packer::{PackConfig, PackStrategy, Packer};
