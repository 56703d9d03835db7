//! # Palletize Core
//!
//! Core data types for the Palletize freight packing engine.
//!
//! This crate provides the value types shared between the packing solvers
//! and their callers:
//!
//! - **Items**: [`ItemRequest`] (order line), [`Item`] (one shippable unit),
//!   [`ItemClass`] (handling class)
//! - **Pallet catalog**: [`PalletKind`], [`PalletTemplate`], and the pure
//!   per-item selector [`template_for`]
//! - **Plan output**: [`PalletInstance`] and the height-estimation policy
//!   in [`plan::height`]
//! - **Errors**: [`Error`], [`Result`]
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod error;
pub mod item;
pub mod pallet;
pub mod plan;

// Re-exports
pub use error::{Error, Result};
pub use item::{expand_requests, Item, ItemClass, ItemRequest};
pub use pallet::{template_for, PalletKind, PalletTemplate};
pub use plan::PalletInstance;
