//! ritual-core
//!
//! Core library for generating Conquest of Elysium 5 mods that rescale ritual
//! costs.
//!
//! This crate defines the resource and ritual model, the embedded ritual table,
//! percentage scaling, `.c5m` rendering, and tiered (per-class) configuration.
//!
//! All substantive logic lives here so it is testable and reusable from
//! multiple frontends; the CLI only wires arguments to these functions.

pub mod model;
pub mod table;
pub mod scale;
pub mod emit;
pub mod tiers;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
