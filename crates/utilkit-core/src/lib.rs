//! utilkit Core - Foundational types and helpers for the utility kit
//!
//! This crate provides what the animation player and the CLI build on:
//! - `KitError` and the `Result` alias
//! - `Vec3`, `Transform` - Spatial types
//! - `math` - range mapping and rounding
//! - `Spring` - damped spring simulator
//! - `AutoSnap` - grid snapping for a selection of transforms
//! - `bitmask` - flag-enum selection helpers
//! - `CapabilityRegistry` - tag-addressed host actions
//! - `persist` - binary and TOML object persistence

pub mod bitmask;
mod capability;
mod error;
pub mod math;
pub mod persist;
mod snap;
mod spring;
mod types;

pub use capability::CapabilityRegistry;
pub use error::{KitError, Result};
pub use snap::{AutoSnap, SnapSettings};
pub use spring::Spring;
pub use types::{Transform, Vec3};
