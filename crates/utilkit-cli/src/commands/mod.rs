//! CLI command implementations

pub mod constants;
pub mod simulate;
pub mod validate;
