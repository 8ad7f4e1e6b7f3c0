//! CLI command implementations.

pub mod indexes;
pub mod migrate;
pub mod seed;
