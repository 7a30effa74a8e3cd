//! CLI command implementations.

pub mod artwork;
