//! Addon checker CLI library.
//!
//! Loads an addon directory from disk and drives the rule checks from
//! `addoncheck-lint` against it.

pub mod commands;
