//! Command implementations for the `ratg` binary.

pub mod commands;
