//! CLI layer — command implementations used by the `congraph` binary.

pub mod commands;
