//! Subcommand modules for the `syng` binary.

pub mod comp;
pub mod edges;
