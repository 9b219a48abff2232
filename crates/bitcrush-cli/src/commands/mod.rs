//! CLI subcommands.

pub mod info;
pub mod presets;
pub mod process;
