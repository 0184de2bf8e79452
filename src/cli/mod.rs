//! CLI: argument definitions and subcommand drivers.

pub mod apply;
mod args;
pub mod inspect;

pub use args::{ApplyArgs, Cli, Commands, InspectArgs};
