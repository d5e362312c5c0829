//! CLI layer - argument parsing, presentation, and command runners

pub mod app;
pub mod args;
pub mod config_cmd;
pub mod presenter;
pub mod shell;

pub use args::{Cli, Commands, ConfigAction};
