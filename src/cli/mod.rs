//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction};
pub use commands::{describe_settings, handle_config_action, init_config, DEFAULT_CONFIG};
pub use enums::{StyleArg, UnitArg};
