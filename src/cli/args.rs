//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{StyleArg, UnitArg};

/// Interactive crochet pattern and blanket planning wizard
#[derive(Parser, Debug)]
#[command(name = "craftlogic")]
#[command(version, about = "Crochet pattern and blanket planning wizard", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Pattern wording (overrides the config file)
    #[arg(long, short)]
    pub style: Option<StyleArg>,

    /// Default unit for custom dimensions (overrides the config file)
    #[arg(long, short)]
    pub unit: Option<UnitArg>,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
