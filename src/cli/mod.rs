//! Command-line subcommands
//!
//! Each subcommand module exposes an `Args` struct and an `execute`
//! function that writes to the stream it is handed.

pub mod output_format;
pub mod paint;
pub mod palette;
pub mod start;

use crate::config::{self, Config};
use crate::error::Result;
use crate::style::palette::Palette;
use clap::Args;
use std::path::{Path, PathBuf};

/// Flags accepted before or after any subcommand
#[derive(Args, Debug, Default)]
pub struct GlobalArgs {
    /// Config file (default: $SETUP_BANNER_CONFIG, then ~/.config/setup-banner/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log more to stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Loaded config and the palette built from it, shared by every subcommand
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub palette: Palette,
}

impl Context {
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        Ok(Self::from_config(config::load(config_path)?))
    }

    pub fn from_config(config: Config) -> Self {
        let palette = config.palette();
        Self { config, palette }
    }
}
