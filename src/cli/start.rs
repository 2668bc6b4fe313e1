//! `setup-banner start` command implementation
//!
//! Prints the setup-start banner. Also what runs with no subcommand.

use crate::cli::Context;
use crate::error::Result;
use clap::Args;
use std::io::Write;

#[derive(Args, Debug, Default)]
#[command(after_help = "\
Examples:
  setup-banner                            Print the setup-start banner
  setup-banner start --config team.toml   Use banner text and styles from a file")]
pub struct StartArgs {}

pub fn execute<W: Write>(_args: &StartArgs, ctx: &Context, out: W) -> Result<()> {
    ctx.config.banner().write_to(&ctx.palette, out)
}
