//! `setup-banner paint` command implementation
//!
//! Styles a single line of text with a palette name or a raw code.

use crate::cli::Context;
use crate::error::Result;
use crate::style::{style, StyleCode};
use clap::Args;
use std::io::Write;

#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  setup-banner paint 'Checking PostgreSQL installation...' --style bright_blue
  setup-banner paint 'Done!' --style bright_green --blank-before
  setup-banner paint 'Custom' --code $'\\e[4;35m'")]
pub struct PaintArgs {
    /// Text to style (may be empty)
    #[arg(value_name = "TEXT", allow_hyphen_values = true)]
    pub text: String,

    /// Palette style name
    #[arg(short, long, default_value = "blue", conflicts_with = "code")]
    pub style: String,

    /// Raw style code, used verbatim
    #[arg(long, value_name = "CODE")]
    pub code: Option<String>,

    /// Print an empty line before the styled line
    #[arg(long)]
    pub blank_before: bool,
}

pub fn execute<W: Write>(args: &PaintArgs, ctx: &Context, mut out: W) -> Result<()> {
    let line = match &args.code {
        Some(code) => {
            let code: StyleCode = code.as_str().into();
            if !code.looks_like_escape() {
                tracing::warn!(code = %code.escaped(), "style code does not start with ESC; using it verbatim");
            }
            style(&args.text, &code)
        }
        None => ctx.palette.paint(&args.style, &args.text)?,
    };

    if args.blank_before {
        writeln!(out)?;
    }
    writeln!(out, "{}", line)?;
    out.flush()?;
    Ok(())
}
