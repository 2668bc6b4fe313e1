//! `setup-banner palette` command implementation
//!
//! Lists the named styles after config overrides are applied.

use crate::cli::output_format::OutputFormat;
use crate::cli::Context;
use crate::error::Result;
use crate::style::palette::Palette;
use clap::Args;
use serde::Serialize;
use std::io::Write;

#[derive(Args, Debug, Default)]
#[command(after_help = "\
Examples:
  setup-banner palette                    Show styles with a sample of each
  setup-banner palette --format json      Output as JSON")]
pub struct PaletteArgs {
    /// Output format: human (default) or json
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,
}

/// One palette entry in JSON output
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: String,
    pub code: String,
}

pub fn entries(palette: &Palette) -> Vec<PaletteEntry> {
    palette
        .iter()
        .map(|(name, code)| PaletteEntry {
            name: name.to_string(),
            code: code.as_str().to_string(),
        })
        .collect()
}

pub fn execute<W: Write>(args: &PaletteArgs, ctx: &Context, mut out: W) -> Result<()> {
    if args.format.is_machine_readable() {
        let json = serde_json::to_string_pretty(&entries(&ctx.palette))?;
        writeln!(out, "{}", json)?;
    } else {
        write_human(&ctx.palette, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn write_human<W: Write>(palette: &Palette, out: &mut W) -> Result<()> {
    let name_width = palette.names().map(str::len).max().unwrap_or(0);
    let code_width = palette
        .iter()
        .map(|(_, code)| code.escaped().len())
        .max()
        .unwrap_or(0);

    for (name, code) in palette.iter() {
        writeln!(
            out,
            "{:<nw$}  {:<cw$}  {}",
            name,
            code.escaped(),
            code.paint("sample"),
            nw = name_width,
            cw = code_width,
        )?;
    }
    Ok(())
}
