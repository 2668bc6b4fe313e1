//! Output format handling for CLI commands

use clap::ValueEnum;

/// Output format for listing commands
///
/// - `Human`: aligned, styled table (default)
/// - `Json`: machine-readable JSON
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable styled output (default)
    #[default]
    Human,
    /// Machine-readable JSON output
    Json,
}

impl OutputFormat {
    /// Returns true if this format should carry no escape sequences
    pub fn is_machine_readable(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}
