//! Diagnostic logging on stderr
//!
//! Stdout carries only styled output, so every `tracing` event goes to
//! stderr. `RUST_LOG` wins over the `-v`/`-q` flags.

use std::fmt;
use tracing_subscriber::EnvFilter;

/// Verbosity levels selected by `-q` and repeated `-v`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Errors only (`-q`)
    Quiet = 0,
    /// Warnings, e.g. style codes that don't begin with ESC
    #[default]
    Normal = 1,
    /// Which config file was loaded (`-v`)
    Verbose = 2,
    /// Palette entries and write details (`-vv`)
    Debug = 3,
    /// Everything (`-vvv`)
    Trace = 4,
}

impl Verbosity {
    pub fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Verbosity::Quiet;
        }
        match verbose {
            0 => Verbosity::Normal,
            1 => Verbosity::Verbose,
            2 => Verbosity::Debug,
            _ => Verbosity::Trace,
        }
    }

    pub fn as_directive(&self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
            Verbosity::Trace => "trace",
        }
    }
}

impl fmt::Display for Verbosity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_directive())
    }
}

/// Filter for this crate at `verbosity`, unless `RUST_LOG` is set
pub fn build_filter(verbosity: Verbosity) -> EnvFilter {
    let default_directive = format!("setup_banner={}", verbosity.as_directive());
    match std::env::var("RUST_LOG") {
        Ok(env) if !env.trim().is_empty() => {
            EnvFilter::try_new(&env).unwrap_or_else(|_| EnvFilter::new(&default_directive))
        }
        _ => EnvFilter::new(default_directive),
    }
}

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbosity: Verbosity) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(verbosity))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
