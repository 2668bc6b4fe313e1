//! ANSI-styled status lines for project setup scripts
//!
//! [`style::style`] wraps text in a style code and the reset code.
//! [`style::palette::Palette`] maps names to codes, [`banner::Banner`]
//! builds the setup-start lines, and [`config`] loads overrides from TOML.

pub mod banner;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod style;
pub mod utils;
