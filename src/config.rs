//! Configuration file (`~/.config/setup-banner/config.toml`)
//!
//! Everything is optional. A missing file at the default location means
//! built-in defaults; a file named explicitly (flag or environment
//! variable) must exist.

use crate::banner::{Banner, BannerLine};
use crate::error::{Error, Result};
use crate::style::palette::Palette;
use crate::style::StyleCode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file
pub const CONFIG_ENV_VAR: &str = "SETUP_BANNER_CONFIG";

const CONFIG_DIR_NAME: &str = "setup-banner";
const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Style overrides and additions, name -> escape code
    pub styles: BTreeMap<String, StyleCode>,
    /// Banner text and style names
    pub banner: BannerSection,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct BannerSection {
    pub title: String,
    pub title_style: String,
    pub step: String,
    pub step_style: String,
}

impl Default for BannerSection {
    fn default() -> Self {
        let banner = Banner::default();
        Self {
            title: banner.title.text,
            title_style: banner.title.style,
            step: banner.step.text,
            step_style: banner.step.style,
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Built-in palette with this config's `[styles]` applied
    pub fn palette(&self) -> Palette {
        Palette::builtin().with_overrides(
            self.styles
                .iter()
                .map(|(name, code)| (name.clone(), code.clone())),
        )
    }

    pub fn banner(&self) -> Banner {
        Banner {
            title: BannerLine::new(&self.banner.title, &self.banner.title_style),
            step: BannerLine::new(&self.banner.step, &self.banner.step_style),
        }
    }
}

/// Where a config path came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Flag(PathBuf),
    Env(PathBuf),
    UserDir(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Flag(p) | ConfigSource::Env(p) | ConfigSource::UserDir(p) => p,
        }
    }

    /// Explicitly named files must exist
    fn is_required(&self) -> bool {
        !matches!(self, ConfigSource::UserDir(_))
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/setup-banner/` on Linux.
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME))
}

pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|p| p.join(CONFIG_FILE_NAME))
}

/// Pick the config file: `--config`, then `$SETUP_BANNER_CONFIG`, then the
/// user config directory.
pub fn resolve_source(flag: Option<&Path>) -> Option<ConfigSource> {
    if let Some(path) = flag {
        return Some(ConfigSource::Flag(path.to_path_buf()));
    }
    if let Some(value) = std::env::var_os(CONFIG_ENV_VAR) {
        if !value.is_empty() {
            return Some(ConfigSource::Env(PathBuf::from(value)));
        }
    }
    get_config_path().map(ConfigSource::UserDir)
}

/// Resolve and load the config, falling back to defaults where allowed.
pub fn load(flag: Option<&Path>) -> Result<Config> {
    match resolve_source(flag) {
        Some(source) => load_from_source(&source),
        None => {
            tracing::debug!("no user config directory; using defaults");
            Ok(Config::default())
        }
    }
}

pub fn load_from_source(source: &ConfigSource) -> Result<Config> {
    let path = source.path();
    if !path.exists() {
        if source.is_required() {
            return Err(Error::Config(format!(
                "Config file not found: {}",
                path.display()
            )));
        }
        tracing::debug!(path = %path.display(), "no config file; using defaults");
        return Ok(Config::default());
    }
    load_from_path(path)
}

/// Read and parse a config file that is expected to exist.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!(
            "Failed to read config at {}: {}",
            path.display(),
            e
        ))
    })?;

    let config = Config::from_toml_str(&content).map_err(|e| {
        Error::Config(format!(
            "Failed to parse config at {}: {}",
            path.display(),
            e
        ))
    })?;

    tracing::info!(
        path = %path.display(),
        styles = config.styles.len(),
        "loaded config"
    );
    Ok(config)
}
