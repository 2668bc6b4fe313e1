//! Named style codes
//!
//! The palette is built once at startup from the built-in table plus any
//! `[styles]` overrides in the config file, then passed by reference to
//! whatever needs to style text.

use crate::error::{Error, Result};
use crate::style::{style, StyleCode};
use std::collections::BTreeMap;

/// Built-in styles: (name, code)
pub const BUILTIN_STYLES: &[(&str, &str)] = &[
    ("bold_blue", "\x1b[1;34m"),
    ("blue", "\x1b[34m"),
    ("white", "\x1b[37m"),
    ("yellow", "\x1b[33m"),
    ("bright_blue", "\x1b[94m"),
    ("bright_green", "\x1b[92m"),
    ("bright_cyan", "\x1b[96m"),
];

/// Immutable mapping from style name to escape code, ordered by name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    styles: BTreeMap<String, StyleCode>,
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Palette {
    pub fn builtin() -> Self {
        let styles = BUILTIN_STYLES
            .iter()
            .map(|(name, code)| (name.to_string(), StyleCode::new(*code)))
            .collect();
        Self { styles }
    }

    /// Palette with no entries, for callers that supply every style themselves
    pub fn empty() -> Self {
        Self {
            styles: BTreeMap::new(),
        }
    }

    /// Return a new palette with `overrides` added, replacing same-named entries
    pub fn with_overrides<I, K>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, StyleCode)>,
        K: Into<String>,
    {
        let mut styles = self.styles.clone();
        for (name, code) in overrides {
            let name = name.into();
            if !code.looks_like_escape() {
                tracing::warn!(
                    style = %name,
                    code = %code.escaped(),
                    "style code does not start with ESC; using it verbatim"
                );
            }
            tracing::debug!(style = %name, code = %code.escaped(), "palette entry set");
            styles.insert(name, code);
        }
        Self { styles }
    }

    pub fn get(&self, name: &str) -> Result<&StyleCode> {
        self.styles.get(name).ok_or_else(|| Error::UnknownStyle {
            name: name.to_string(),
            known: self.names().map(str::to_string).collect(),
        })
    }

    /// Style `text` with the named entry
    pub fn paint(&self, name: &str, text: &str) -> Result<String> {
        self.get(name).map(|code| style(text, code))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.styles.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleCode)> {
        self.styles.iter().map(|(name, code)| (name.as_str(), code))
    }

    pub fn len(&self) -> usize {
        self.styles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}
