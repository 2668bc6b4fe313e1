//! ANSI text styling
//!
//! A styled string is the style code, the text, and the reset code, joined
//! with no escaping. The meaning of the code is left to the terminal:
//! any string is accepted as a style.
//!
//! ```
//! use setup_banner::style::{style, StyleCode};
//!
//! let blue = StyleCode::new("\x1b[34m");
//! assert_eq!(style("ok", &blue), "\x1b[34mok\x1b[0m");
//! ```

pub mod palette;

use serde::{Deserialize, Serialize};

/// Escape character that every ANSI control sequence starts with
pub const ESC: char = '\x1b';

/// Cancels all active styling
pub const RESET: &str = "\x1b[0m";

/// An opening escape sequence, e.g. `\x1b[1;34m` for bold blue
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleCode(String);

impl StyleCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if the code begins with ESC. Codes that don't are still usable.
    pub fn looks_like_escape(&self) -> bool {
        self.0.starts_with(ESC)
    }

    /// The code with ESC written as `\x1b`, for display
    pub fn escaped(&self) -> String {
        self.0.replace(ESC, "\\x1b")
    }

    /// Wrap `text` in this style
    pub fn paint(&self, text: &str) -> String {
        style(text, self)
    }
}

impl AsRef<str> for StyleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Return `style + text + RESET`.
///
/// Total over its inputs: empty text, text carrying its own escape
/// sequences, and arbitrary style strings are all concatenated as-is.
pub fn style(text: &str, style: impl AsRef<str>) -> String {
    let style = style.as_ref();
    let mut out = String::with_capacity(style.len() + text.len() + RESET.len());
    out.push_str(style);
    out.push_str(text);
    out.push_str(RESET);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: &str = "\x1b[34m";
    const BOLD_BLUE: &str = "\x1b[1;34m";

    #[test]
    fn test_style_installing_dependencies() {
        assert_eq!(
            style("Installing dependencies...", BLUE),
            "\x1b[34mInstalling dependencies...\x1b[0m"
        );
    }

    #[test]
    fn test_style_starting_project_setup() {
        assert_eq!(
            style("Starting project setup:", BOLD_BLUE),
            "\x1b[1;34mStarting project setup:\x1b[0m"
        );
    }

    #[test]
    fn test_style_empty_text() {
        assert_eq!(style("", BLUE), format!("{}{}", BLUE, RESET));
    }

    #[test]
    fn test_style_prefix_suffix_and_length() {
        let inputs = ["", "x", "multi\nline", "ünïcödé ✓", "\x1b[31malready red"];
        let codes = [BLUE, BOLD_BLUE, "", "not-a-code"];
        for text in inputs {
            for code in codes {
                let out = style(text, code);
                assert!(out.starts_with(code), "prefix for {:?}/{:?}", text, code);
                assert!(out.ends_with(RESET), "suffix for {:?}/{:?}", text, code);
                assert_eq!(out.len(), code.len() + text.len() + RESET.len());
            }
        }
    }

    #[test]
    fn test_style_nesting_keeps_both_codes() {
        let inner = style("text", BLUE);
        let outer = style(&inner, BOLD_BLUE);
        assert_eq!(outer, "\x1b[1;34m\x1b[34mtext\x1b[0m\x1b[0m");
        assert_eq!(outer.matches(RESET).count(), 2);
    }

    #[test]
    fn test_style_does_not_escape_text() {
        let text = "50% done {braces} \\ \"quotes\"";
        assert_eq!(style(text, BLUE), format!("{}{}{}", BLUE, text, RESET));
    }

    #[test]
    fn test_style_code_paint_matches_style() {
        let code = StyleCode::new(BOLD_BLUE);
        assert_eq!(code.paint("hi"), style("hi", BOLD_BLUE));
    }

    #[test]
    fn test_style_code_escaped() {
        assert_eq!(StyleCode::new(BOLD_BLUE).escaped(), "\\x1b[1;34m");
        assert_eq!(StyleCode::new("plain").escaped(), "plain");
    }

    #[test]
    fn test_style_code_from_str() {
        let code: StyleCode = "\x1b[4m".into();
        assert_eq!(code, StyleCode::new("\x1b[4m"));
    }

    #[test]
    fn test_looks_like_escape() {
        assert!(StyleCode::new(BLUE).looks_like_escape());
        assert!(!StyleCode::new("[34m").looks_like_escape());
        assert!(!StyleCode::new("").looks_like_escape());
    }
}
