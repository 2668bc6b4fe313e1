//! Setup-start banner
//!
//! Two lines printed when a project setup begins: a bold title and the
//! first step, followed by a blank line.

use crate::error::Result;
use crate::style::palette::Palette;
use std::io::Write;

pub const DEFAULT_TITLE: &str = "Starting project setup:";
pub const DEFAULT_TITLE_STYLE: &str = "bold_blue";
pub const DEFAULT_STEP: &str = "Installing dependencies...";
pub const DEFAULT_STEP_STYLE: &str = "blue";

/// Text plus the palette name it is styled with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BannerLine {
    pub text: String,
    pub style: String,
}

impl BannerLine {
    pub fn new(text: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            style: style.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub title: BannerLine,
    pub step: BannerLine,
}

impl Default for Banner {
    fn default() -> Self {
        Self {
            title: BannerLine::new(DEFAULT_TITLE, DEFAULT_TITLE_STYLE),
            step: BannerLine::new(DEFAULT_STEP, DEFAULT_STEP_STYLE),
        }
    }
}

impl Banner {
    /// Styled lines, without line terminators except the step line's
    /// trailing newline that produces the blank line after the banner.
    pub fn render(&self, palette: &Palette) -> Result<Vec<String>> {
        let title = palette.paint(&self.title.style, &self.title.text)?;
        let mut step = palette.paint(&self.step.style, &self.step.text)?;
        step.push('\n');
        Ok(vec![title, step])
    }

    /// Write the banner, one line per `render` entry.
    ///
    /// Styles are resolved before the first byte is written. Write errors
    /// are returned as-is.
    pub fn write_to<W: Write>(&self, palette: &Palette, mut out: W) -> Result<()> {
        let lines = self.render(palette)?;
        for line in &lines {
            writeln!(out, "{}", line)?;
        }
        out.flush()?;
        tracing::debug!(lines = lines.len(), "banner written");
        Ok(())
    }
}
