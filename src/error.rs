use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// Output stream or filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Palette listing could not be serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Config file missing, unreadable, or not valid TOML
    #[error("Configuration error: {0}")]
    Config(String),

    /// Style name not in the palette
    #[error("Unknown style '{name}'. Known styles: {}", .known.join(", "))]
    UnknownStyle { name: String, known: Vec<String> },
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_style_lists_known_names() {
        let err = Error::UnknownStyle {
            name: "purple".to_string(),
            known: vec!["blue".to_string(), "bold_blue".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Unknown style 'purple'. Known styles: blue, bold_blue"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("pipe closed"));
    }
}
