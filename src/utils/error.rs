use std::error::Error;
use std::io;
use thiserror::Error;

/// Common result type for the command line and config layers
pub type BoxResult<T> = std::result::Result<T, Box<dyn Error>>;

/// Result type for heading and table of contents operations
pub type Result<T> = std::result::Result<T, TocError>;

/// Error types for heading and table of contents operations
#[derive(Debug, Error)]
pub enum TocError {
    /// A required argument was empty or malformed
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A heading reached by the TOC builder has no id to link to
    #[error("<{tag}> \"{label}\" has no id! make sure target elements have ids before building a table of contents")]
    MissingIdentifier { tag: String, label: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl TocError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        TocError::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_identifier_message() {
        let err = TocError::MissingIdentifier {
            tag: "h2".to_string(),
            label: "Setup".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("<h2> \"Setup\" has no id!"));
    }

    #[test]
    fn test_io_conversion() {
        let err: TocError = io::Error::new(io::ErrorKind::Other, "boom").into();
        assert!(matches!(err, TocError::Io(_)));
        assert_eq!(err.to_string(), "IO error: boom");
    }
}
