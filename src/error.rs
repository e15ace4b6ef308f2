//! Error types for unidml library.

use std::io;
use thiserror::Error;

/// Result type alias for unidml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while extracting articles.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading story files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The story bytes are not well-formed XML.
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The story XML is well-formed but not a usable story document.
    #[error("Story parsing error: {0}")]
    StoryParse(String),

    /// Error during rendering (HTML, JSON).
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::StoryParse(format!("malformed attribute: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::StoryParse("missing Story element".to_string());
        assert_eq!(
            err.to_string(),
            "Story parsing error: missing Story element"
        );

        let err = Error::Render("bad".to_string());
        assert_eq!(err.to_string(), "Rendering error: bad");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
