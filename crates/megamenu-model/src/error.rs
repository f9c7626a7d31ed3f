use thiserror::Error;

/// Errors raised while reading menu documents, styles and configuration.
///
/// None of these are fatal to the menu itself: style failures are collapsed
/// to an empty style at the point of use, and document failures only surface
/// from menu sources and the CLI.
#[derive(Debug, Error)]
pub enum MenuError {
    /// A node's inline style was not a JSON object.
    #[error("invalid inline style: {reason}")]
    InvalidStyle {
        /// Description of what went wrong.
        reason: String,
    },

    /// The menus document could not be parsed.
    #[error("invalid menu document: {reason}")]
    InvalidDocument {
        /// Description of what went wrong.
        reason: String,
    },

    /// Mount configuration could not be parsed.
    #[error("invalid configuration: {reason}")]
    Config {
        /// Description of what went wrong.
        reason: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl MenuError {
    /// Create a style error from any error source.
    pub fn style(err: impl std::fmt::Display) -> Self {
        Self::InvalidStyle {
            reason: err.to_string(),
        }
    }

    /// Create a document error from any error source.
    pub fn document(err: impl std::fmt::Display) -> Self {
        Self::InvalidDocument {
            reason: err.to_string(),
        }
    }

    /// Create a configuration error from any error source.
    pub fn config(err: impl std::fmt::Display) -> Self {
        Self::Config {
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MenuError>;
