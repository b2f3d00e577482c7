//! Error types for toastkit

use std::fmt;
use thiserror::Error;

use crate::template::{ContentKind, TileSize};

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// No template exists for this content kind at this size
    UnsupportedSize { kind: ContentKind, size: TileSize },
    /// A bounded collection rejected an insertion past its capacity
    CapacityExceeded { max: usize },
    /// A required field was left unset or holds an out-of-range value
    ContentValidation { reason: String },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSize { kind, size } => {
                write!(f, "{kind} content is not supported on {size} tiles")
            }
            Self::CapacityExceeded { max } => write!(f, "capacity exceeded: max {max}"),
            Self::ContentValidation { reason } => write!(f, "invalid content: {reason}"),
        }
    }
}

/// Main error type for toastkit
#[derive(Error, Clone, Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Shorthand for a [`ErrorKind::ContentValidation`] error
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::ContentValidation {
            reason: reason.into(),
        })
    }

    /// Shorthand for a [`ErrorKind::CapacityExceeded`] error
    pub fn capacity(max: usize, what: &str) -> Self {
        Self::with_message(
            ErrorKind::CapacityExceeded { max },
            format!("{what} cannot hold more than {max} items"),
        )
    }

    pub const fn is_validation(&self) -> bool {
        matches!(self.kind, ErrorKind::ContentValidation { .. })
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result type alias for toastkit
pub type Result<T> = std::result::Result<T, Error>;
