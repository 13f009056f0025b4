//! Error types for pester-core

use thiserror::Error;

/// Result type alias for pester-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while discovering test scripts
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was empty or not supplied
    #[error("value cannot be null or empty (parameter '{param}')")]
    MissingArgument {
        /// Name of the offending parameter
        param: &'static str,
    },

    /// The supplied directory does not exist
    #[error("{message} (parameter '{param}')")]
    InvalidDirectory {
        /// Name of the offending parameter
        param: &'static str,
        /// Human-readable explanation
        message: String,
    },

    /// Directory traversal failed below the project root
    #[error("failed to walk project directory: {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    /// Name of the parameter that failed validation, if any.
    pub fn param(&self) -> Option<&'static str> {
        match self {
            Error::MissingArgument { param } | Error::InvalidDirectory { param, .. } => {
                Some(param)
            }
            Error::Walk(_) => None,
        }
    }
}
