//! Error types
//!
//! Defines domain-specific error types for each module of the search form.

use std::fmt;
use std::io;

/// Text shown in the error region when the must-have field is rejected.
pub const INVALID_MUST_HAVE_MESSAGE: &str =
    "invalid character in must-have ingredients. please try again!";

/// Validation module errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A character outside the allowed set, with its char index in the value
    InvalidCharacter { ch: char, position: usize },
}

impl ValidationError {
    /// The user-facing message for this error
    pub fn user_message(&self) -> &'static str {
        match self {
            ValidationError::InvalidCharacter { .. } => INVALID_MUST_HAVE_MESSAGE,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidCharacter { ch, position } => {
                write!(f, "Invalid character {:?} at position {}", ch, position)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Search module errors
#[derive(Debug)]
pub enum SearchError {
    InvalidUrl(url::ParseError),
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::InvalidUrl(e) => write!(f, "Invalid URL: {}", e),
        }
    }
}

impl std::error::Error for SearchError {}

impl From<url::ParseError> for SearchError {
    fn from(error: url::ParseError) -> Self {
        SearchError::InvalidUrl(error)
    }
}

/// General application error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Search(SearchError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Search(e) => write!(f, "Search error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<SearchError> for AppError {
    fn from(error: SearchError) -> Self {
        AppError::Search(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}
