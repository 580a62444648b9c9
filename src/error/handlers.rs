//! Error handlers
//!
//! Provides error reporting and exit-code mapping.

use crate::error::types::AppError;
use log::error;

/// Handle a fatal application error
pub fn handle_error(err: &AppError) {
    error!("Recipe search error: {}", err);
}

/// Convert error to a process exit code
pub fn error_to_exit_code(err: &AppError) -> i32 {
    match err {
        AppError::Config(_) => 78,
        AppError::Search(_) => 65,
        AppError::IoError(_) => 74,
    }
}
