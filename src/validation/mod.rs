//! Must-have ingredient validation
//!
//! The character-whitelist rule applied to the search form before submission.

pub mod charset;
pub mod validator;

pub use charset::{ALLOWED_CHARS, is_allowed};
pub use validator::validate_must_have;
