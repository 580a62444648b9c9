//! Error handling
//!
//! Defines error types and handling for the recipe search form.

pub mod handlers;
pub mod types;

pub use types::*;
