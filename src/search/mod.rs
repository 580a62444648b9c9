//! Recipe search
//!
//! The search form fields and the requests a submitted search turns into.

pub mod form;
pub mod query;
pub mod recipes;

pub use form::SearchForm;
pub use query::SearchQuery;
pub use recipes::{MISSING_INSTRUCTIONS, clean_instructions, random_url, recipe_info_url, similar_url};
