pub mod config;
pub mod error;
pub mod form;
pub mod search;
pub mod terminal;
pub mod validation;

pub use form::SearchFormValidator;
pub use terminal::SearchPage;
