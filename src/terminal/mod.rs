//! Terminal front end
//!
//! Hosts the search page on stdin/stdout: prompts for the form fields and
//! renders the error region.

pub mod page;
pub mod region;

pub use page::SearchPage;
pub use region::TerminalErrorRegion;
