//! Allowed character set
//!
//! The fixed set of characters accepted in the must-have ingredients field.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Lowercase letters plus comma, hyphen, space and apostrophe.
pub const ALLOWED_CHARS: &str = "abcdefghijklmnopqrstuvwxyz,- '";

static ALLOWED_SET: LazyLock<HashSet<char>> = LazyLock::new(|| ALLOWED_CHARS.chars().collect());

/// Returns true if `ch`, ASCII-lowercased, is in the allowed set.
pub fn is_allowed(ch: char) -> bool {
    ALLOWED_SET.contains(&ch.to_ascii_lowercase())
}
