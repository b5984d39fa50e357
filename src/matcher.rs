//! Matcher module
//!
//! Finds the spans of a fixed text that match a pattern. Offsets are reported in
//! characters, so callers can map them straight onto what the user sees.

mod offsets;
mod text_matcher;
mod types;

pub use text_matcher::{REGEX_SIZE_LIMIT, TextMatcher};
pub use types::{MatchOptions, MatchScope, MatchType, TextMatch};
