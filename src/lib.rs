//! Locate text spans for auto-coding.
//!
//! A [`TextMatcher`] finds every span of a document that matches a pattern, under
//! exact-word, substring or regular-expression semantics. The [`autocode`] module turns
//! those spans into "apply code to range" requests.

pub mod autocode;
pub mod config;
pub mod error;
pub mod matcher;
pub mod output;

pub use error::AutocodeError;
pub use matcher::{MatchOptions, MatchScope, MatchType, TextMatch, TextMatcher};
