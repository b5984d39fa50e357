use regex::{Regex, RegexBuilder};

use super::offsets::{ByteCursor, CharCursor};
use super::types::{MatchOptions, MatchScope, MatchType, TextMatch};
use crate::error::AutocodeError;

/// Upper bound for a compiled pattern and its lazy DFA cache (10 MiB)
pub const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

/// Finds pattern matches in one fixed text.
///
/// The matcher only borrows the text, so it can be shared across threads and queried
/// any number of times. Calls never influence each other.
#[derive(Debug, Clone, Copy)]
pub struct TextMatcher<'a> {
    text: &'a str,
}

impl<'a> TextMatcher<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Length of the text in characters
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns every span matching `pattern`, narrowed by `scope`.
    ///
    /// Never fails. An empty pattern or a pattern that does not compile yields no
    /// matches. Use [`TextMatcher::try_find_matches`] to tell those cases apart.
    ///
    /// `Regex` patterns use the syntax of the `regex` crate: look-around and
    /// backreferences are not supported, so patterns such as `(?<=the )cat` do not
    /// compile and yield no matches here.
    pub fn find_matches(
        &self,
        pattern: &str,
        match_type: MatchType,
        scope: MatchScope,
        case_sensitive: bool,
    ) -> Vec<TextMatch> {
        let options = MatchOptions {
            match_type,
            scope,
            case_sensitive,
        };

        match self.try_find_matches(pattern, options) {
            Ok(matches) => matches,
            Err(e) => {
                log::debug!("{}; returning no matches", e);
                Vec::new()
            }
        }
    }

    /// Like [`TextMatcher::find_matches`], but reports a pattern that does not compile.
    pub fn try_find_matches(
        &self,
        pattern: &str,
        options: MatchOptions,
    ) -> Result<Vec<TextMatch>, AutocodeError> {
        if pattern.is_empty() {
            return Ok(Vec::new());
        }

        let regex = compile(pattern, options.match_type, options.case_sensitive)?;

        let mut cursor = CharCursor::new(self.text);
        let found = regex
            .find_iter(self.text)
            // Zero-width hits (e.g. `a*` between characters) cover no text
            .filter(|m| !m.is_empty())
            .map(|m| {
                let start = cursor.advance_to(m.start());
                let end = cursor.advance_to(m.end());
                TextMatch::new(start, end)
            });

        let matches = options.scope.select(found);

        log::debug!(
            "{} {} match(es) for {:?} (scope {}, case sensitive {})",
            matches.len(),
            options.match_type,
            pattern,
            options.scope,
            options.case_sensitive
        );

        Ok(matches)
    }

    /// The slice of the text covered by `m`.
    ///
    /// Offsets past the end of the text are clamped, so a match taken from another
    /// text never panics. Use [`TextMatcher::matched_texts`] for a whole result list.
    pub fn matched_text(&self, m: &TextMatch) -> &'a str {
        slice(self.text, &mut ByteCursor::new(self.text), m)
    }

    /// The slices covered by each of `matches`, in the same order.
    ///
    /// Ascending matches, as returned by the find calls, are resolved in one walk
    /// over the text.
    pub fn matched_texts(&self, matches: &[TextMatch]) -> Vec<&'a str> {
        let mut cursor = ByteCursor::new(self.text);
        matches
            .iter()
            .map(|m| slice(self.text, &mut cursor, m))
            .collect()
    }
}

fn slice<'a>(text: &'a str, cursor: &mut ByteCursor<'a>, m: &TextMatch) -> &'a str {
    let start = cursor.byte_at(m.start());
    let end = cursor.byte_at(m.end()).max(start);
    &text[start..end]
}

fn compile(
    pattern: &str,
    match_type: MatchType,
    case_sensitive: bool,
) -> Result<Regex, AutocodeError> {
    let source = match match_type {
        MatchType::Exact => format!(r"\b{}\b", regex::escape(pattern)),
        MatchType::Contains => regex::escape(pattern),
        MatchType::Regex => pattern.to_string(),
    };

    RegexBuilder::new(&source)
        .case_insensitive(!case_sensitive)
        .size_limit(REGEX_SIZE_LIMIT)
        .dfa_size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|e| AutocodeError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
#[path = "text_matcher_tests.rs"]
mod text_matcher_tests;
