use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A matched span of the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct TextMatch {
    /// Inclusive start, in characters not bytes
    start: usize,
    /// Exclusive end, in characters not bytes
    end: usize,
}

impl TextMatch {
    pub(crate) fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "match must cover at least one character");
        Self { start, end }
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }

    /// Length of the match in characters
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: a match covers at least one character.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns true when the two half-open ranges share at least one character.
    pub fn overlaps(&self, other: &TextMatch) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// How a pattern is matched against the text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchType {
    /// Whole word only. Pattern characters are literal.
    #[default]
    Exact,
    /// Literal substring anywhere, including inside words.
    Contains,
    /// Pattern is a regular expression.
    Regex,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Exact => "exact",
            MatchType::Contains => "contains",
            MatchType::Regex => "regex",
        }
    }
}

impl fmt::Display for MatchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "exact" => Ok(MatchType::Exact),
            "contains" => Ok(MatchType::Contains),
            "regex" => Ok(MatchType::Regex),
            other => Err(format!(
                "unknown match type '{}' (expected exact, contains or regex)",
                other
            )),
        }
    }
}

/// Which of the found matches are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchScope {
    #[default]
    All,
    First,
    Last,
}

impl MatchScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchScope::All => "all",
            MatchScope::First => "first",
            MatchScope::Last => "last",
        }
    }

    /// Narrows an ordered sequence of matches.
    ///
    /// `First` stops pulling from the iterator after one item, so a lazy scan ends early.
    pub fn select<I>(self, matches: I) -> Vec<TextMatch>
    where
        I: IntoIterator<Item = TextMatch>,
    {
        let mut matches = matches.into_iter();
        match self {
            MatchScope::All => matches.collect(),
            MatchScope::First => matches.next().into_iter().collect(),
            MatchScope::Last => matches.last().into_iter().collect(),
        }
    }
}

impl fmt::Display for MatchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(MatchScope::All),
            "first" => Ok(MatchScope::First),
            "last" => Ok(MatchScope::Last),
            other => Err(format!(
                "unknown match scope '{}' (expected all, first or last)",
                other
            )),
        }
    }
}

/// Everything besides the pattern that controls a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchOptions {
    pub match_type: MatchType,
    pub scope: MatchScope,
    pub case_sensitive: bool,
}

impl MatchOptions {
    pub fn new(match_type: MatchType) -> Self {
        Self {
            match_type,
            ..Self::default()
        }
    }

    pub fn scope(mut self, scope: MatchScope) -> Self {
        self.scope = scope;
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.case_sensitive = value;
        self
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
