//! Auto-coding
//!
//! Turns the spans found by a [`TextMatcher`] into "apply code to range" requests.
//! A span that already carries the same code is skipped, so running the same
//! auto-coding twice plans nothing new.

use serde::{Deserialize, Serialize};

use crate::error::AutocodeError;
use crate::matcher::{MatchOptions, TextMatch, TextMatcher};

/// An existing coding of a text range, in character offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodedSegment {
    pub code: String,
    pub start: usize,
    pub end: usize,
}

impl CodedSegment {
    fn overlaps(&self, m: &TextMatch) -> bool {
        self.start < m.end() && m.start() < self.end
    }
}

/// Apply `code` to every span matching `pattern`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoCodeRequest {
    pub code: String,
    pub pattern: String,
    pub options: MatchOptions,
}

/// One "apply code to range" request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentRequest {
    pub code: String,
    pub start: usize,
    pub end: usize,
    /// The covered text, for review before applying
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AutoCodePlan {
    pub requests: Vec<SegmentRequest>,
    /// Matches dropped because the same code already covers part of them
    pub skipped: usize,
}

/// Plans the segment requests for `request` against `text`.
///
/// Only existing segments with the same code block a match. Scope is applied before
/// the overlap check, so `First` plans at most the first occurrence even when that
/// occurrence is already coded.
pub fn plan(
    text: &str,
    request: &AutoCodeRequest,
    existing: &[CodedSegment],
) -> Result<AutoCodePlan, AutocodeError> {
    if request.code.trim().is_empty() {
        return Err(AutocodeError::EmptyCode);
    }

    let matcher = TextMatcher::new(text);
    let matches = matcher.try_find_matches(&request.pattern, request.options)?;

    let same_code: Vec<&CodedSegment> = existing
        .iter()
        .filter(|segment| segment.code == request.code)
        .collect();

    let texts = matcher.matched_texts(&matches);

    let mut plan = AutoCodePlan::default();
    for (m, text) in matches.into_iter().zip(texts) {
        if same_code.iter().any(|segment| segment.overlaps(&m)) {
            log::debug!(
                "Skipping {}..{}: already coded as {:?}",
                m.start(),
                m.end(),
                request.code
            );
            plan.skipped += 1;
            continue;
        }

        plan.requests.push(SegmentRequest {
            code: request.code.clone(),
            start: m.start(),
            end: m.end(),
            text: text.to_string(),
        });
    }

    Ok(plan)
}

/// Parses a JSON array of existing coded segments.
pub fn parse_segments_json(content: &str) -> Result<Vec<CodedSegment>, AutocodeError> {
    serde_json::from_str(content).map_err(|e| AutocodeError::InvalidSegments(e.to_string()))
}

#[cfg(test)]
#[path = "autocode_tests.rs"]
mod autocode_tests;
