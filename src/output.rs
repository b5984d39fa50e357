//! Rendering of matches and auto-coding plans for the terminal or for other tools.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::autocode::AutoCodePlan;
use crate::error::AutocodeError;
use crate::matcher::{TextMatch, TextMatcher};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}' (expected text or json)",
                other
            )),
        }
    }
}

#[derive(Serialize)]
struct MatchRecord<'a> {
    #[serde(flatten)]
    span: TextMatch,
    text: &'a str,
}

/// Renders matches, one per line in text mode: `start..end  text`.
pub fn render_matches(
    matcher: &TextMatcher<'_>,
    matches: &[TextMatch],
    format: OutputFormat,
) -> Result<String, AutocodeError> {
    let texts = matcher.matched_texts(matches);

    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for (m, text) in matches.iter().zip(texts) {
                out.push_str(&format!(
                    "{}..{}  {}\n",
                    m.start(),
                    m.end(),
                    display_text(text)
                ));
            }
            Ok(out)
        }
        OutputFormat::Json => {
            let records: Vec<MatchRecord<'_>> = matches
                .iter()
                .zip(texts)
                .map(|(m, text)| MatchRecord { span: *m, text })
                .collect();
            to_json(&records)
        }
    }
}

/// Renders an auto-coding plan followed by a summary line in text mode.
pub fn render_plan(plan: &AutoCodePlan, format: OutputFormat) -> Result<String, AutocodeError> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for request in &plan.requests {
                out.push_str(&format!(
                    "{}  {}..{}  {}\n",
                    request.code,
                    request.start,
                    request.end,
                    display_text(&request.text)
                ));
            }
            out.push_str(&format!(
                "{} segment(s) planned, {} skipped\n",
                plan.requests.len(),
                plan.skipped
            ));
            Ok(out)
        }
        OutputFormat::Json => to_json(plan),
    }
}

// Regex matches can span lines; keep one record per line.
fn display_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(ch),
        }
    }
    out
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AutocodeError> {
    let mut json =
        serde_json::to_string_pretty(value).map_err(|e| AutocodeError::Output(e.to_string()))?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod output_tests;
