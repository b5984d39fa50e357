use std::path::PathBuf;

use autocode::config::Config;
use autocode::output::OutputFormat;
use autocode::{MatchOptions, MatchScope, MatchType};
use clap::Parser;

/// Find text spans to auto-code
#[derive(Debug, Parser)]
#[command(name = "autocode", version, about)]
pub struct Args {
    /// Pattern to search for
    pub pattern: String,

    /// Text file to search (reads stdin when omitted)
    pub file: Option<PathBuf>,

    /// Matching mode: exact, contains or regex
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub match_type: Option<MatchType>,

    /// Which matches to keep: all, first or last
    #[arg(short, long)]
    pub scope: Option<MatchScope>,

    /// Match letter case exactly
    #[arg(short, long)]
    pub case_sensitive: bool,

    /// Ignore letter case, even when the config asks for case-sensitive matching
    #[arg(short, long, conflicts_with = "case_sensitive")]
    pub ignore_case: bool,

    /// Plan auto-coding requests for this code instead of listing matches
    #[arg(long, value_name = "NAME")]
    pub code: Option<String>,

    /// JSON array of existing coded segments ({"code", "start", "end"})
    #[arg(long, value_name = "FILE", requires = "code")]
    pub existing: Option<PathBuf>,

    /// Output format: text or json
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Config file (defaults to ~/.config/autocode/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Effective settings after CLI flags override the config file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub options: MatchOptions,
    pub format: OutputFormat,
}

impl Args {
    pub fn resolve(&self, config: &Config) -> Settings {
        let defaults = config.matching.options();
        Settings {
            options: MatchOptions {
                match_type: self.match_type.unwrap_or(defaults.match_type),
                scope: self.scope.unwrap_or(defaults.scope),
                case_sensitive: self.case_sensitive_override().unwrap_or(defaults.case_sensitive),
            },
            format: self.format.unwrap_or(config.output.format),
        }
    }

    fn case_sensitive_override(&self) -> Option<bool> {
        if self.case_sensitive {
            Some(true)
        } else if self.ignore_case {
            Some(false)
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
