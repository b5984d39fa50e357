// Configuration type definitions

use serde::Deserialize;

use crate::matcher::{MatchOptions, MatchScope, MatchType};
use crate::output::OutputFormat;

/// Default matching behaviour when no CLI flag overrides it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct MatchingConfig {
    #[serde(default)]
    pub match_type: MatchType,
    #[serde(default)]
    pub scope: MatchScope,
    #[serde(default)]
    pub case_sensitive: bool,
}

impl MatchingConfig {
    pub fn options(&self) -> MatchOptions {
        MatchOptions::new(self.match_type)
            .scope(self.scope)
            .case_sensitive(self.case_sensitive)
    }
}

/// Output configuration section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub matching: MatchingConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Any valid match type and scope in the [matching] section is parsed as-is
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_matching_parsing(
            match_type in prop::sample::select(vec!["exact", "contains", "regex"]),
            scope in prop::sample::select(vec!["all", "first", "last"]),
            case_sensitive in prop::bool::ANY,
        ) {
            let toml_content = format!(r#"
[matching]
match_type = "{}"
scope = "{}"
case_sensitive = {}
"#, match_type, scope, case_sensitive);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid matching section: {}", toml_content);

            let config = config.unwrap();
            prop_assert_eq!(config.matching.match_type, match_type.parse::<MatchType>().unwrap());
            prop_assert_eq!(config.matching.scope, scope.parse::<MatchScope>().unwrap());
            prop_assert_eq!(config.matching.case_sensitive, case_sensitive);
        }
    }

    // Missing sections or fields fall back to defaults
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_missing_fields_use_defaults(
            include_matching_section in prop::bool::ANY,
            include_output_section in prop::bool::ANY,
        ) {
            let mut toml_content = String::new();
            if include_matching_section {
                toml_content.push_str("[matching]\nscope = \"last\"\n");
            }
            if include_output_section {
                toml_content.push_str("[output]\n");
            }

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse config with missing fields");

            let config = config.unwrap();
            prop_assert_eq!(config.matching.match_type, MatchType::Exact);
            prop_assert!(!config.matching.case_sensitive);
            prop_assert_eq!(config.output.format, OutputFormat::Text);
            let expected_scope = if include_matching_section { MatchScope::Last } else { MatchScope::All };
            prop_assert_eq!(config.matching.scope, expected_scope);
        }
    }

    #[test]
    fn test_unknown_match_type_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[matching]\nmatch_type = \"fuzzy\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_matching_config_builds_options() {
        let matching = MatchingConfig {
            match_type: MatchType::Contains,
            scope: MatchScope::First,
            case_sensitive: true,
        };
        let options = matching.options();
        assert_eq!(options.match_type, MatchType::Contains);
        assert_eq!(options.scope, MatchScope::First);
        assert!(options.case_sensitive);
    }
}
