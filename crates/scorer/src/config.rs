use serde::Deserialize;
use std::path::Path;

use crate::rules;

#[derive(Debug, Clone, Deserialize)]
pub struct RulesConfig {
    #[serde(default = "default_keyword_groups")]
    pub keyword_groups: Vec<KeywordGroupConfig>,
    #[serde(default)]
    pub url: UrlRuleConfig,
    #[serde(default = "default_phrasing")]
    pub phrasing: Vec<PhrasingRuleConfig>,
}

impl RulesConfig {
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str(&content)?;
        Ok(config)
    }
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            keyword_groups: default_keyword_groups(),
            url: UrlRuleConfig::default(),
            phrasing: default_phrasing(),
        }
    }
}

/// Each keyword found in the text adds `points` and reports `"<label>: '<keyword>'"`.
#[derive(Debug, Clone, Deserialize)]
pub struct KeywordGroupConfig {
    pub label: String,
    pub points: u32,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UrlRuleConfig {
    #[serde(default = "default_url_pattern")]
    pub pattern: String,
    #[serde(default = "default_url_points")]
    pub points: u32,
    #[serde(default = "default_url_message")]
    pub message: String,
}

impl Default for UrlRuleConfig {
    fn default() -> Self {
        Self {
            pattern: default_url_pattern(),
            points: default_url_points(),
            message: default_url_message(),
        }
    }
}

/// Fires once when every phrase in `all_of` occurs in the text.
#[derive(Debug, Clone, Deserialize)]
pub struct PhrasingRuleConfig {
    pub all_of: Vec<String>,
    pub points: u32,
    pub message: String,
}

fn default_keyword_groups() -> Vec<KeywordGroupConfig> {
    vec![
        KeywordGroupConfig {
            label: rules::URGENCY_LABEL.to_string(),
            points: rules::URGENCY_POINTS,
            keywords: to_owned(rules::URGENCY_WORDS),
        },
        KeywordGroupConfig {
            label: rules::FINANCIAL_LABEL.to_string(),
            points: rules::FINANCIAL_POINTS,
            keywords: to_owned(rules::FINANCIAL_WORDS),
        },
    ]
}

fn default_phrasing() -> Vec<PhrasingRuleConfig> {
    vec![PhrasingRuleConfig {
        all_of: to_owned(rules::ROBOTIC_PHRASES),
        points: rules::ROBOTIC_POINTS,
        message: rules::ROBOTIC_MESSAGE.to_string(),
    }]
}

fn default_url_pattern() -> String {
    rules::URL_PATTERN.to_string()
}

fn default_url_points() -> u32 {
    rules::URL_POINTS
}

fn default_url_message() -> String {
    rules::URL_MESSAGE.to_string()
}

fn to_owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|word| word.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_builtin_tables() {
        let config: RulesConfig = toml::from_str("").expect("parse");
        assert_eq!(config.keyword_groups.len(), 2);
        assert_eq!(config.keyword_groups[0].keywords[3], "24 hours");
        assert_eq!(config.keyword_groups[1].points, 15);
        assert_eq!(config.url.pattern, rules::URL_PATTERN);
        assert_eq!(config.phrasing[0].all_of, vec!["kindly", "immediately"]);
    }

    #[test]
    fn sections_override_independently() {
        let raw = r#"
[url]
points = 5

[[keyword_groups]]
label = "Prize bait"
points = 7
keywords = ["winner", "gift card"]
"#;
        let config: RulesConfig = toml::from_str(raw).expect("parse");
        assert_eq!(config.keyword_groups.len(), 1);
        assert_eq!(config.keyword_groups[0].label, "Prize bait");
        assert_eq!(config.url.points, 5);
        assert_eq!(config.url.message, rules::URL_MESSAGE);
        assert_eq!(config.phrasing.len(), 1);
    }
}
