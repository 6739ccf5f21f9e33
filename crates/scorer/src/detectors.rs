use regex::Regex;

use crate::config::{KeywordGroupConfig, PhrasingRuleConfig, RulesConfig};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Detection {
    pub points: u32,
    pub signals: Vec<String>,
}

impl Detection {
    fn hit(&mut self, points: u32, signal: String) {
        self.points = self.points.saturating_add(points);
        self.signals.push(signal);
    }
}

#[derive(Debug, Clone)]
struct KeywordGroup {
    label: String,
    points: u32,
    keywords: Vec<String>,
}

#[derive(Debug, Clone)]
struct UrlRule {
    regex: Regex,
    points: u32,
    message: String,
}

#[derive(Debug, Clone)]
struct PhrasingRule {
    all_of: Vec<String>,
    points: u32,
    message: String,
}

/// Compiled detection rules. Keywords and phrases are stored lowercased.
#[derive(Debug, Clone)]
pub struct RuleSet {
    keyword_groups: Vec<KeywordGroup>,
    url: UrlRule,
    phrasing: Vec<PhrasingRule>,
}

impl RuleSet {
    pub fn from_config(config: &RulesConfig) -> anyhow::Result<Self> {
        let keyword_groups = config
            .keyword_groups
            .iter()
            .map(keyword_group)
            .collect::<anyhow::Result<Vec<_>>>()?;
        let regex = Regex::new(&config.url.pattern).map_err(|err| {
            anyhow::anyhow!("invalid url pattern {}: {err}", config.url.pattern)
        })?;
        let phrasing = config
            .phrasing
            .iter()
            .map(phrasing_rule)
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Self {
            keyword_groups,
            url: UrlRule {
                regex,
                points: config.url.points,
                message: config.url.message.clone(),
            },
            phrasing,
        })
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Self::from_config(&RulesConfig::default())
    }

    /// Keyword groups followed by the URL check. Keyword signals keep table order.
    pub fn detect_phishing(&self, text: &str) -> Detection {
        let lowered = text.to_lowercase();
        let mut detection = Detection::default();
        for group in &self.keyword_groups {
            for keyword in &group.keywords {
                if lowered.contains(keyword.as_str()) {
                    detection.hit(group.points, format!("{}: '{keyword}'", group.label));
                }
            }
        }
        if self.url.regex.is_match(text) {
            detection.hit(self.url.points, self.url.message.clone());
        }
        detection
    }

    pub fn detect_ai_syntax(&self, text: &str) -> Detection {
        let lowered = text.to_lowercase();
        let mut detection = Detection::default();
        for rule in &self.phrasing {
            if rule
                .all_of
                .iter()
                .all(|phrase| lowered.contains(phrase.as_str()))
            {
                detection.hit(rule.points, rule.message.clone());
            }
        }
        detection
    }
}

fn keyword_group(config: &KeywordGroupConfig) -> anyhow::Result<KeywordGroup> {
    if config.keywords.is_empty() {
        anyhow::bail!("keyword group {} has no keywords", config.label);
    }
    let keywords = config
        .keywords
        .iter()
        .map(|keyword| {
            if keyword.trim().is_empty() {
                anyhow::bail!("keyword group {} has an empty keyword", config.label);
            }
            Ok(keyword.to_lowercase())
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(KeywordGroup {
        label: config.label.clone(),
        points: config.points,
        keywords,
    })
}

fn phrasing_rule(config: &PhrasingRuleConfig) -> anyhow::Result<PhrasingRule> {
    if config.all_of.is_empty() || config.all_of.iter().any(|phrase| phrase.trim().is_empty()) {
        anyhow::bail!("phrasing rule {} needs non-empty phrases", config.message);
    }
    Ok(PhrasingRule {
        all_of: config
            .all_of
            .iter()
            .map(|phrase| phrase.to_lowercase())
            .collect(),
        points: config.points,
        message: config.message.clone(),
    })
}

/// Distinct whitespace-separated tokens over total tokens; 0 for blank text.
/// Machine-written text tends to repeat itself and score lower.
pub fn lexical_diversity(text: &str) -> f64 {
    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return 0.0;
    }
    let distinct: std::collections::HashSet<&str> = tokens.iter().copied().collect();
    distinct.len() as f64 / tokens.len() as f64
}
