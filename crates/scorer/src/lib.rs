mod config;
mod detectors;
mod rules;

use std::path::Path;

use anyhow::Context;
use protocol::{AnalysisRequest, AnalysisResult, SignalReport};

pub use config::{KeywordGroupConfig, PhrasingRuleConfig, RulesConfig, UrlRuleConfig};
pub use detectors::{lexical_diversity, Detection, RuleSet};

/// Scores free text against a compiled [`RuleSet`]. Holds no mutable state,
/// so one instance can be shared across request handlers.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    rules: RuleSet,
}

impl RiskScorer {
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    pub fn builtin() -> anyhow::Result<Self> {
        Ok(Self::new(RuleSet::builtin()?))
    }

    /// Loads a rules file, falling back to the built-in tables when `path` is `None`.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let config = match path {
            Some(path) => RulesConfig::load(path)
                .with_context(|| format!("failed to load rules {}", path.display()))?,
            None => RulesConfig::default(),
        };
        let rules = RuleSet::from_config(&config).context("failed to compile rules")?;
        Ok(Self::new(rules))
    }

    /// `source_type` is accepted for provenance only and does not change the score.
    pub fn analyze(&self, request: &AnalysisRequest) -> AnalysisResult {
        self.score_text(&request.content)
    }

    pub fn score_text(&self, text: &str) -> AnalysisResult {
        let phishing = self.rules.detect_phishing(text);
        let ai = self.rules.detect_ai_syntax(text);
        let risk_score = phishing.points.saturating_add(ai.points);
        tracing::debug!(
            phishing_points = phishing.points,
            ai_points = ai.points,
            risk_score,
            "text scored"
        );
        AnalysisResult::scored(
            risk_score,
            SignalReport {
                phishing_signals: phishing.signals,
                ai_indicators: ai.signals,
            },
        )
    }
}
