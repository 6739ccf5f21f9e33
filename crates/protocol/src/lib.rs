use serde::{Deserialize, Serialize};

pub const RECOMMEND_CAUTION: &str = "Do not click links. Call your bank immediately.";
pub const RECOMMEND_SAFE: &str = "Message appears safe.";

/// Channel the text came from. Carried through for logging only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    Email,
    Sms,
    Chat,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::Email => "email",
            SourceType::Sms => "sms",
            SourceType::Chat => "chat",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisRequest {
    pub content: String,
    pub source_type: SourceType,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verdict {
    #[serde(rename = "SAFE")]
    Safe,
    #[serde(rename = "SUSPICIOUS")]
    Suspicious,
    #[serde(rename = "HIGH RISK SCAM")]
    HighRiskScam,
}

impl Verdict {
    pub fn from_score(score: u32) -> Self {
        if score > 50 {
            Verdict::HighRiskScam
        } else if score > 20 {
            Verdict::Suspicious
        } else {
            Verdict::Safe
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Verdict::Safe => RECOMMEND_SAFE,
            Verdict::Suspicious | Verdict::HighRiskScam => RECOMMEND_CAUTION,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignalReport {
    #[serde(default)]
    pub phishing_signals: Vec<String>,
    #[serde(default)]
    pub ai_indicators: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    pub verdict: Verdict,
    pub risk_score: u32,
    pub analysis: SignalReport,
    pub recommendation: String,
}

impl AnalysisResult {
    pub fn scored(risk_score: u32, analysis: SignalReport) -> Self {
        let verdict = Verdict::from_score(risk_score);
        Self {
            verdict,
            risk_score,
            analysis,
            recommendation: verdict.recommendation().to_string(),
        }
    }

    pub fn signal_count(&self) -> usize {
        self.analysis.phishing_signals.len() + self.analysis.ai_indicators.len()
    }
}
