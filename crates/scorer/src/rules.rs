//! Built-in rule tables used when no rules file is supplied.

pub(crate) const URGENCY_LABEL: &str = "Urgency detected";
pub(crate) const URGENCY_POINTS: u32 = 10;
pub(crate) const URGENCY_WORDS: &[&str] = &[
    "suspend",
    "immediate",
    "verify",
    "24 hours",
    "unauthorized",
    "lock",
];

pub(crate) const FINANCIAL_LABEL: &str = "Financial request";
pub(crate) const FINANCIAL_POINTS: u32 = 15;
pub(crate) const FINANCIAL_WORDS: &[&str] = &["credit card", "bank", "routing", "social security", "otp"];

/// `http://` or `https://` followed by at least one of: ASCII letters and
/// digits, anything in the range `$`..=`_` (which covers `@ . & +` and most
/// punctuation), `! * ( ) , \`, or a `%XX` escape. Matched against the raw
/// text, so the scheme is case-sensitive.
pub(crate) const URL_PATTERN: &str =
    r"http[s]?://(?:[a-zA-Z]|[0-9]|[$-_@.&+]|[!*\\(\\),]|(?:%[0-9a-fA-F][0-9a-fA-F]))+";
pub(crate) const URL_POINTS: u32 = 20;
pub(crate) const URL_MESSAGE: &str = "Contains URL (potential malicious link)";

pub(crate) const ROBOTIC_PHRASES: &[&str] = &["kindly", "immediately"];
pub(crate) const ROBOTIC_POINTS: u32 = 20;
pub(crate) const ROBOTIC_MESSAGE: &str = "Robotic phrasing detected";
