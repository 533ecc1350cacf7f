//! Advisory report models.

use serde::{Deserialize, Serialize};

use super::condition::{ConditionRecord, Urgency};

/// A condition that matched the input, paired with its match score.
///
/// Transient: created per request during scoring, never persisted. Only
/// conditions with a positive score survive, so `score >= 1` holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch<'a> {
    /// The matched catalog record
    pub condition: &'a ConditionRecord,
    /// Combined phrase + word match score
    pub score: u32,
}

/// Structured advisory returned for every analysis request.
///
/// Field names serialize camelCase to match the external JSON contract.
/// `color` and `disclaimer` start unset and are filled by
/// [`crate::presentation::apply_defaults`] unless the producing analyzer
/// already set them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryReport {
    pub urgency: Urgency,
    /// Headline: condition labels plus the action phrase for the urgency
    pub urgency_text: String,
    pub possible_causes: String,
    pub why_happening: String,
    pub advice: String,
    pub home_remedies: String,
    pub red_flags: String,
    pub timeline: String,
    /// Display color for the urgency banner
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Fixed guidance disclaimer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disclaimer: Option<String>,
}
