//! Condition catalog models.

use serde::{Deserialize, Serialize};

/// Triage urgency level.
///
/// The ordering is semantic: a merged multi-condition advisory escalates
/// to the highest urgency among its conditions.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Low,
    Medium,
    High,
}

impl Urgency {
    /// Action phrase shown after the condition labels in the advisory headline.
    pub fn action_phrase(&self) -> &'static str {
        match self {
            Urgency::High => "Seek Immediate Care",
            Urgency::Medium => "Consult a Doctor",
            Urgency::Low => "Self-Care & Monitor",
        }
    }
}

/// One entry in the static triage knowledge base: a diagnosable symptom
/// cluster with its trigger phrases and advisory texts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionRecord {
    /// Unique identifier, stable across runs
    pub key: String,
    /// Trigger phrases (lowercase ASCII). Insertion order carries no
    /// ranking but must be stable for reproducibility.
    pub keywords: Vec<String>,
    /// Urgency when this condition matches
    pub urgency: Urgency,
    /// Human-readable display name
    pub label: String,
    /// Likely medical causes
    pub causes: String,
    /// Plain-language explanation of the body mechanism
    pub mechanism: String,
    /// Numbered actionable steps
    pub advice: String,
    /// Safe home remedies
    pub home_remedies: String,
    /// Warning signs needing immediate hospital care
    pub red_flags: String,
    /// Expected duration and recovery outlook
    pub timeline: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urgency_order() {
        assert!(Urgency::Low < Urgency::Medium);
        assert!(Urgency::Medium < Urgency::High);
        assert_eq!(
            [Urgency::Medium, Urgency::High, Urgency::Low]
                .into_iter()
                .max(),
            Some(Urgency::High)
        );
    }

    #[test]
    fn test_urgency_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::from_str::<Urgency>("\"medium\"").unwrap(),
            Urgency::Medium
        );
    }

    #[test]
    fn test_action_phrases() {
        assert_eq!(Urgency::High.action_phrase(), "Seek Immediate Care");
        assert_eq!(Urgency::Medium.action_phrase(), "Consult a Doctor");
        assert_eq!(Urgency::Low.action_phrase(), "Self-Care & Monitor");
    }
}
