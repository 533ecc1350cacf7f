//! Static condition knowledge base.

mod conditions;

pub use conditions::builtin_conditions;

use std::collections::HashSet;

use thiserror::Error;

use crate::models::ConditionRecord;

/// Knowledge base load errors.
///
/// Detected once when the catalog is constructed, never re-checked per
/// request. A malformed catalog is a fatal configuration error.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Duplicate condition key: {0}")]
    DuplicateKey(String),

    #[error("Keyword {keyword:?} of condition {key:?} is not a lowercase ASCII phrase")]
    MalformedKeyword { key: String, keyword: String },
}

pub type KnowledgeResult<T> = Result<T, KnowledgeError>;

/// Immutable, ordered collection of condition records.
///
/// Insertion order is preserved and breaks score ties during ranking, so
/// it must be stable across runs.
#[derive(Debug, Clone)]
pub struct KnowledgeBase {
    records: Vec<ConditionRecord>,
}

impl KnowledgeBase {
    /// Validate and wrap a condition catalog.
    pub fn new(records: Vec<ConditionRecord>) -> KnowledgeResult<Self> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.key.as_str()) {
                return Err(KnowledgeError::DuplicateKey(record.key.clone()));
            }
            for keyword in &record.keywords {
                if !is_lowercase_phrase(keyword) {
                    return Err(KnowledgeError::MalformedKeyword {
                        key: record.key.clone(),
                        keyword: keyword.clone(),
                    });
                }
            }
        }
        Ok(Self { records })
    }

    /// Load the built-in condition catalog.
    pub fn builtin() -> KnowledgeResult<Self> {
        Self::new(builtin_conditions())
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ConditionRecord] {
        &self.records
    }

    /// Look up a record by key.
    pub fn get(&self, key: &str) -> Option<&ConditionRecord> {
        self.records.iter().find(|r| r.key == key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Trigger phrases are lowercase ASCII word sequences; digits and
/// apostrophes are allowed (e.g. a literal temperature reading, "can't sleep").
fn is_lowercase_phrase(phrase: &str) -> bool {
    !phrase.is_empty()
        && phrase
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' ' || c == '\'')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Urgency;

    fn record(key: &str, keywords: &[&str]) -> ConditionRecord {
        ConditionRecord {
            key: key.into(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            urgency: Urgency::Low,
            label: "Test".into(),
            causes: String::new(),
            mechanism: String::new(),
            advice: String::new(),
            home_remedies: String::new(),
            red_flags: String::new(),
            timeline: String::new(),
        }
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let kb = KnowledgeBase::builtin().unwrap();
        assert_eq!(kb.len(), 13);
        assert!(kb.get("dental").is_some());
        assert!(kb.get("chest_pain").is_some());
        assert!(kb.get("nonexistent").is_none());
    }

    #[test]
    fn test_builtin_order_is_stable() {
        let kb = KnowledgeBase::builtin().unwrap();
        // dental must precede tremor: tie-breaking depends on it
        let dental = kb.records().iter().position(|r| r.key == "dental").unwrap();
        let tremor = kb.records().iter().position(|r| r.key == "tremor").unwrap();
        assert!(dental < tremor);
    }

    #[test]
    fn test_duplicate_key_rejected() {
        let result = KnowledgeBase::new(vec![record("a", &["x"]), record("a", &["y"])]);
        assert!(matches!(result, Err(KnowledgeError::DuplicateKey(key)) if key == "a"));
    }

    #[test]
    fn test_malformed_keyword_rejected() {
        let result = KnowledgeBase::new(vec![record("a", &["Chest Pain"])]);
        assert!(matches!(
            result,
            Err(KnowledgeError::MalformedKeyword { .. })
        ));

        let result = KnowledgeBase::new(vec![record("a", &[""])]);
        assert!(matches!(
            result,
            Err(KnowledgeError::MalformedKeyword { .. })
        ));
    }

    #[test]
    fn test_numeric_keywords_allowed() {
        // fever triggers include literal temperature readings
        assert!(KnowledgeBase::new(vec![record("a", &["102", "high temp"])]).is_ok());
    }
}
