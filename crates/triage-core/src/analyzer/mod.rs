//! Rule-based symptom analyzer.
//!
//! Pipeline: Normalization → Scoring → Composition → Presentation defaults

mod compositor;
mod normalizer;
mod scorer;

pub use compositor::unrecognized_report;
pub use normalizer::*;
pub use scorer::*;

use tracing::debug;

use crate::knowledge::{KnowledgeBase, KnowledgeResult};
use crate::models::AdvisoryReport;
use crate::presentation;

/// Strategy interface shared by the rule-based and AI-backed analyzers.
///
/// Implementations are total: every input string yields a report, with
/// unmatched input falling through to the fixed unrecognized-symptoms
/// advisory. The same analyzer may serve as primary or as fallback.
pub trait SymptomAnalyzer {
    fn analyze(&self, symptoms: &str) -> AdvisoryReport;
}

/// Rule-based analyzer matching symptoms against the condition catalog.
///
/// Pure and synchronous: each call allocates its own transient token set
/// and match list, so a shared engine is safely callable from any number
/// of threads in parallel.
pub struct TriageEngine {
    kb: KnowledgeBase,
    normalizer: Normalizer,
}

impl TriageEngine {
    /// Create an engine over the built-in condition catalog. Catalog
    /// validation is the only fallible step; it runs once here and is
    /// never re-checked per request.
    pub fn new() -> KnowledgeResult<Self> {
        Ok(Self::with_knowledge_base(KnowledgeBase::builtin()?))
    }

    /// Create an engine over a custom validated catalog.
    pub fn with_knowledge_base(kb: KnowledgeBase) -> Self {
        Self {
            kb,
            normalizer: Normalizer::new(),
        }
    }

    /// The condition catalog in use.
    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.kb
    }

    /// The normalizer, for inspecting the alias/generic tables.
    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Mutable normalizer access, for extending the alias/generic tables.
    pub fn normalizer_mut(&mut self) -> &mut Normalizer {
        &mut self.normalizer
    }

    /// Analyze symptom text and compose a combined advisory for the top
    /// matching conditions.
    pub fn analyze(&self, symptoms: &str) -> AdvisoryReport {
        let input = self.normalizer.normalize(symptoms);
        let matches = Scorer::new(&self.kb, self.normalizer.generic_words()).rank(&input);

        debug!(
            matched = matches.len(),
            top = matches.first().map(|m| m.condition.key.as_str()),
            "scored symptoms against condition catalog"
        );

        let mut report = compositor::compose(&matches);
        presentation::apply_defaults(&mut report);
        report
    }
}

impl SymptomAnalyzer for TriageEngine {
    fn analyze(&self, symptoms: &str) -> AdvisoryReport {
        TriageEngine::analyze(self, symptoms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Urgency;

    #[test]
    fn test_analyze_single_condition() {
        let engine = TriageEngine::new().unwrap();
        let report = engine.analyze("I have a bad toothache");

        assert_eq!(report.urgency, Urgency::Medium);
        assert_eq!(report.urgency_text, "Dental Pain – Consult a Doctor");
        assert!(report.possible_causes.contains("Dental Pain"));
    }

    #[test]
    fn test_analyze_always_finalized() {
        let engine = TriageEngine::new().unwrap();

        for input in ["chest pain", "runny nose", "xyz123 qwerty", ""] {
            let report = engine.analyze(input);
            assert!(report.color.is_some(), "no color for {input:?}");
            assert!(report.disclaimer.is_some(), "no disclaimer for {input:?}");
        }
    }

    #[test]
    fn test_analyze_garbage_is_safe_default() {
        let engine = TriageEngine::new().unwrap();
        let report = engine.analyze("xyz123 qwerty");

        assert_eq!(report.urgency, Urgency::Medium);
        assert_eq!(report.urgency_text, "Unrecognised Symptoms – See a Doctor");
        assert_eq!(report.color.as_deref(), Some("#f59e0b"));
    }

    #[test]
    fn test_custom_alias_changes_matching() {
        let mut engine = TriageEngine::new().unwrap();
        assert_eq!(
            engine.analyze("awful cephalalgia").urgency_text,
            "Unrecognised Symptoms – See a Doctor"
        );

        engine.normalizer_mut().add_alias("cephalalgia", "headache");
        assert_eq!(
            engine.analyze("awful cephalalgia").urgency_text,
            "Headache – Consult a Doctor"
        );
    }

    #[test]
    fn test_trait_object_usable() {
        let engine = TriageEngine::new().unwrap();
        let analyzer: &dyn SymptomAnalyzer = &engine;
        let report = analyzer.analyze("fever and chills");
        assert!(report.urgency_text.starts_with("Fever"));
    }
}
