//! AI-backed analyzer with rule-based fallback.

use thiserror::Error;
use tracing::warn;

use triage_core::{AdvisoryReport, SymptomAnalyzer, TriageEngine};

use crate::extraction::{self, ExtractionError};
use crate::prompts::{self, Language};

/// Completion backend errors.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Model unavailable: {0}")]
    Unavailable(String),

    #[error("Model request failed: {0}")]
    Request(String),
}

/// Completion backend for the hosted-model path.
///
/// Real backends (HTTP clients, local inference) live outside this
/// crate; tests use [`MockBackend`] and [`FailingBackend`].
pub trait CompletionBackend {
    fn complete(&self, system_prompt: &str, user_prompt: &str) -> Result<String, BackendError>;
}

/// Why the model path was abandoned for a request.
#[derive(Error, Debug)]
enum ModelPathError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Extraction(#[from] ExtractionError),
}

/// Analyzer that asks a hosted model first and falls back to the rule
/// engine when the model is unavailable or its output cannot be parsed.
/// Both paths return the same finalized report shape, so callers never
/// see which one answered.
pub struct LlmAnalyzer<B> {
    backend: B,
    language: Language,
    fallback: TriageEngine,
}

impl<B: CompletionBackend> LlmAnalyzer<B> {
    pub fn new(backend: B, fallback: TriageEngine) -> Self {
        Self {
            backend,
            language: Language::default(),
            fallback,
        }
    }

    /// Request model replies in the given language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// The rule engine used when the model path fails.
    pub fn fallback(&self) -> &TriageEngine {
        &self.fallback
    }

    fn try_model(&self, symptoms: &str) -> Result<AdvisoryReport, ModelPathError> {
        let user_prompt = prompts::make_patient_prompt(symptoms, self.language);
        let raw = self.backend.complete(prompts::SYSTEM_PROMPT, &user_prompt)?;
        Ok(extraction::parse_report(&raw)?)
    }
}

impl<B: CompletionBackend> SymptomAnalyzer for LlmAnalyzer<B> {
    fn analyze(&self, symptoms: &str) -> AdvisoryReport {
        match self.try_model(symptoms) {
            Ok(mut report) => {
                triage_core::presentation::apply_defaults(&mut report);
                report
            }
            Err(err) => {
                warn!(error = %err, "model path failed, falling back to rules");
                self.fallback.analyze(symptoms)
            }
        }
    }
}

/// Backend returning a canned reply, for tests and offline demos.
pub struct MockBackend {
    pub reply: String,
}

impl MockBackend {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl CompletionBackend for MockBackend {
    fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String, BackendError> {
        Ok(self.reply.clone())
    }
}

/// Backend that always fails, exercising the fallback path.
pub struct FailingBackend;

impl CompletionBackend for FailingBackend {
    fn complete(&self, _system_prompt: &str, _user_prompt: &str) -> Result<String, BackendError> {
        Err(BackendError::Unavailable("no model configured".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_core::Urgency;

    const MODEL_REPLY: &str = r#"{"urgency":"low","urgencyText":"Mild Dehydration – Self-Care","possibleCauses":"Low fluid intake","whyHappening":"Reduced blood volume","advice":"1. Drink ORS","homeRemedies":"Lime water","redFlags":"No urine for 8 hours","timeline":"1-2 days"}"#;

    fn rules() -> TriageEngine {
        TriageEngine::new().unwrap()
    }

    #[test]
    fn test_model_report_used_when_parseable() {
        let analyzer = LlmAnalyzer::new(MockBackend::new(MODEL_REPLY), rules());
        let report = analyzer.analyze("feeling dizzy and thirsty");

        assert_eq!(report.urgency, Urgency::Low);
        assert_eq!(report.urgency_text, "Mild Dehydration – Self-Care");
        // presentation defaults are applied to the model report too
        assert_eq!(report.color.as_deref(), Some("#10b981"));
        assert!(report.disclaimer.is_some());
    }

    #[test]
    fn test_backend_failure_falls_back_to_rules() {
        let analyzer = LlmAnalyzer::new(FailingBackend, rules());
        let report = analyzer.analyze("wisdom teeth pain and hands shaking");

        assert_eq!(
            report.urgency_text,
            "Dental Pain + Tremor / Shaking – Consult a Doctor"
        );
    }

    #[test]
    fn test_garbage_json_falls_back_to_rules() {
        let analyzer = LlmAnalyzer::new(MockBackend::new(r#"{"urgency": broken}"#), rules());
        let report = analyzer.analyze("severe chest pain and sweating");

        assert_eq!(report.urgency, Urgency::High);
        assert!(report.urgency_text.starts_with("Chest Pain – EMERGENCY"));
    }

    #[test]
    fn test_fallback_output_matches_rule_engine() {
        let analyzer = LlmAnalyzer::new(FailingBackend, rules());
        let direct = rules();

        for input in ["my hands are shaky", "xyz123 qwerty"] {
            assert_eq!(analyzer.analyze(input), direct.analyze(input));
        }
    }

    #[test]
    fn test_json_free_reply_kept_as_advice() {
        let analyzer = LlmAnalyzer::new(
            MockBackend::new("Rest well and drink plenty of fluids."),
            rules(),
        );
        let report = analyzer.analyze("tired");

        assert_eq!(report.urgency_text, "Symptom Analysis");
        assert_eq!(report.advice, "Rest well and drink plenty of fluids.");
        assert_eq!(report.color.as_deref(), Some("#f59e0b"));
    }
}
