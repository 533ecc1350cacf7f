//! Structured report extraction from raw model output.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use triage_core::models::{AdvisoryReport, Urgency};

/// Extraction errors.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

pub type ExtractionResult<T> = Result<T, ExtractionError>;

/// Bytes of free text carried into the advice field when the reply
/// contains no JSON object at all.
const FREE_TEXT_ADVICE_LIMIT: usize = 600;

/// Report as the model returns it: every field optional, defaults filled
/// during conversion.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportDraft {
    urgency: Option<Urgency>,
    urgency_text: Option<String>,
    possible_causes: Option<String>,
    why_happening: Option<String>,
    advice: Option<String>,
    home_remedies: Option<String>,
    red_flags: Option<String>,
    timeline: Option<String>,
    color: Option<String>,
    disclaimer: Option<String>,
}

impl ReportDraft {
    fn into_report(self) -> AdvisoryReport {
        AdvisoryReport {
            urgency: self.urgency.unwrap_or(Urgency::Medium),
            urgency_text: self.urgency_text.unwrap_or_else(|| "Needs Evaluation".into()),
            possible_causes: self.possible_causes.unwrap_or_default(),
            why_happening: self.why_happening.unwrap_or_default(),
            advice: self.advice.unwrap_or_default(),
            home_remedies: self.home_remedies.unwrap_or_default(),
            red_flags: self.red_flags.unwrap_or_default(),
            timeline: self.timeline.unwrap_or_default(),
            color: self.color,
            disclaimer: self.disclaimer,
        }
    }
}

/// Parse a raw model reply into an advisory report.
///
/// Markdown fences are stripped, then the outermost `{…}` span is
/// deserialized with per-field defaults. A reply with no JSON object at
/// all becomes a medium-urgency report carrying the reply text as
/// advice. A malformed JSON object is an error so the caller can fall
/// back to the rule engine.
pub fn parse_report(raw: &str) -> ExtractionResult<AdvisoryReport> {
    let cleaned = strip_fences(raw);

    match (cleaned.find('{'), cleaned.rfind('}')) {
        (Some(start), Some(end)) if start < end => {
            let draft: ReportDraft = serde_json::from_str(&cleaned[start..=end])?;
            Ok(draft.into_report())
        }
        _ => Ok(free_text_report(&cleaned)),
    }
}

/// Remove markdown code fences the model may wrap its JSON in.
fn strip_fences(raw: &str) -> String {
    let opened = raw.replace("```json", "");
    let trimmed = opened.trim();
    let trimmed = trimmed
        .strip_suffix("```")
        .map(str::trim_end)
        .unwrap_or(trimmed);
    trimmed.trim().to_string()
}

/// Report carrying a JSON-free reply as plain advice.
fn free_text_report(text: &str) -> AdvisoryReport {
    AdvisoryReport {
        urgency: Urgency::Medium,
        urgency_text: "Symptom Analysis".into(),
        possible_causes: String::new(),
        why_happening: String::new(),
        advice: text.chars().take(FREE_TEXT_ADVICE_LIMIT).collect(),
        home_remedies: String::new(),
        red_flags: String::new(),
        timeline: String::new(),
        color: None,
        disclaimer: None,
    }
}
