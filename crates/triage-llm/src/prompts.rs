//! Triage prompts for the hosted-model path.
//!
//! The system prompt pins the model to the same JSON report shape the
//! rule-based engine produces, so both strategies share one contract.

/// Response language requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Hindi,
    Marathi,
}

impl Language {
    /// Extra instruction appended to the patient prompt.
    fn instruction(&self) -> &'static str {
        match self {
            Language::English => "",
            Language::Hindi => "\nRespond entirely in Hindi (Devanagari script).",
            Language::Marathi => "\nRespond entirely in Marathi (Devanagari script).",
        }
    }
}

/// System prompt for symptom triage.
pub const SYSTEM_PROMPT: &str = r#"You are a senior medical triage doctor working in rural India.
Your job is to analyze the patient's symptoms and return a structured JSON report.

RULES:
• Analyze the EXACT symptoms the patient describes.
• Identify a possible SPECIFIC condition (not generic).
• Explain the medical reason in plain language a villager can understand.
• Give practical, actionable, step-by-step advice (include dosages for OTC meds where appropriate).
• Include warning signs that mean "go to hospital NOW".
• Give expected recovery timeline.
• Choose urgency: low / medium / high using standard triage criteria.

Output ONLY a raw JSON object – no markdown, no commentary:
{
  "urgency": "low | medium | high",
  "urgencyText": "<Condition Name> – <Action>",
  "possibleCauses": "<2-3 specific medical causes for THESE symptoms>",
  "whyHappening": "<Simple explanation of the body mechanism causing THESE symptoms>",
  "advice": "<4-5 numbered actionable steps specific to THESE symptoms>",
  "homeRemedies": "<2-3 safe home remedies relevant to THESE symptoms>",
  "redFlags": "<warning signs that need immediate hospital visit>",
  "timeline": "<expected duration and when to expect improvement>"
}
"#;

/// User prompt for a patient's symptom description.
pub fn make_patient_prompt(symptoms: &str, language: Language) -> String {
    format!("Patient symptoms: {}{}", symptoms, language.instruction())
}
