//! Advisory composition from ranked matches.
//!
//! Merges the top matches into one combined advisory so multi-symptom
//! inputs ("tooth pain + shaking hands") get guidance for every matched
//! condition instead of only the best one.

use crate::models::{AdvisoryReport, ConditionRecord, ScoredMatch, Urgency};

/// Maximum conditions merged into a single advisory.
const MAX_MERGED: usize = 2;

/// Compose a single advisory from the ranked match list.
///
/// An empty list yields the fixed unrecognized-symptoms advisory: a safe
/// default directing the user to in-person care, not a failure.
pub fn compose(matches: &[ScoredMatch<'_>]) -> AdvisoryReport {
    if matches.is_empty() {
        return unrecognized_report();
    }

    let top = &matches[..matches.len().min(MAX_MERGED)];

    // Highest urgency wins: a high-urgency condition always escalates the
    // merged response.
    let urgency = top
        .iter()
        .map(|m| m.condition.urgency)
        .max()
        .unwrap_or(Urgency::Medium);

    let labels = top
        .iter()
        .map(|m| m.condition.label.as_str())
        .collect::<Vec<_>>()
        .join(" + ");

    AdvisoryReport {
        urgency,
        urgency_text: format!("{labels} – {}", urgency.action_phrase()),
        possible_causes: merge_bulleted(top, |c| &c.causes),
        why_happening: merge_bulleted(top, |c| &c.mechanism),
        advice: merge_sectioned(top, |c| &c.advice),
        home_remedies: merge_bulleted(top, |c| &c.home_remedies),
        red_flags: merge_inline(top, |c| &c.red_flags),
        timeline: merge_lines(top, |c| &c.timeline),
        color: None,
        disclaimer: None,
    }
}

/// `▸ Label: text` entries separated by blank lines.
fn merge_bulleted<'a>(
    top: &[ScoredMatch<'a>],
    field: impl Fn(&'a ConditionRecord) -> &'a str,
) -> String {
    top.iter()
        .map(|m| format!("▸ {}: {}", m.condition.label, field(m.condition)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `── Label ──` headed sections separated by blank lines (used for the
/// multi-line numbered advice).
fn merge_sectioned<'a>(
    top: &[ScoredMatch<'a>],
    field: impl Fn(&'a ConditionRecord) -> &'a str,
) -> String {
    top.iter()
        .map(|m| format!("── {} ──\n{}", m.condition.label, field(m.condition)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// `Label: text` entries on one line, pipe-separated.
fn merge_inline<'a>(
    top: &[ScoredMatch<'a>],
    field: impl Fn(&'a ConditionRecord) -> &'a str,
) -> String {
    top.iter()
        .map(|m| format!("{}: {}", m.condition.label, field(m.condition)))
        .collect::<Vec<_>>()
        .join(" | ")
}

/// `▸ Label: text` entries, one per line.
fn merge_lines<'a>(
    top: &[ScoredMatch<'a>],
    field: impl Fn(&'a ConditionRecord) -> &'a str,
) -> String {
    top.iter()
        .map(|m| format!("▸ {}: {}", m.condition.label, field(m.condition)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Fixed advisory for input that matches nothing in the catalog.
pub fn unrecognized_report() -> AdvisoryReport {
    AdvisoryReport {
        urgency: Urgency::Medium,
        urgency_text: "Unrecognised Symptoms – See a Doctor".into(),
        possible_causes: "Your symptoms don't match common patterns in our database. \
                          This does NOT mean they aren't important – it means a doctor needs \
                          to evaluate you in person."
            .into(),
        why_happening: "The human body is complex and some symptom combinations need clinical \
                        examination, blood tests, or imaging to diagnose properly."
            .into(),
        advice: "1. Visit your nearest Primary Health Centre (PHC) within 24 hours.\n\
                 2. Write down all your symptoms, when they started, and what makes them better or worse.\n\
                 3. In the meantime: rest, stay hydrated, and avoid self-medication.\n\
                 4. If you feel seriously unwell at any point, call 108 for an ambulance."
            .into(),
        home_remedies: "Stay hydrated with warm water, lemon, and a pinch of salt. Light \
                        home-cooked food. Adequate rest."
            .into(),
        red_flags: "Severe or worsening pain, high fever, difficulty breathing, confusion, bleeding"
            .into(),
        timeline: "See a doctor within 24-48 hours for proper diagnosis.".into(),
        color: None,
        disclaimer: None,
    }
}
