//! Output presentation defaults shared by both analysis modes.
//!
//! Whatever produced the report (rules or hosted model), the returned
//! structure must always carry a banner color and the disclaimer.

use crate::models::{AdvisoryReport, Urgency};

/// Fixed guidance disclaimer attached to every advisory.
pub const DISCLAIMER: &str = "This is AI-based guidance, not a medical diagnosis. \
                              Consult a qualified healthcare provider for proper evaluation and treatment.";

/// Display color for an urgency banner.
pub fn urgency_color(urgency: Urgency) -> &'static str {
    match urgency {
        Urgency::Low => "#10b981",
        Urgency::Medium => "#f59e0b",
        Urgency::High => "#ef4444",
    }
}

/// Fill presentation fields left unset by the producing analyzer.
/// Values already present (e.g. chosen by the model path) are kept.
pub fn apply_defaults(report: &mut AdvisoryReport) {
    if report.color.is_none() {
        report.color = Some(urgency_color(report.urgency).to_string());
    }
    if report.disclaimer.is_none() {
        report.disclaimer = Some(DISCLAIMER.to_string());
    }
}
