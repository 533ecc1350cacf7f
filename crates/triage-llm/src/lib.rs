//! Hosted-model triage path.
//!
//! This crate provides the AI-backed analysis strategy: prompt
//! construction, structured-report extraction from raw model output, and
//! an analyzer that silently falls back to the rule-based engine when
//! the model is unavailable or returns unparseable output.

pub mod analyzer;
pub mod extraction;
pub mod prompts;

pub use analyzer::*;
pub use extraction::*;
pub use prompts::*;
