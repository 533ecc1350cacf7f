//! Triage Core Library
//!
//! Rule-based symptom triage: keyword/phrase scoring over a static
//! condition catalog, with multi-condition advisory composition.
//!
//! # Architecture
//!
//! ```text
//! Symptom text → Normalization → Scoring → Top-2 Selection
//!                (lowercase,     (phrase +        │
//!                 tokens,         word            │
//!                 aliases)        strategies)     │
//!                                                 ▼
//!                                 ┌───────────────────────────────┐
//!                                 │         Composition           │
//!                                 │  merge advisory fields,       │
//!                                 │  escalate to max urgency      │
//!                                 └───────────────┬───────────────┘
//!                                                 │
//!                                 Presentation defaults (color,
//!                                 disclaimer) → AdvisoryReport
//! ```
//!
//! # Core Principle
//!
//! **Analysis is total.** Input that matches nothing yields the fixed
//! "unrecognized symptoms" advisory, never an error. The only fallible
//! step is catalog validation at startup.
//!
//! # Modules
//!
//! - [`knowledge`]: static condition catalog with load-time validation
//! - [`models`]: domain types (ConditionRecord, AdvisoryReport, etc.)
//! - [`analyzer`]: normalizer + scorer + compositor pipeline
//! - [`presentation`]: output defaults shared by both analysis modes

pub mod analyzer;
pub mod knowledge;
pub mod models;
pub mod presentation;

// Re-export commonly used types
pub use analyzer::{Normalizer, Scorer, SymptomAnalyzer, TriageEngine};
pub use knowledge::{KnowledgeBase, KnowledgeError};
pub use models::{AdvisoryReport, ConditionRecord, ScoredMatch, Urgency};
