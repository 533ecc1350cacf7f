//! Symptom text normalizer.
//!
//! Handles:
//! - Lowercasing and alphabetic word tokenization
//! - Alias expansion (paining→pain, shaky→shaking, tummy→stomach)
//! - The generic-word set excluded from word-level matching

use std::collections::{HashMap, HashSet};

use regex::Regex;

/// Normalized per-request view of the input text.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedInput {
    /// Lowercase copy of the full text, used for phrase search. Digits
    /// and punctuation are preserved here.
    pub text: String,
    /// Expanded word token set: original alphabetic tokens plus the
    /// canonical root of every aliased token.
    pub tokens: HashSet<String>,
}

/// Normalizer for raw symptom descriptions.
///
/// The alias and generic-word tables are hand-curated configuration
/// data; extend them via [`add_alias`](Normalizer::add_alias) and
/// [`add_generic_word`](Normalizer::add_generic_word) rather than
/// editing call sites.
pub struct Normalizer {
    /// Alias map: inflected/colloquial form → canonical root
    aliases: HashMap<String, String>,
    /// Words too common across conditions to drive word-level matching
    generic_words: HashSet<String>,
    /// Alphabetic token pattern
    word_pattern: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    /// Create a normalizer with the default tables.
    pub fn new() -> Self {
        Self {
            aliases: Self::default_aliases(),
            generic_words: Self::default_generic_words(),
            word_pattern: Regex::new("[a-z]+").expect("valid token pattern"),
        }
    }

    /// Normalize raw symptom text into a lowercase phrase-search copy and
    /// an expanded token set.
    pub fn normalize(&self, symptoms: &str) -> NormalizedInput {
        let text = symptoms.to_lowercase();

        let mut tokens: HashSet<String> = self
            .word_pattern
            .find_iter(&text)
            .map(|m| m.as_str().to_string())
            .collect();

        // Expansion is additive: the original token stays in the set.
        let roots: Vec<String> = tokens
            .iter()
            .filter_map(|token| self.aliases.get(token).cloned())
            .collect();
        tokens.extend(roots);

        NormalizedInput { text, tokens }
    }

    /// Whether a word is excluded from word-level matching.
    pub fn is_generic(&self, word: &str) -> bool {
        self.generic_words.contains(word)
    }

    /// The generic-word set, for the scorer.
    pub fn generic_words(&self) -> &HashSet<String> {
        &self.generic_words
    }

    /// Add a custom alias mapping.
    pub fn add_alias(&mut self, from: &str, root: &str) {
        self.aliases
            .insert(from.to_lowercase(), root.to_lowercase());
    }

    /// Add a word to the generic-word set.
    pub fn add_generic_word(&mut self, word: &str) {
        self.generic_words.insert(word.to_lowercase());
    }

    /// Default alias mappings: common inflections and colloquial forms.
    fn default_aliases() -> HashMap<String, String> {
        let mut map = HashMap::new();

        // Pain inflections
        map.insert("paining".into(), "pain".into());
        map.insert("painful".into(), "pain".into());
        map.insert("pains".into(), "pain".into());
        map.insert("hurts".into(), "pain".into());
        map.insert("hurting".into(), "pain".into());
        map.insert("aching".into(), "pain".into());
        map.insert("ache".into(), "pain".into());
        map.insert("aches".into(), "pain".into());
        map.insert("sore".into(), "pain".into());

        // Skin and sensation
        map.insert("burning".into(), "burn".into());
        map.insert("itchy".into(), "itching".into());
        map.insert("itches".into(), "itching".into());
        map.insert("blurred".into(), "blurry".into());
        map.insert("swollen".into(), "swelling".into());

        // Digestive
        map.insert("dizzy".into(), "dizziness".into());
        map.insert("vomit".into(), "vomiting".into());
        map.insert("puking".into(), "vomiting".into());
        map.insert("tummy".into(), "stomach".into());
        map.insert("belly".into(), "stomach".into());
        map.insert("abdomen".into(), "stomach".into());

        // Respiratory
        map.insert("breathless".into(), "breathing".into());
        map.insert("coughing".into(), "cough".into());
        map.insert("sneezy".into(), "sneezing".into());

        // Tremor
        map.insert("shaky".into(), "shaking".into());
        map.insert("shakes".into(), "shaking".into());
        map.insert("trembling".into(), "tremor".into());

        // Fever
        map.insert("feverish".into(), "fever".into());
        map.insert("temperature".into(), "fever".into());

        // Urinary
        map.insert("peeing".into(), "urine".into());
        map.insert("urinating".into(), "urine".into());

        // Mental state
        map.insert("sleepless".into(), "insomnia".into());
        map.insert("sleeplessness".into(), "insomnia".into());
        map.insert("anxious".into(), "anxiety".into());
        map.insert("panicking".into(), "panic".into());
        map.insert("stressed".into(), "stress".into());

        map
    }

    /// Default generic-word set: symptom descriptors that appear across
    /// many conditions. They only contribute through phrase matches,
    /// never word-level matches, so "jaw pain" cannot match just because
    /// the user said "pain".
    fn default_generic_words() -> HashSet<String> {
        [
            "pain", "ache", "severe", "mild", "moderate", "chronic", "acute",
            "high", "low", "attack", "problem", "issue", "infection",
        ]
        .into_iter()
        .map(String::from)
        .collect()
    }
}
