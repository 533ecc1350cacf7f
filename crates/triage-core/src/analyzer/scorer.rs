//! Condition scoring with combined phrase and word strategies.
//!
//! Weights:
//! - Exact phrase found in text: 3 points per phrase word
//! - Meaningful word overlap: 1 point per word

use std::collections::HashSet;

use crate::knowledge::KnowledgeBase;
use crate::models::{ConditionRecord, ScoredMatch};

use super::normalizer::NormalizedInput;

/// Points per word of a matched trigger phrase. Multi-word phrases score
/// proportionally higher, rewarding specificity.
const PHRASE_WEIGHT: u32 = 3;

/// Scorer ranking knowledge-base conditions against normalized input.
pub struct Scorer<'a> {
    kb: &'a KnowledgeBase,
    generic_words: &'a HashSet<String>,
}

impl<'a> Scorer<'a> {
    /// Create a scorer over a catalog, with the generic-word set excluded
    /// from word-level matching.
    pub fn new(kb: &'a KnowledgeBase, generic_words: &'a HashSet<String>) -> Self {
        Self { kb, generic_words }
    }

    /// Score every condition and return the survivors (score > 0) sorted
    /// by score descending. The sort is stable: ties keep catalog
    /// insertion order, which makes results deterministic.
    pub fn rank(&self, input: &NormalizedInput) -> Vec<ScoredMatch<'a>> {
        let mut matches: Vec<ScoredMatch<'a>> = self
            .kb
            .records()
            .iter()
            .filter_map(|condition| {
                let score = self.score_condition(condition, input);
                (score > 0).then_some(ScoredMatch { condition, score })
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score));
        matches
    }

    fn score_condition(&self, condition: &ConditionRecord, input: &NormalizedInput) -> u32 {
        self.phrase_score(condition, &input.text) + self.word_score(condition, &input.tokens)
    }

    /// Phrase strategy: every trigger phrase found verbatim in the
    /// lowercase text scores proportionally to its word count.
    fn phrase_score(&self, condition: &ConditionRecord, text: &str) -> u32 {
        condition
            .keywords
            .iter()
            .filter(|keyword| text.contains(keyword.as_str()))
            .map(|keyword| PHRASE_WEIGHT * keyword.split_whitespace().count() as u32)
            .sum()
    }

    /// Word strategy: one point per overlap between the expanded input
    /// token set and the condition's meaningful words (trigger-phrase
    /// words plus label words, minus generic words).
    fn word_score(&self, condition: &ConditionRecord, tokens: &HashSet<String>) -> u32 {
        let mut meaningful: HashSet<String> = HashSet::new();
        for keyword in &condition.keywords {
            for word in keyword.split_whitespace() {
                if !self.generic_words.contains(word) {
                    meaningful.insert(word.to_string());
                }
            }
        }
        for word in condition.label.to_lowercase().split_whitespace() {
            if !self.generic_words.contains(word) {
                meaningful.insert(word.to_string());
            }
        }

        meaningful
            .iter()
            .filter(|word| tokens.contains(word.as_str()))
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::Normalizer;

    fn rank(symptoms: &str) -> Vec<(String, u32)> {
        let kb = KnowledgeBase::builtin().unwrap();
        let normalizer = Normalizer::new();
        let input = normalizer.normalize(symptoms);
        Scorer::new(&kb, normalizer.generic_words())
            .rank(&input)
            .into_iter()
            .map(|m| (m.condition.key.clone(), m.score))
            .collect()
    }

    #[test]
    fn test_multiword_phrase_scores_per_word() {
        // "wisdom teeth" (6) + "teeth" (3) + word matches "wisdom","teeth" (2)
        let matches = rank("wisdom teeth");
        assert_eq!(matches[0], ("dental".into(), 11));
    }

    #[test]
    fn test_word_strategy_catches_paraphrase() {
        // no trigger phrase is a substring, but "head" matches by word
        let matches = rank("my head is paining");
        assert_eq!(matches[0].0, "headache");
    }

    #[test]
    fn test_generic_word_alone_matches_nothing() {
        assert!(rank("I have pain").is_empty());
        assert!(rank("severe problem").is_empty());
    }

    #[test]
    fn test_generic_word_counts_inside_phrase() {
        // "jaw pain" matches dental as an exact phrase even though the
        // bare word "pain" is generic
        let matches = rank("jaw pain");
        assert_eq!(matches[0].0, "dental");
        // phrase 2 words * 3 + word match "jaw"
        assert_eq!(matches[0].1, 7);
    }

    #[test]
    fn test_exact_phrase_sole_match() {
        let matches = rank("conjunctivitis");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].0, "eye");
    }

    #[test]
    fn test_zero_score_conditions_dropped() {
        let matches = rank("wisdom teeth");
        assert!(matches.iter().all(|(_, score)| *score > 0));
        assert!(matches.iter().all(|(key, _)| key != "chest_pain"));
    }

    #[test]
    fn test_sorted_descending() {
        let matches = rank("chest pain and cough");
        assert!(matches.windows(2).all(|w| w[0].1 >= w[1].1));
        assert_eq!(matches[0].0, "chest_pain");
    }

    #[test]
    fn test_tie_keeps_catalog_order() {
        // dental and tremor both score 11 here; dental is defined first
        let matches = rank("wisdom teeth pain and hands shaking");
        assert_eq!(matches[0], ("dental".into(), 11));
        assert_eq!(matches[1], ("tremor".into(), 11));
    }

    #[test]
    fn test_alias_reaches_word_strategy() {
        // "shaky" is not a trigger phrase; its root "shaking" is
        let matches = rank("my hands are shaky");
        assert_eq!(matches[0].0, "tremor");
    }

    #[test]
    fn test_label_words_participate() {
        // "digestive" appears only in the stomach label
        let matches = rank("digestive trouble");
        assert_eq!(matches[0].0, "stomach");
    }
}
