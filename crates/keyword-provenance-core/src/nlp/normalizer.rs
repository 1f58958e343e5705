//! Sentence segmentation and token normalization.
//!
//! # Algorithm
//!
//! 1. Split text on UAX #29 sentence boundaries; trim each sentence and keep
//!    its verbatim text.
//! 2. Split each sentence on UAX #29 word boundaries.
//! 3. Drop English clitics (`'s`, `'re`, `n't`, ...) from each word.
//! 4. Drop words with no alphabetic character (`100`, `1,000`).
//! 5. Lowercase, drop stop-words, lemmatize.

use std::sync::Arc;

use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

use super::LanguageModel;

/// One sentence as produced by a [`TextNormalizer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedSentence {
    /// Verbatim sentence text.
    pub text: String,
    /// Normalized lemmas, in order.
    pub tokens: Vec<String>,
}

/// Segments raw text into sentences of normalized tokens.
///
/// Implementations must be deterministic: the same text always yields the
/// same sentences and tokens.
pub trait TextNormalizer: Send + Sync {
    fn segment_and_normalize(&self, text: &str) -> Result<Vec<NormalizedSentence>>;
}

/// The built-in English normalizer.
#[derive(Debug, Clone)]
pub struct RuleNormalizer {
    model: Arc<LanguageModel>,
}

impl RuleNormalizer {
    pub fn new(model: Arc<LanguageModel>) -> Self {
        Self { model }
    }

    fn normalize_word(&self, word: &str) -> Option<String> {
        let base = strip_clitic(word);
        if !base.chars().any(char::is_alphabetic) {
            return None;
        }
        let lower = base.to_lowercase();
        if self.model.stopwords.is_stopword(&lower) {
            return None;
        }
        let lemma = self.model.lemmatizer.lemmatize(&lower);
        if self.model.stopwords.is_stopword(&lemma) {
            return None;
        }
        Some(lemma)
    }
}

impl TextNormalizer for RuleNormalizer {
    fn segment_and_normalize(&self, text: &str) -> Result<Vec<NormalizedSentence>> {
        let sentences = text
            .unicode_sentences()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|sentence| NormalizedSentence {
                text: sentence.to_string(),
                tokens: sentence
                    .unicode_words()
                    .filter_map(|word| self.normalize_word(word))
                    .collect(),
            })
            .collect();
        Ok(sentences)
    }
}

/// Clitic suffixes that follow an apostrophe.
const CLITICS: &[&str] = &["s", "m", "re", "ve", "ll", "d"];

fn strip_clitic(word: &str) -> &str {
    for negation in ["n't", "n\u{2019}t", "N'T", "N\u{2019}T"] {
        if let Some(base) = word.strip_suffix(negation) {
            return base;
        }
    }
    if let Some((pos, apostrophe)) = word
        .char_indices()
        .rev()
        .find(|(_, c)| *c == '\'' || *c == '\u{2019}')
    {
        let suffix = &word[pos + apostrophe.len_utf8()..];
        if CLITICS.iter().any(|c| c.eq_ignore_ascii_case(suffix)) {
            return &word[..pos];
        }
    }
    word
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::stopwords::StopwordFilter;

    fn normalizer() -> RuleNormalizer {
        let stopwords = StopwordFilter::from_list(&["and", "the", "a", "it", "be", "i", "do"]);
        RuleNormalizer::new(Arc::new(LanguageModel::with_stopwords(stopwords)))
    }

    #[test]
    fn test_segments_sentences_verbatim() {
        let sentences = normalizer()
            .segment_and_normalize("Rick and Morty forever. Morty's things.")
            .unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Rick and Morty forever.");
        assert_eq!(sentences[1].text, "Morty's things.");
    }

    #[test]
    fn test_tokens_are_lowercased_lemmas() {
        let sentences = normalizer()
            .segment_and_normalize("Rick and Morty forever. Morty's things.")
            .unwrap();
        assert_eq!(sentences[0].tokens, vec!["rick", "morty", "forever"]);
        assert_eq!(sentences[1].tokens, vec!["morty", "thing"]);
    }

    #[test]
    fn test_drops_numbers_and_punctuation() {
        let sentences = normalizer()
            .segment_and_normalize("Rick and Morty forever 100 times!")
            .unwrap();
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].tokens, vec!["rick", "morty", "forever", "time"]);
    }

    #[test]
    fn test_clitics_and_negation() {
        let sentences = normalizer()
            .segment_and_normalize("It's a portal. I don't care.")
            .unwrap();
        assert_eq!(sentences[0].tokens, vec!["portal"]);
        assert_eq!(sentences[1].tokens, vec!["care"]);
    }

    #[test]
    fn test_stop_word_only_sentence_is_kept_empty() {
        let sentences = normalizer()
            .segment_and_normalize("The and the. Portal gun.")
            .unwrap();
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].tokens.is_empty());
        assert_eq!(sentences[1].tokens, vec!["portal", "gun"]);
    }

    #[test]
    fn test_empty_text() {
        let sentences = normalizer().segment_and_normalize("   ").unwrap();
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_strip_clitic() {
        assert_eq!(strip_clitic("Morty's"), "Morty");
        assert_eq!(strip_clitic("we\u{2019}re"), "we");
        assert_eq!(strip_clitic("can't"), "ca");
        assert_eq!(strip_clitic("o'clock"), "o'clock");
        assert_eq!(strip_clitic("rick"), "rick");
    }
}
