//! Stop-word filtering
//!
//! English stop-words are the NLTK list bundled with the `stop-words`
//! crate, plus the fragments left behind by contractions and colloquial
//! forms. Callers can extend or prune the list from configuration.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Function-word fragments missing from the NLTK list: the heads of
/// "can't", "won't" and "shan't" once "n't" is split off, and colloquial
/// contractions of function words.
const CONTRACTION_FRAGMENTS: &[&str] = &["ca", "wo", "sha", "gonna", "wanna", "gotta"];

/// A case-insensitive stop-word set.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Lowercased stop-words
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// The bundled English list
    pub fn english() -> Self {
        let stopwords = get(LANGUAGE::English)
            .iter()
            .map(|s| s.to_lowercase())
            .chain(CONTRACTION_FRAGMENTS.iter().map(|s| s.to_string()))
            .collect();
        Self { stopwords }
    }

    /// No filtering
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// A filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        let stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        Self { stopwords }
    }

    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        if self.stopwords.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_stopwords() {
        let filter = StopwordFilter::english();

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("morty"));
        assert!(!filter.is_stopword("portal"));
    }

    #[test]
    fn test_english_keeps_content_words() {
        let filter = StopwordFilter::english();

        for word in ["forever", "thing", "time", "day", "rick"] {
            assert!(!filter.is_stopword(word), "{} filtered", word);
        }
    }

    #[test]
    fn test_english_drops_contraction_fragments() {
        let filter = StopwordFilter::english();

        for word in ["gonna", "Wanna", "ca", "wo", "don", "ll"] {
            assert!(filter.is_stopword(word), "{} kept", word);
        }
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["custom", "Words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("EXTRA"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
        assert_eq!(filter.len(), 0);
    }
}
