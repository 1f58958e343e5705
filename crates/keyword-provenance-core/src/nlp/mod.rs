//! Natural language processing components
//!
//! The [`TextNormalizer`] trait is the seam between the core and any
//! linguistic engine. [`RuleNormalizer`] is the built-in implementation:
//! Unicode sentence/word segmentation, stop-word removal, and rule-based
//! lemmatization, all driven by a shared [`LanguageModel`].

pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;

use lemmatizer::Lemmatizer;
use stopwords::StopwordFilter;

pub use normalizer::{NormalizedSentence, RuleNormalizer, TextNormalizer};

/// Adjustments applied to the bundled English resources at load time.
#[derive(Debug, Clone, Default)]
pub struct LanguageOptions {
    /// Additional words to treat as stop-words.
    pub extra_stopwords: Vec<String>,
    /// Words removed from the stop-word list so they can become keywords.
    pub keep_words: Vec<String>,
}

/// Linguistic resources shared by every normalizer in a process.
///
/// Load once with [`LanguageModel::load`], wrap in an `Arc`, and hand it to
/// [`RuleNormalizer::new`]. The model is immutable after loading.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    pub stopwords: StopwordFilter,
    pub lemmatizer: Lemmatizer,
}

impl LanguageModel {
    pub fn load(options: &LanguageOptions) -> Self {
        let mut stopwords = StopwordFilter::english();
        stopwords.add_stopwords(&options.extra_stopwords);
        stopwords.remove_stopwords(&options.keep_words);
        Self {
            stopwords,
            lemmatizer: Lemmatizer::english(),
        }
    }

    /// A model with a custom stop-word list and the English lemmatizer.
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self {
            stopwords,
            lemmatizer: Lemmatizer::english(),
        }
    }
}
