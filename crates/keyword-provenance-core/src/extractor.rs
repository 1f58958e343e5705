//! Keyword extractor: normalization, ranking, and provenance in one place.
//!
//! [`KeywordExtractor`] owns the two collaborators (a [`TextNormalizer`]
//! and a [`TermWeighter`]) plus the ranking policy, and exposes the
//! fit/transform workflow:
//!
//! - [`fit`](KeywordExtractor::fit) ranks a corpus and remembers the top
//!   keywords.
//! - [`transform`](KeywordExtractor::transform) traces the remembered
//!   keywords through a (possibly different) corpus.
//! - [`fit_transform`](KeywordExtractor::fit_transform) does both on the
//!   same documents.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use keyword_provenance_core::models::RawDocument;
//! use keyword_provenance_core::nlp::stopwords::StopwordFilter;
//! use keyword_provenance_core::nlp::{LanguageModel, RuleNormalizer};
//! use keyword_provenance_core::weighting::TfIdfWeighter;
//! use keyword_provenance_core::KeywordExtractor;
//!
//! let model = Arc::new(LanguageModel::with_stopwords(StopwordFilter::from_list(&["and"])));
//! let mut extractor = KeywordExtractor::new(
//!     Box::new(RuleNormalizer::new(model)),
//!     Box::new(TfIdfWeighter::default()),
//!     2,
//! )
//! .unwrap();
//!
//! let docs = extractor
//!     .normalize(vec![RawDocument::new("a.txt", "Rick and Morty. Morty and Summer.")])
//!     .unwrap();
//! let summary = extractor.fit_transform(&docs).unwrap();
//! assert_eq!(summary.keywords[0].keyword, "morty");
//! assert_eq!(summary.keywords[0].occurrences, 2);
//! ```

use std::sync::Arc;

use crate::corpus::Corpus;
use crate::error::{ExtractError, Result};
use crate::models::{Document, KeywordMetadata, KeywordResult, KeywordSummary, RawDocument};
use crate::nlp::TextNormalizer;
use crate::observer::{NoopObserver, PipelineEvent, PipelineObserver};
use crate::provenance;
use crate::rank::{self, RankPolicy};
use crate::weighting::TermWeighter;

pub struct KeywordExtractor {
    normalizer: Box<dyn TextNormalizer>,
    weighter: Box<dyn TermWeighter>,
    observer: Arc<dyn PipelineObserver>,
    policy: RankPolicy,
    keyword_count: usize,
    fitted: Option<KeywordResult>,
}

impl KeywordExtractor {
    /// Create an extractor selecting `keyword_count` keywords.
    ///
    /// Fails with [`ExtractError::InvalidArgument`] if `keyword_count` is 0.
    pub fn new(
        normalizer: Box<dyn TextNormalizer>,
        weighter: Box<dyn TermWeighter>,
        keyword_count: usize,
    ) -> Result<Self> {
        if keyword_count == 0 {
            return Err(ExtractError::invalid_argument(
                "keyword count must be a positive integer, got 0",
            ));
        }
        Ok(Self {
            normalizer,
            weighter,
            observer: Arc::new(NoopObserver),
            policy: RankPolicy::default(),
            keyword_count,
            fitted: None,
        })
    }

    pub fn with_policy(mut self, policy: RankPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_observer(mut self, observer: Arc<dyn PipelineObserver>) -> Self {
        self.observer = observer;
        self
    }

    /// Keywords selected by the last [`fit`](Self::fit), if any.
    pub fn keywords(&self) -> Option<&KeywordResult> {
        self.fitted.as_ref()
    }

    /// Segment and normalize raw documents, preserving their order.
    pub fn normalize(&self, raw: Vec<RawDocument>) -> Result<Vec<Document>> {
        let mut documents = Vec::with_capacity(raw.len());
        for doc in raw {
            let sentences = self.normalizer.segment_and_normalize(&doc.text)?;
            self.observer.on_event(&PipelineEvent::Normalized {
                document: doc.name.clone(),
                sentences: sentences.len(),
            });
            documents.push(Document::from_normalized(doc, sentences));
        }
        Ok(documents)
    }

    /// Rank the terms of `documents` without remembering the result.
    pub fn rank(&self, documents: &[Document]) -> Result<KeywordResult> {
        let corpus = Corpus::build(documents);
        self.observer.on_event(&PipelineEvent::CorpusBuilt {
            documents: documents.len(),
            sentences: corpus.len(),
            terms: corpus.vocabulary_len(),
        });
        if corpus.is_empty() {
            return Ok(KeywordResult::default());
        }

        let weights = self.weighter.weigh(&corpus.token_lists())?;
        self.observer
            .on_event(&PipelineEvent::Weighted { rows: weights.len() });

        let result = rank::rank(&corpus, &weights, self.keyword_count, self.policy)?;
        self.observer.on_event(&PipelineEvent::Ranked {
            selected: result.len(),
            candidates: corpus.vocabulary_len(),
        });
        Ok(result)
    }

    /// Select the top keywords of `documents` and remember them.
    pub fn fit(&mut self, documents: &[Document]) -> Result<Vec<String>> {
        let result = self.rank(documents)?;
        let terms = result.keywords.iter().map(|k| k.term.clone()).collect();
        self.fitted = Some(result);
        Ok(terms)
    }

    /// Trace the fitted keywords through `documents`.
    ///
    /// Keywords absent from `documents` are reported with zero occurrences.
    pub fn transform(&self, documents: &[Document]) -> Result<KeywordSummary> {
        let fitted = self.fitted.as_ref().ok_or_else(|| {
            ExtractError::invalid_argument("transform called before fit; no keywords selected")
        })?;

        let corpus = Corpus::build(documents);
        let keywords: Vec<KeywordMetadata> = fitted
            .keywords
            .iter()
            .map(|k| KeywordMetadata::from_provenance(k.score, &provenance::trace(&corpus, &k.term)))
            .collect();
        self.observer.on_event(&PipelineEvent::Traced {
            keywords: keywords.len(),
        });
        Ok(KeywordSummary { keywords })
    }

    pub fn fit_transform(&mut self, documents: &[Document]) -> Result<KeywordSummary> {
        self.fit(documents)?;
        self.transform(documents)
    }
}
