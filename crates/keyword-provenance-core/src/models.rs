//! Core data models used throughout Keyword Provenance.
//!
//! These types represent the documents, sentences, term statistics, and
//! keyword reports that flow through the extraction pipeline. Borrowed
//! views ([`ProvenanceEntry`], [`SentenceHit`]) point back into the owning
//! [`Document`]s so verbatim sentence text is never copied until a
//! [`KeywordSummary`] is built for display.

use serde::Serialize;

use crate::nlp::NormalizedSentence;

/// Raw input produced by a loader before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDocument {
    /// Document identity (usually the file name).
    pub name: String,
    /// Full document text.
    pub text: String,
}

impl RawDocument {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

/// A sentence of a [`Document`], with its normalized tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// 0-based position within the owning document.
    pub index: usize,
    /// Verbatim sentence text.
    pub text: String,
    /// Lemmas in sentence order; stop-words and non-alphabetic tokens removed.
    pub tokens: Vec<String>,
}

impl Sentence {
    /// Returns `true` if `term` is one of this sentence's tokens.
    pub fn contains(&self, term: &str) -> bool {
        self.tokens.iter().any(|t| t == term)
    }
}

/// A normalized document: identity, raw text, and ordered sentences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
    pub text: String,
    pub sentences: Vec<Sentence>,
}

impl Document {
    /// Assemble a document from normalizer output, assigning sentence indices.
    pub fn from_normalized(raw: RawDocument, normalized: Vec<NormalizedSentence>) -> Self {
        let sentences = normalized
            .into_iter()
            .enumerate()
            .map(|(index, s)| Sentence {
                index,
                text: s.text,
                tokens: s.tokens,
            })
            .collect();
        Self {
            name: raw.name,
            text: raw.text,
            sentences,
        }
    }
}

/// Back-reference to a sentence: document position plus sentence index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SentenceRef {
    pub document: usize,
    pub sentence: usize,
}

/// Weight of one term in one corpus sentence, as produced by a
/// [`TermWeighter`](crate::weighting::TermWeighter).
#[derive(Debug, Clone, PartialEq)]
pub struct TermWeight {
    /// Flat corpus position of the sentence.
    pub sentence: usize,
    pub term: String,
    pub weight: f64,
}

impl TermWeight {
    pub fn new(sentence: usize, term: impl Into<String>, weight: f64) -> Self {
        Self {
            sentence,
            term: term.into(),
            weight,
        }
    }
}

/// Corpus-wide aggregate for one term.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermScore {
    pub term: String,
    /// Aggregate of the term's per-sentence weights.
    pub score: f64,
    /// Number of weight rows (sentences) for the term.
    pub occurrences: usize,
    /// Documents containing the term, in first-seen order.
    pub documents: Vec<String>,
}

/// The top-N terms, best first.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordResult {
    pub keywords: Vec<TermScore>,
}

impl KeywordResult {
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn terms(&self) -> Vec<&str> {
        self.keywords.iter().map(|k| k.term.as_str()).collect()
    }

    pub fn get(&self, term: &str) -> Option<&TermScore> {
        self.keywords.iter().find(|k| k.term == term)
    }
}

/// A sentence containing a traced term, borrowed from its document.
#[derive(Debug, Clone, Copy)]
pub struct SentenceHit<'a> {
    pub reference: SentenceRef,
    pub document: &'a str,
    pub sentence: &'a Sentence,
}

/// Where a term came from: its documents and verbatim sentences.
#[derive(Debug, Clone)]
pub struct ProvenanceEntry<'a> {
    pub term: String,
    pub occurrences: usize,
    /// Distinct documents, in first-seen order.
    pub documents: Vec<&'a str>,
    /// Sentences in document order, then sentence order.
    pub sentences: Vec<SentenceHit<'a>>,
}

impl<'a> ProvenanceEntry<'a> {
    pub fn sentence_texts(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.sentences.iter().map(|hit| hit.sentence.text.as_str())
    }
}

/// Owned report row for one keyword, ready for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordMetadata {
    pub keyword: String,
    /// Ranking score from the fitted corpus.
    pub score: f64,
    pub occurrences: usize,
    pub documents: Vec<String>,
    pub sentences: Vec<String>,
}

impl KeywordMetadata {
    pub fn from_provenance(score: f64, entry: &ProvenanceEntry<'_>) -> Self {
        Self {
            keyword: entry.term.clone(),
            score,
            occurrences: entry.occurrences,
            documents: entry.documents.iter().map(|d| d.to_string()).collect(),
            sentences: entry.sentence_texts().map(str::to_string).collect(),
        }
    }
}

/// Keywords with their provenance, in ranking order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KeywordSummary {
    pub keywords: Vec<KeywordMetadata>,
}

impl KeywordSummary {
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn get(&self, keyword: &str) -> Option<&KeywordMetadata> {
        self.keywords.iter().find(|k| k.keyword == keyword)
    }
}
