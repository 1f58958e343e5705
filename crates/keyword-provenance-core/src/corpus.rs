//! Sentence corpus builder.
//!
//! Flattens every document's sentences into one ordered corpus (document
//! order, then sentence order) and indexes each normalized term to the
//! corpus positions of the sentences that contain it. The index is built
//! once and shared by the ranker and the provenance tracker.
//!
//! The corpus borrows the documents: positions resolve back to the owning
//! [`Document`] and [`Sentence`], so verbatim text is never duplicated.

use rustc_hash::FxHashMap;

use crate::models::{Document, Sentence, SentenceRef};

/// Ordered sentence corpus with a term → sentence index.
#[derive(Debug, Clone)]
pub struct Corpus<'a> {
    documents: &'a [Document],
    sentences: Vec<SentenceRef>,
    /// Ascending corpus positions per term; each sentence appears once.
    index: FxHashMap<&'a str, Vec<usize>>,
}

impl<'a> Corpus<'a> {
    /// Build the corpus and term index for `documents`.
    ///
    /// Sentences without tokens still occupy a corpus position (they count
    /// as weighting units) but add no index entries. Documents without
    /// sentences contribute nothing.
    pub fn build(documents: &'a [Document]) -> Self {
        let mut sentences = Vec::new();
        let mut index: FxHashMap<&'a str, Vec<usize>> = FxHashMap::default();

        for (doc_pos, document) in documents.iter().enumerate() {
            for (sent_pos, sentence) in document.sentences.iter().enumerate() {
                let position = sentences.len();
                sentences.push(SentenceRef {
                    document: doc_pos,
                    sentence: sent_pos,
                });
                for token in &sentence.tokens {
                    let postings = index.entry(token.as_str()).or_default();
                    if postings.last() != Some(&position) {
                        postings.push(position);
                    }
                }
            }
        }

        Self {
            documents,
            sentences,
            index,
        }
    }

    pub fn documents(&self) -> &'a [Document] {
        self.documents
    }

    /// Number of sentences (weighting units).
    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Number of distinct terms.
    pub fn vocabulary_len(&self) -> usize {
        self.index.len()
    }

    pub fn sentence_ref(&self, position: usize) -> Option<SentenceRef> {
        self.sentences.get(position).copied()
    }

    pub fn document_at(&self, position: usize) -> Option<&'a Document> {
        let r = self.sentence_ref(position)?;
        self.documents.get(r.document)
    }

    pub fn sentence_at(&self, position: usize) -> Option<&'a Sentence> {
        let r = self.sentence_ref(position)?;
        self.documents.get(r.document)?.sentences.get(r.sentence)
    }

    /// Token lists in corpus order, the input to a term weighter.
    pub fn token_lists(&self) -> Vec<&'a [String]> {
        let documents = self.documents;
        self.sentences
            .iter()
            .map(|r| documents[r.document].sentences[r.sentence].tokens.as_slice())
            .collect()
    }

    /// Corpus positions of sentences containing `term`, ascending.
    pub fn postings(&self, term: &str) -> &[usize] {
        self.index.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every distinct term, in no particular order.
    pub fn terms(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.index.keys().copied()
    }
}
