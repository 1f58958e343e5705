//! Provenance tracker.
//!
//! Recovers, for a selected term, every sentence that contains it and the
//! documents those sentences belong to, straight from the corpus term
//! index. The returned [`ProvenanceEntry`] borrows sentences from the
//! documents; nothing is copied or truncated here.

use crate::corpus::Corpus;
use crate::models::{ProvenanceEntry, SentenceHit};

/// Trace `term` through the corpus.
///
/// - `occurrences` is the number of distinct sentences containing the term.
/// - `documents` lists each containing document once, in first-seen order.
/// - `sentences` is in document order, then sentence order. Sentences with
///   identical text are separate occurrences and are all kept.
///
/// A term absent from the corpus yields an entry with no occurrences.
pub fn trace<'a>(corpus: &Corpus<'a>, term: &str) -> ProvenanceEntry<'a> {
    let documents = corpus.documents();
    let mut names: Vec<&'a str> = Vec::new();
    let mut seen_documents: Vec<usize> = Vec::new();
    let mut sentences = Vec::new();

    for &position in corpus.postings(term) {
        let Some(reference) = corpus.sentence_ref(position) else {
            continue;
        };
        let document = &documents[reference.document];
        if !seen_documents.contains(&reference.document) {
            seen_documents.push(reference.document);
            names.push(document.name.as_str());
        }
        sentences.push(SentenceHit {
            reference,
            document: document.name.as_str(),
            sentence: &document.sentences[reference.sentence],
        });
    }

    ProvenanceEntry {
        term: term.to_string(),
        occurrences: sentences.len(),
        documents: names,
        sentences,
    }
}
