//! # Keyword Provenance Core
//!
//! Pure ranking and provenance logic for Keyword Provenance: data models,
//! the sentence corpus, the keyword ranker, the provenance tracker, and the
//! collaborator traits for text normalization and term weighting.
//!
//! This crate performs no filesystem I/O and holds no global state. The
//! calling application loads documents, builds a [`nlp::LanguageModel`]
//! once, and injects the collaborators into a
//! [`KeywordExtractor`](extractor::KeywordExtractor).
//!
//! ## Pipeline
//!
//! ```text
//! RawDocument ─▶ TextNormalizer ─▶ Document/Sentence
//!                                        │
//!                                        ▼
//!                                   Corpus (term index)
//!                                   │              │
//!                                   ▼              ▼
//!                          TermWeighter     Provenance Tracker
//!                                   │              │
//!                                   ▼              ▼
//!                          Keyword Ranker ─▶ KeywordSummary
//! ```

pub mod corpus;
pub mod error;
pub mod extractor;
pub mod models;
pub mod nlp;
pub mod observer;
pub mod provenance;
pub mod rank;
pub mod weighting;

pub use error::{ExtractError, Result};
pub use extractor::KeywordExtractor;
