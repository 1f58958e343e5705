//! Pipeline observer: hooks for progress reporting.
//!
//! The extractor notifies an observer at each stage boundary without
//! coupling stage logic to any output channel. The CLI's stderr reporters
//! implement [`PipelineObserver`].

/// A stage boundary in the extraction pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineEvent {
    /// A document was segmented and normalized.
    Normalized { document: String, sentences: usize },
    /// The sentence corpus and term index were built.
    CorpusBuilt {
        documents: usize,
        sentences: usize,
        terms: usize,
    },
    /// The weighting engine produced its rows.
    Weighted { rows: usize },
    /// Ranking selected `selected` of `candidates` distinct terms.
    Ranked { selected: usize, candidates: usize },
    /// Provenance was traced for `keywords` keywords.
    Traced { keywords: usize },
}

/// Receives pipeline events.
pub trait PipelineObserver: Send + Sync {
    fn on_event(&self, event: &PipelineEvent);
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl PipelineObserver for NoopObserver {
    fn on_event(&self, _event: &PipelineEvent) {}
}
