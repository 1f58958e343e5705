//! Extraction progress reporting.
//!
//! Reports what `kwx` is doing (loading, normalizing each document, building
//! the corpus, weighting, ranking, tracing) so long runs over large
//! directories are observable. Progress is emitted on **stderr** so stdout
//! remains parseable for scripts.

use keyword_provenance_core::observer::{PipelineEvent, PipelineObserver};
use std::io::Write;
use std::sync::Arc;

/// A single progress event.
#[derive(Clone, Debug)]
pub enum ProgressEvent<'a> {
    /// Input paths were resolved and read.
    Loaded { documents: usize },
    /// A core pipeline stage finished.
    Stage(&'a PipelineEvent),
}

/// Reports progress. Implementations write to stderr (human or JSON).
pub trait ProgressReporter: Send + Sync {
    fn report(&self, event: ProgressEvent<'_>);
}

/// Human-friendly progress on stderr: "kwx  corpus  2 documents  1,234 sentences  560 terms".
pub struct StderrProgress;

impl ProgressReporter for StderrProgress {
    fn report(&self, event: ProgressEvent<'_>) {
        let line = match event {
            ProgressEvent::Loaded { documents } => {
                format!("kwx  load  {} documents\n", format_number(documents))
            }
            ProgressEvent::Stage(PipelineEvent::Normalized {
                document,
                sentences,
            }) => format!(
                "kwx  normalize  {}  {} sentences\n",
                document,
                format_number(*sentences)
            ),
            ProgressEvent::Stage(PipelineEvent::CorpusBuilt {
                documents,
                sentences,
                terms,
            }) => format!(
                "kwx  corpus  {} documents  {} sentences  {} terms\n",
                format_number(*documents),
                format_number(*sentences),
                format_number(*terms)
            ),
            ProgressEvent::Stage(PipelineEvent::Weighted { rows }) => {
                format!("kwx  weigh  {} rows\n", format_number(*rows))
            }
            ProgressEvent::Stage(PipelineEvent::Ranked {
                selected,
                candidates,
            }) => format!(
                "kwx  rank  {} / {} terms\n",
                format_number(*selected),
                format_number(*candidates)
            ),
            ProgressEvent::Stage(PipelineEvent::Traced { keywords }) => {
                format!("kwx  trace  {} keywords\n", format_number(*keywords))
            }
        };
        let _ = std::io::stderr().lock().write_all(line.as_bytes());
        let _ = std::io::stderr().lock().flush();
    }
}

/// Machine-readable progress: one JSON object per line on stderr.
pub struct JsonProgress;

impl ProgressReporter for JsonProgress {
    fn report(&self, event: ProgressEvent<'_>) {
        let obj = match event {
            ProgressEvent::Loaded { documents } => serde_json::json!({
                "event": "progress",
                "stage": "load",
                "documents": documents
            }),
            ProgressEvent::Stage(PipelineEvent::Normalized {
                document,
                sentences,
            }) => serde_json::json!({
                "event": "progress",
                "stage": "normalize",
                "document": document,
                "sentences": sentences
            }),
            ProgressEvent::Stage(PipelineEvent::CorpusBuilt {
                documents,
                sentences,
                terms,
            }) => serde_json::json!({
                "event": "progress",
                "stage": "corpus",
                "documents": documents,
                "sentences": sentences,
                "terms": terms
            }),
            ProgressEvent::Stage(PipelineEvent::Weighted { rows }) => serde_json::json!({
                "event": "progress",
                "stage": "weigh",
                "rows": rows
            }),
            ProgressEvent::Stage(PipelineEvent::Ranked {
                selected,
                candidates,
            }) => serde_json::json!({
                "event": "progress",
                "stage": "rank",
                "selected": selected,
                "candidates": candidates
            }),
            ProgressEvent::Stage(PipelineEvent::Traced { keywords }) => serde_json::json!({
                "event": "progress",
                "stage": "trace",
                "keywords": keywords
            }),
        };
        if let Ok(line) = serde_json::to_string(&obj) {
            let _ = writeln!(std::io::stderr().lock(), "{}", line);
            let _ = std::io::stderr().lock().flush();
        }
    }
}

/// No-op reporter when progress is disabled.
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn report(&self, _event: ProgressEvent<'_>) {}
}

/// Forwards core pipeline events to a [`ProgressReporter`].
#[derive(Clone)]
pub struct ProgressObserver {
    reporter: Arc<dyn ProgressReporter>,
}

impl ProgressObserver {
    pub fn new(reporter: Arc<dyn ProgressReporter>) -> Self {
        Self { reporter }
    }

    pub fn loaded(&self, documents: usize) {
        self.reporter.report(ProgressEvent::Loaded { documents });
    }
}

impl PipelineObserver for ProgressObserver {
    fn on_event(&self, event: &PipelineEvent) {
        self.reporter.report(ProgressEvent::Stage(event));
    }
}

fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + (s.len() - 1) / 3);
    let chars: Vec<char> = s.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }
    result.chars().rev().collect()
}

/// Progress mode for the CLI: off, human (stderr), or JSON (stderr).
#[derive(Clone, Copy, Debug, Eq, PartialEq, clap::ValueEnum)]
pub enum ProgressMode {
    Off,
    Human,
    Json,
}

impl ProgressMode {
    /// Default: human progress when stderr is a TTY, otherwise off.
    pub fn default_for_tty() -> Self {
        if atty::is(atty::Stream::Stderr) {
            ProgressMode::Human
        } else {
            ProgressMode::Off
        }
    }

    pub fn reporter(&self) -> Arc<dyn ProgressReporter> {
        match self {
            ProgressMode::Off => Arc::new(NoProgress),
            ProgressMode::Human => Arc::new(StderrProgress),
            ProgressMode::Json => Arc::new(JsonProgress),
        }
    }

    pub fn observer(&self) -> ProgressObserver {
        ProgressObserver::new(self.reporter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder {
        lines: Mutex<Vec<String>>,
    }

    impl ProgressReporter for Recorder {
        fn report(&self, event: ProgressEvent<'_>) {
            self.lines.lock().unwrap().push(format!("{:?}", event));
        }
    }

    #[test]
    fn test_format_number_comma() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1_234_567), "1,234,567");
    }

    #[test]
    fn test_observer_forwards_stage_events() {
        let recorder = Arc::new(Recorder::default());
        let observer = ProgressObserver::new(recorder.clone());
        observer.loaded(2);
        observer.on_event(&PipelineEvent::Weighted { rows: 7 });

        let lines = recorder.lines.lock().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Loaded"));
        assert!(lines[1].contains("Weighted"));
    }
}
