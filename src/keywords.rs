//! Keyword extraction command.
//!
//! Wires the filesystem loader, the shared language model, and the core
//! [`KeywordExtractor`] together, then renders the report to stdout.
//!
//! # Workflow
//!
//! 1. Validate the keyword count (before any document is read).
//! 2. Load the language model once and share it with the normalizer.
//! 3. Load and normalize the documents named on the command line.
//! 4. Fit the keywords on those documents.
//! 5. Trace the keywords through the same documents, or through the
//!    `--against` documents when given.

use anyhow::Result;
use keyword_provenance_core::models::KeywordSummary;
use keyword_provenance_core::nlp::{LanguageModel, RuleNormalizer};
use keyword_provenance_core::rank::validate_keyword_count;
use keyword_provenance_core::weighting::TfIdfWeighter;
use keyword_provenance_core::KeywordExtractor;
use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::documents::load_documents;
use crate::progress::{ProgressMode, ProgressObserver};
use crate::report;

/// Extract keywords from `paths` and print the report.
pub fn run_keywords(
    config: &Config,
    paths: &[PathBuf],
    against: &[PathBuf],
    progress: ProgressMode,
) -> Result<()> {
    let summary = extract_keywords(config, paths, against, &progress.observer())?;

    if summary.is_empty() && config.report.format == report::OutputFormat::Table {
        println!("{}", report::EMPTY_MESSAGE);
        return Ok(());
    }

    let rendered = report::render(&summary, config.report.format, config.report.wrap_width)?;
    println!("{}", rendered);
    Ok(())
}

/// Run the extraction pipeline and return the keyword summary.
pub fn extract_keywords(
    config: &Config,
    paths: &[PathBuf],
    against: &[PathBuf],
    observer: &ProgressObserver,
) -> Result<KeywordSummary> {
    let keyword_count = validate_keyword_count(config.extraction.keywords)?;

    let model = Arc::new(LanguageModel::load(&config.normalizer.language_options()));
    let mut extractor = KeywordExtractor::new(
        Box::new(RuleNormalizer::new(model)),
        Box::new(TfIdfWeighter::new(config.weighting.params())),
        keyword_count,
    )?
    .with_policy(config.extraction.policy())
    .with_observer(Arc::new(observer.clone()));

    let raw = load_documents(paths, &config.input)?;
    observer.loaded(raw.len());
    let documents = extractor.normalize(raw)?;

    if against.is_empty() {
        return Ok(extractor.fit_transform(&documents)?);
    }

    extractor.fit(&documents)?;
    let raw = load_documents(against, &config.input)?;
    observer.loaded(raw.len());
    let targets = extractor.normalize(raw)?;
    Ok(extractor.transform(&targets)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::NoProgress;
    use std::fs;
    use tempfile::TempDir;

    fn quiet() -> ProgressObserver {
        ProgressObserver::new(Arc::new(NoProgress))
    }

    fn fixture() -> (TempDir, Vec<PathBuf>) {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.txt");
        let b = tmp.path().join("b.txt");
        fs::write(&a, "Rick built a portal.\nMorty hates the portal.").unwrap();
        fs::write(&b, "The portal broke. Rick fixed the plumbus.").unwrap();
        (tmp, vec![a, b])
    }

    #[test]
    fn test_extract_keywords_traces_portal() {
        let (_tmp, paths) = fixture();
        let mut config = Config::default();
        config.extraction.keywords = 1;

        let summary = extract_keywords(&config, &paths, &[], &quiet()).unwrap();
        assert_eq!(summary.keywords.len(), 1);
        let portal = &summary.keywords[0];
        assert_eq!(portal.keyword, "portal");
        assert_eq!(portal.occurrences, 3);
        assert_eq!(portal.documents, vec!["a.txt", "b.txt"]);
        assert_eq!(
            portal.sentences,
            vec![
                "Rick built a portal.",
                "Morty hates the portal.",
                "The portal broke."
            ]
        );
    }

    #[test]
    fn test_invalid_count_checked_before_loading() {
        let mut config = Config::default();
        config.extraction.keywords = 0;
        let missing = vec![PathBuf::from("/nonexistent/doc.txt")];
        let err = extract_keywords(&config, &missing, &[], &quiet()).unwrap_err();
        assert!(err.to_string().contains("positive integer"));
    }

    #[test]
    fn test_against_reports_over_other_documents() {
        let (tmp, paths) = fixture();
        let c = tmp.path().join("c.txt");
        fs::write(&c, "Summer found a portal. Nothing else happened.").unwrap();

        let mut config = Config::default();
        config.extraction.keywords = 1;
        let summary = extract_keywords(&config, &paths, &[c], &quiet()).unwrap();
        let portal = summary.get("portal").unwrap();
        assert_eq!(portal.occurrences, 1);
        assert_eq!(portal.documents, vec!["c.txt"]);
    }

    #[test]
    fn test_extra_stopwords_remove_keyword() {
        let (_tmp, paths) = fixture();
        let mut config = Config::default();
        config.extraction.keywords = 10;
        config.normalizer.extra_stopwords = vec!["portal".to_string()];

        let summary = extract_keywords(&config, &paths, &[], &quiet()).unwrap();
        assert!(summary.get("portal").is_none());
        assert!(summary.get("plumbus").is_some());
    }
}
