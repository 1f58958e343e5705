//! TOML configuration for `kwx`.
//!
//! Every section and field has a default, so an empty file (or no file at
//! all) is a valid configuration. CLI flags override these values.

use anyhow::{bail, Context, Result};
use keyword_provenance_core::nlp::LanguageOptions;
use keyword_provenance_core::rank::{Aggregation, RankPolicy, TieBreak, DEFAULT_KEYWORD_COUNT};
use keyword_provenance_core::weighting::{Norm, TfIdfParams};
use serde::Deserialize;
use std::path::Path;

use crate::report::OutputFormat;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub extraction: ExtractionConfig,
    #[serde(default)]
    pub normalizer: NormalizerConfig,
    #[serde(default)]
    pub weighting: WeightingConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExtractionConfig {
    #[serde(default = "default_keywords")]
    pub keywords: i64,
    #[serde(default)]
    pub aggregation: Aggregation,
    #[serde(default)]
    pub tie_break: TieBreak,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            keywords: default_keywords(),
            aggregation: Aggregation::default(),
            tie_break: TieBreak::default(),
        }
    }
}

fn default_keywords() -> i64 {
    DEFAULT_KEYWORD_COUNT as i64
}

impl ExtractionConfig {
    pub fn policy(&self) -> RankPolicy {
        RankPolicy {
            aggregation: self.aggregation,
            tie_break: self.tie_break,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct NormalizerConfig {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub extra_stopwords: Vec<String>,
    #[serde(default)]
    pub keep_words: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            extra_stopwords: Vec::new(),
            keep_words: Vec::new(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

impl NormalizerConfig {
    pub fn language_options(&self) -> LanguageOptions {
        LanguageOptions {
            extra_stopwords: self.extra_stopwords.clone(),
            keep_words: self.keep_words.clone(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeightingConfig {
    #[serde(default = "default_true")]
    pub smooth_idf: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default)]
    pub norm: Norm,
}

impl Default for WeightingConfig {
    fn default() -> Self {
        Self {
            smooth_idf: true,
            sublinear_tf: false,
            norm: Norm::L2,
        }
    }
}

fn default_true() -> bool {
    true
}

impl WeightingConfig {
    pub fn params(&self) -> TfIdfParams {
        TfIdfParams {
            smooth_idf: self.smooth_idf,
            sublinear_tf: self.sublinear_tf,
            norm: self.norm,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    #[serde(default = "default_include_globs")]
    pub include_globs: Vec<String>,
    #[serde(default)]
    pub exclude_globs: Vec<String>,
    #[serde(default)]
    pub follow_symlinks: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            include_globs: default_include_globs(),
            exclude_globs: Vec::new(),
            follow_symlinks: false,
        }
    }
}

fn default_include_globs() -> Vec<String> {
    vec!["**/*.txt".to_string(), "**/*.md".to_string()]
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default)]
    pub format: OutputFormat,
    #[serde(default = "default_wrap_width")]
    pub wrap_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            wrap_width: default_wrap_width(),
        }
    }
}

fn default_wrap_width() -> usize {
    70
}

/// Narrowest sentence column the table renderer accepts.
pub const MIN_WRAP_WIDTH: usize = 20;

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<()> {
    if config.extraction.keywords < 1 {
        bail!(
            "extraction.keywords must be >= 1, got {}",
            config.extraction.keywords
        );
    }

    if config.report.wrap_width < MIN_WRAP_WIDTH {
        bail!("report.wrap_width must be >= {}", MIN_WRAP_WIDTH);
    }

    match config.normalizer.language.as_str() {
        "en" => {}
        other => bail!("Unsupported normalizer language: '{}'. Must be en.", other),
    }

    Ok(())
}
