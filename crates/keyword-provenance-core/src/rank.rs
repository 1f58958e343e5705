//! Keyword ranker.
//!
//! Aggregates per-sentence term weights into one corpus-wide score per
//! term, then selects the top N.
//!
//! # Ranking Algorithm
//!
//! 1. Validate every weight row against the corpus (position in range,
//!    weight finite and non-negative).
//! 2. Aggregate rows per term ([`Aggregation::Sum`] by default).
//! 3. Sort by score (desc), then by the [`TieBreak`] key.
//! 4. Truncate to N.
//!
//! Fewer than N distinct terms returns them all; an empty corpus returns an
//! empty result.

use anyhow::anyhow;
use rustc_hash::FxHashMap;
use serde::Deserialize;
use std::cmp::Ordering;

use crate::corpus::Corpus;
use crate::error::{ExtractError, Result};
use crate::models::{KeywordResult, TermScore, TermWeight};

/// Default number of keywords to select.
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Validate a requested keyword count, which must be a positive integer.
pub fn validate_keyword_count(n: i64) -> Result<usize> {
    if n <= 0 {
        return Err(ExtractError::invalid_argument(format!(
            "keyword count must be a positive integer, got {}",
            n
        )));
    }
    usize::try_from(n).map_err(|_| ExtractError::invalid_argument("keyword count is too large"))
}

/// How per-sentence weights combine into a term's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Aggregation {
    #[default]
    Sum,
    Max,
}

/// Ordering among terms with equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Term ascending.
    #[default]
    Term,
    /// Earliest corpus sentence first, then term ascending.
    FirstSeen,
}

impl std::str::FromStr for Aggregation {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "sum" => Ok(Aggregation::Sum),
            "max" => Ok(Aggregation::Max),
            other => Err(ExtractError::invalid_argument(format!(
                "unknown aggregation '{}'. Must be sum or max.",
                other
            ))),
        }
    }
}

impl std::str::FromStr for TieBreak {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "term" => Ok(TieBreak::Term),
            "first_seen" | "first-seen" => Ok(TieBreak::FirstSeen),
            other => Err(ExtractError::invalid_argument(format!(
                "unknown tie break '{}'. Must be term or first_seen.",
                other
            ))),
        }
    }
}

/// Aggregation and tie-break policy for ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RankPolicy {
    pub aggregation: Aggregation,
    pub tie_break: TieBreak,
}

struct TermAccumulator {
    score: f64,
    positions: Vec<usize>,
}

/// Rank the corpus' terms and return the top `n`.
pub fn rank(
    corpus: &Corpus<'_>,
    weights: &[TermWeight],
    n: usize,
    policy: RankPolicy,
) -> Result<KeywordResult> {
    if n == 0 {
        return Err(ExtractError::invalid_argument(
            "keyword count must be a positive integer, got 0",
        ));
    }
    if corpus.is_empty() {
        return Ok(KeywordResult::default());
    }

    let mut acc: FxHashMap<&str, TermAccumulator> = FxHashMap::default();
    for row in weights {
        if row.sentence >= corpus.len() {
            return Err(anyhow!(
                "term weight for '{}' references sentence {} but the corpus has {}",
                row.term,
                row.sentence,
                corpus.len()
            )
            .into());
        }
        if !row.weight.is_finite() || row.weight < 0.0 {
            return Err(anyhow!(
                "term weight for '{}' in sentence {} is not a non-negative number: {}",
                row.term,
                row.sentence,
                row.weight
            )
            .into());
        }

        let entry = acc.entry(row.term.as_str()).or_insert(TermAccumulator {
            score: 0.0,
            positions: Vec::new(),
        });
        entry.score = match policy.aggregation {
            Aggregation::Sum => entry.score + row.weight,
            Aggregation::Max => entry.score.max(row.weight),
        };
        entry.positions.push(row.sentence);
    }

    struct Ranked<'t> {
        term: &'t str,
        score: f64,
        first_seen: usize,
        positions: Vec<usize>,
    }

    let mut ranked: Vec<Ranked<'_>> = acc
        .into_iter()
        .map(|(term, mut a)| {
            a.positions.sort_unstable();
            Ranked {
                term,
                score: a.score,
                first_seen: a.positions.first().copied().unwrap_or(usize::MAX),
                positions: a.positions,
            }
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| match policy.tie_break {
                TieBreak::Term => Ordering::Equal,
                TieBreak::FirstSeen => a.first_seen.cmp(&b.first_seen),
            })
            .then_with(|| a.term.cmp(b.term))
    });
    ranked.truncate(n);

    let documents = corpus.documents();
    let keywords = ranked
        .into_iter()
        .map(|r| {
            let mut seen: Vec<usize> = Vec::new();
            for &pos in &r.positions {
                if let Some(sref) = corpus.sentence_ref(pos) {
                    if !seen.contains(&sref.document) {
                        seen.push(sref.document);
                    }
                }
            }
            TermScore {
                term: r.term.to_string(),
                score: r.score,
                occurrences: r.positions.len(),
                documents: seen
                    .into_iter()
                    .map(|d| documents[d].name.clone())
                    .collect(),
            }
        })
        .collect();

    Ok(KeywordResult { keywords })
}
