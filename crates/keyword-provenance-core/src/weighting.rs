//! Term weighting over sentence-level corpora.
//!
//! Defines the [`TermWeighter`] trait and the built-in [`TfIdfWeighter`].
//! Each sentence plays the role of a "document" in the classical TF-IDF
//! formulation, so the inverse frequency is an inverse *sentence*
//! frequency.
//!
//! # Default weighting
//!
//! Matches the classic vectorizer defaults:
//!
//! - `tf(t, s)` = raw count of `t` in sentence `s`
//! - `idf(t)` = `ln((1 + n) / (1 + df(t))) + 1`
//! - each sentence row is L2-normalized
//!
//! where `n` counts every sentence, including those with no tokens.

use std::collections::BTreeMap;

use anyhow::Result;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::models::TermWeight;

/// Computes per-sentence term weights for a corpus.
///
/// `corpus[i]` is the token list of the sentence at flat position `i`.
/// Implementations return one row per (sentence, distinct term) pair with a
/// non-negative weight, and must be deterministic.
pub trait TermWeighter: Send + Sync {
    fn weigh(&self, corpus: &[&[String]]) -> Result<Vec<TermWeight>>;
}

/// Row normalization applied after TF × IDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    #[default]
    L2,
    L1,
    None,
}

impl std::str::FromStr for Norm {
    type Err = crate::ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "l2" => Ok(Norm::L2),
            "l1" => Ok(Norm::L1),
            "none" => Ok(Norm::None),
            other => Err(crate::ExtractError::invalid_argument(format!(
                "unknown norm '{}'. Must be l2, l1, or none.",
                other
            ))),
        }
    }
}

/// TF-ISF parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TfIdfParams {
    /// Add one to document frequencies, as if an extra sentence held every term.
    pub smooth_idf: bool,
    /// Use `1 + ln(tf)` instead of raw counts.
    pub sublinear_tf: bool,
    pub norm: Norm,
}

impl Default for TfIdfParams {
    fn default() -> Self {
        Self {
            smooth_idf: true,
            sublinear_tf: false,
            norm: Norm::L2,
        }
    }
}

/// The built-in TF-ISF engine.
#[derive(Debug, Clone, Default)]
pub struct TfIdfWeighter {
    params: TfIdfParams,
}

impl TfIdfWeighter {
    pub fn new(params: TfIdfParams) -> Self {
        Self { params }
    }

    fn idf(&self, num_sentences: usize, df: usize) -> f64 {
        let (n, df) = (num_sentences as f64, df as f64);
        if self.params.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }

    fn tf(&self, count: usize) -> f64 {
        if self.params.sublinear_tf {
            1.0 + (count as f64).ln()
        } else {
            count as f64
        }
    }
}

impl TermWeighter for TfIdfWeighter {
    fn weigh(&self, corpus: &[&[String]]) -> Result<Vec<TermWeight>> {
        // Sorted per-sentence counts keep row order independent of hashing.
        let counts: Vec<BTreeMap<&str, usize>> = corpus
            .iter()
            .map(|tokens| {
                let mut tf = BTreeMap::new();
                for token in tokens.iter() {
                    *tf.entry(token.as_str()).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut df: FxHashMap<&str, usize> = FxHashMap::default();
        for sentence in &counts {
            for term in sentence.keys() {
                *df.entry(*term).or_insert(0) += 1;
            }
        }

        let mut rows = Vec::new();
        for (position, sentence) in counts.iter().enumerate() {
            let raw: Vec<(&str, f64)> = sentence
                .iter()
                .map(|(term, count)| (*term, self.tf(*count) * self.idf(corpus.len(), df[term])))
                .collect();

            let norm = match self.params.norm {
                Norm::L2 => raw.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
                Norm::L1 => raw.iter().map(|(_, w)| w.abs()).sum::<f64>(),
                Norm::None => 1.0,
            };
            let norm = if norm > 0.0 { norm } else { 1.0 };

            rows.extend(
                raw.into_iter()
                    .map(|(term, w)| TermWeight::new(position, term, w / norm)),
            );
        }

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn weight_of(rows: &[TermWeight], sentence: usize, term: &str) -> f64 {
        rows.iter()
            .find(|r| r.sentence == sentence && r.term == term)
            .map(|r| r.weight)
            .unwrap_or(0.0)
    }

    #[test]
    fn test_one_row_per_distinct_term() {
        let s0 = tokens(&["rick", "morty", "morty"]);
        let s1 = tokens(&["morty"]);
        let rows = TfIdfWeighter::default().weigh(&[&s0, &s1]).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].term, "morty");
        assert_eq!(rows[1].term, "rick");
        assert_eq!(rows[2].sentence, 1);
    }

    #[test]
    fn test_smoothed_idf_l2_values() {
        let s0 = tokens(&["rick", "morty", "forever"]);
        let s1 = tokens(&["morty", "thing"]);
        let s2 = tokens(&["rick", "morty", "forever", "time"]);
        let rows = TfIdfWeighter::default().weigh(&[&s0, &s1, &s2]).unwrap();

        // idf(morty) = 1, idf(thing) = ln 2 + 1
        let idf_thing = 2f64.ln() + 1.0;
        let norm = (1.0 + idf_thing * idf_thing).sqrt();
        assert!((weight_of(&rows, 1, "morty") - 1.0 / norm).abs() < 1e-12);
        assert!((weight_of(&rows, 1, "thing") - idf_thing / norm).abs() < 1e-12);
        assert_eq!(weight_of(&rows, 0, "rick"), weight_of(&rows, 0, "forever"));
    }

    #[test]
    fn test_rows_are_unit_length() {
        let s0 = tokens(&["alpha", "beta", "beta", "gamma"]);
        let s1 = tokens(&["beta"]);
        let rows = TfIdfWeighter::default().weigh(&[&s0, &s1]).unwrap();
        let len0: f64 = rows
            .iter()
            .filter(|r| r.sentence == 0)
            .map(|r| r.weight * r.weight)
            .sum();
        assert!((len0 - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_empty_sentence_counts_toward_n() {
        let empty: Vec<String> = Vec::new();
        let s1 = tokens(&["portal"]);
        let weighter = TfIdfWeighter::new(TfIdfParams {
            norm: Norm::None,
            ..TfIdfParams::default()
        });
        let rows = weighter.weigh(&[&empty, &s1]).unwrap();
        assert_eq!(rows.len(), 1);
        let expected = (3.0f64 / 2.0).ln() + 1.0;
        assert!((rows[0].weight - expected).abs() < 1e-12);
    }

    #[test]
    fn test_sublinear_tf() {
        let s0 = tokens(&["gun", "gun", "gun"]);
        let weighter = TfIdfWeighter::new(TfIdfParams {
            sublinear_tf: true,
            smooth_idf: false,
            norm: Norm::None,
        });
        let rows = weighter.weigh(&[&s0]).unwrap();
        assert!((rows[0].weight - (1.0 + 3f64.ln())).abs() < 1e-12);
    }

    #[test]
    fn test_weights_non_negative() {
        let s0 = tokens(&["a", "b"]);
        let s1 = tokens(&["a", "b"]);
        let weighter = TfIdfWeighter::new(TfIdfParams {
            smooth_idf: false,
            ..TfIdfParams::default()
        });
        for row in weighter.weigh(&[&s0, &s1]).unwrap() {
            assert!(row.weight >= 0.0);
        }
    }

    #[test]
    fn test_norm_from_str() {
        assert_eq!("l1".parse::<Norm>().unwrap(), Norm::L1);
        assert!("l3".parse::<Norm>().is_err());
    }
}
