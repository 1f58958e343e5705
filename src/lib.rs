//! # Keyword Provenance
//!
//! Rank the most salient keywords of a set of text documents and show, for
//! every keyword, the documents and verbatim sentences it came from.
//!
//! Keywords are scored by TF-ISF: term frequency times inverse *sentence*
//! frequency, with each sentence of the corpus playing the role of a
//! document. The ranking and provenance logic lives in the
//! `keyword-provenance-core` crate; this crate adds the `kwx` command line,
//! configuration, filesystem loading, progress reporting, and rendering.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐   ┌──────────────────────────┐   ┌──────────┐
//! │  documents  │──▶│ keyword-provenance-core  │──▶│  report  │
//! │ files/dirs  │   │ normalize, rank, trace   │   │table/json│
//! └─────────────┘   └────────────┬─────────────┘   └──────────┘
//!                                │
//!                                ▼
//!                          ┌──────────┐
//!                          │ progress │ (stderr)
//!                          └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! kwx notes/a.txt notes/b.txt            # top 5 keywords with provenance
//! kwx -n 10 notes/                       # walk a directory
//! kwx --format json notes/ > kw.json     # machine-readable output
//! kwx corpus/ --against new-notes/       # fit on one set, report on another
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`documents`] | File and directory loading |
//! | [`keywords`] | Extraction command |
//! | [`progress`] | Stderr progress reporting |
//! | [`report`] | Table and JSON rendering |

pub mod config;
pub mod documents;
pub mod keywords;
pub mod progress;
pub mod report;
