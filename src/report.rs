//! Keyword report rendering.
//!
//! Two output formats:
//!
//! - **table**: a box-drawn grid with one row per keyword. Sentence cells
//!   are word-wrapped and separated by blank lines; documents are joined
//!   by `", "`.
//! - **json**: a pretty-printed array of keyword objects.

use anyhow::Result;
use keyword_provenance_core::models::{KeywordMetadata, KeywordSummary};
use serde::Deserialize;

/// Printed instead of a table when no keywords were selected.
pub const EMPTY_MESSAGE: &str = "No keywords found.";

const HEADERS: [&str; 4] = ["Word", "Occurrences", "Documents", "Sentences"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Render `summary` in the requested format.
pub fn render(summary: &KeywordSummary, format: OutputFormat, wrap_width: usize) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(summary, wrap_width)),
        OutputFormat::Json => render_json(summary),
    }
}

pub fn render_json(summary: &KeywordSummary) -> Result<String> {
    Ok(serde_json::to_string_pretty(&summary.keywords)?)
}

#[derive(Clone, Copy, PartialEq)]
enum Align {
    Left,
    Right,
}

const ALIGN: [Align; 4] = [Align::Left, Align::Right, Align::Left, Align::Left];

/// Render the keyword table. An empty summary renders as [`EMPTY_MESSAGE`].
pub fn render_table(summary: &KeywordSummary, wrap_width: usize) -> String {
    if summary.is_empty() {
        return EMPTY_MESSAGE.to_string();
    }

    let rows: Vec<[Vec<String>; 4]> = summary
        .keywords
        .iter()
        .map(|k| table_row(k, wrap_width))
        .collect();

    let mut widths: [usize; 4] = HEADERS.map(|h| h.chars().count() + 2);
    for row in &rows {
        for (col, cell) in row.iter().enumerate() {
            for line in cell {
                widths[col] = widths[col].max(line.chars().count());
            }
        }
    }

    let mut out = Vec::new();
    out.push(rule(&widths, '╒', '═', '╤', '╕'));
    out.extend(cell_lines(&HEADERS.map(|h| vec![h.to_string()]), &widths));
    out.push(rule(&widths, '╞', '═', '╪', '╡'));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push(rule(&widths, '├', '─', '┼', '┤'));
        }
        out.extend(cell_lines(row, &widths));
    }
    out.push(rule(&widths, '╘', '═', '╧', '╛'));
    out.join("\n")
}

fn table_row(keyword: &KeywordMetadata, wrap_width: usize) -> [Vec<String>; 4] {
    let sentences = keyword
        .sentences
        .iter()
        .map(|s| wrap(s, wrap_width).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");

    [
        vec![keyword.keyword.clone()],
        vec![keyword.occurrences.to_string()],
        vec![keyword.documents.join(", ")],
        sentences.split('\n').map(str::to_string).collect(),
    ]
}

fn rule(widths: &[usize; 4], left: char, fill: char, mid: char, right: char) -> String {
    let segments: Vec<String> = widths
        .iter()
        .map(|w| fill.to_string().repeat(w + 2))
        .collect();
    format!("{}{}{}", left, segments.join(&mid.to_string()), right)
}

fn cell_lines(row: &[Vec<String>; 4], widths: &[usize; 4]) -> Vec<String> {
    let height = row.iter().map(Vec::len).max().unwrap_or(1).max(1);
    (0..height)
        .map(|line| {
            let cells: Vec<String> = row
                .iter()
                .enumerate()
                .map(|(col, cell)| {
                    let text = cell.get(line).map(String::as_str).unwrap_or("");
                    pad(text, widths[col], ALIGN[col])
                })
                .collect();
            format!("│ {} │", cells.join(" │ "))
        })
        .collect()
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = " ".repeat(width.saturating_sub(text.chars().count()));
    match align {
        Align::Left => format!("{}{}", text, fill),
        Align::Right => format!("{}{}", fill, text),
    }
}

/// Greedy word wrap to at most `width` characters per line. Words longer
/// than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();

        if current_len > 0 && current_len + 1 + word.len() <= width {
            current.push(' ');
            current.extend(word.iter());
            current_len += 1 + word.len();
            continue;
        }

        if current_len > 0 {
            lines.push(std::mem::take(&mut current));
            current_len = 0;
        }
        while word.len() > width {
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }
        current_len = word.len();
        current = word.into_iter().collect();
    }

    if current_len > 0 {
        lines.push(current);
    }
    lines
}
