//! Header-to-row-key reconciliation.
//!
//! Declared table headers are presentation strings (`"Chest (CM)"`) while
//! row keys are raw data-file keys (`Chest_CM`), and the correspondence is
//! not a declared mapping. Resolution runs an ordered list of pure
//! key-derivation strategies, short-circuiting on the first key present in
//! the row, then falls back to a prefix scan, then to the placeholder.

use std::collections::BTreeMap;

use sizefit_model::ClothingRow;

/// Emitted when no strategy resolves a cell, and for cells whose value is
/// explicitly null.
pub const PLACEHOLDER: &str = "-";

/// Derives candidate row keys from a header label. Each strategy is pure;
/// they are tried in order and the first candidate present in the row wins.
type KeyStrategy = fn(&str) -> Vec<String>;

const STRATEGIES: &[KeyStrategy] = &[
    direct_key,
    normalized_key,
    suffix_uppercased_key,
    candidate_keys,
];

/// Resolves the display value of one table cell.
///
/// Total and deterministic: a missing or null cell degrades to
/// [`PLACEHOLDER`], never to an error.
pub fn resolve_cell<'a>(row: &'a ClothingRow, header: &str) -> &'a str {
    for strategy in STRATEGIES {
        for key in strategy(header) {
            if let Some(cell) = row.get(&key) {
                return cell.as_text().unwrap_or(PLACEHOLDER);
            }
        }
    }

    // Last resort: match any row key sharing the header's base word.
    let base = base_word(header).to_lowercase();
    for (key, cell) in row {
        if key.to_lowercase().starts_with(&base) {
            return cell.as_text().unwrap_or(PLACEHOLDER);
        }
    }

    PLACEHOLDER
}

/// Translates a raw header into its localized display label: exact
/// dictionary match first, then case-insensitive, else the header itself.
pub fn translate_header<'a>(header: &'a str, labels: &'a BTreeMap<String, String>) -> &'a str {
    if let Some(label) = labels.get(header) {
        return label;
    }
    let lower = header.to_lowercase();
    for (key, label) in labels {
        if key.to_lowercase() == lower {
            return label;
        }
    }
    header
}

fn direct_key(header: &str) -> Vec<String> {
    vec![header.to_string()]
}

fn normalized_key(header: &str) -> Vec<String> {
    vec![normalize_header(header)]
}

fn suffix_uppercased_key(header: &str) -> Vec<String> {
    vec![uppercase_suffix(&normalize_header(header))]
}

fn candidate_keys(header: &str) -> Vec<String> {
    let normalized = normalize_header(header);
    vec![
        normalized.clone(),
        normalized.to_uppercase(),
        normalized.to_lowercase(),
        uppercase_suffix(&normalized),
        non_alphanumeric_to_underscore(header),
        strip_non_alphanumeric(header),
    ]
}

/// `"Chest (CM) "` -> `Chest_CM`: parenthetical suffixes become `_`-joined
/// segments, whitespace runs collapse to single underscores, a trailing
/// underscore is trimmed.
fn normalize_header(header: &str) -> String {
    let replaced = replace_parentheticals(header);
    let mut normalized = String::with_capacity(replaced.len());
    let mut prev_underscore = false;
    for ch in replaced.chars() {
        let mapped = if ch.is_whitespace() { '_' } else { ch };
        if mapped == '_' {
            if prev_underscore {
                continue;
            }
            prev_underscore = true;
        } else {
            prev_underscore = false;
        }
        normalized.push(mapped);
    }
    if normalized.ends_with('_') {
        normalized.pop();
    }
    normalized
}

/// Rewrites ` (unit)` groups as `_unit`, consuming the surrounding
/// whitespace. An unpaired or empty parenthesis is kept literally.
fn replace_parentheticals(header: &str) -> String {
    let mut out = String::with_capacity(header.len());
    let mut rest = header;
    while let Some(open) = rest.find('(') {
        let (before, after_open) = rest.split_at(open);
        let inner_and_rest = &after_open[1..];
        match inner_and_rest.find(')') {
            Some(close) if close > 0 => {
                out.push_str(before.trim_end());
                out.push('_');
                out.push_str(&inner_and_rest[..close]);
                rest = inner_and_rest[close + 1..].trim_start();
            }
            _ => {
                out.push_str(before);
                out.push('(');
                rest = inner_and_rest;
            }
        }
    }
    out.push_str(rest);
    out
}

/// `Chest_cm` -> `Chest_CM`: upper-cases a trailing all-letter `_suffix`
/// segment, leaving anything else untouched.
fn uppercase_suffix(normalized: &str) -> String {
    if let Some(idx) = normalized.rfind('_') {
        let suffix = &normalized[idx + 1..];
        if !suffix.is_empty() && suffix.chars().all(|ch| ch.is_ascii_alphabetic()) {
            return format!("{}_{}", &normalized[..idx], suffix.to_ascii_uppercase());
        }
    }
    normalized.to_string()
}

fn non_alphanumeric_to_underscore(header: &str) -> String {
    header
        .chars()
        .map(|ch| if ch.is_ascii_alphanumeric() { ch } else { '_' })
        .collect()
}

fn strip_non_alphanumeric(header: &str) -> String {
    header
        .chars()
        .filter(|ch| ch.is_ascii_alphanumeric())
        .collect()
}

/// First whitespace- or parenthesis-delimited word of the header.
fn base_word(header: &str) -> &str {
    header
        .split(|ch: char| ch.is_whitespace() || ch == '(')
        .next()
        .unwrap_or("")
}
