//! Rule-based segmentation: sentence split plus short-segment merging.
//!
//! Splits on whitespace following `.`, `!` or `?`, then greedily merges
//! neighbours that are too short to stand alone as an image. Deterministic
//! and infallible; this is the terminal strategy in the chain.
use async_trait::async_trait;

use crate::error::AppResult;
use crate::segmenter::SegmentStrategy;

/// A buffer below this many characters keeps absorbing the next sentence.
const MIN_BUFFER_CHARS: usize = 50;
/// A sentence below this many characters is merged into the buffer regardless.
const MIN_UNIT_CHARS: usize = 40;

pub struct HeuristicSegmenter;

#[async_trait]
impl SegmentStrategy for HeuristicSegmenter {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    async fn try_segment(&self, text: &str) -> AppResult<Vec<String>> {
        Ok(segment(text))
    }
}

/// Split, merge, and apply the minimum-count rule. Empty input yields an
/// empty list.
///
/// Known quirk, kept deliberately: when merging collapses the text below 3
/// segments but at least 3 raw sentences existed, the last 3 raw sentences
/// are returned verbatim, dropping earlier content.
pub fn segment(text: &str) -> Vec<String> {
    let raw = split_sentences(text);
    let merged = merge_units(&raw);
    if merged.len() < 3 && raw.len() >= 3 {
        return raw[raw.len() - 3..].to_vec();
    }
    merged
}

/// Split into sentence-like units at `.`/`!`/`?` followed by whitespace.
/// The trailing unit is kept even without closing punctuation.
pub fn split_sentences(text: &str) -> Vec<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut units = Vec::new();
    let mut current = String::new();
    let mut chars = trimmed.chars().peekable();
    while let Some(c) = chars.next() {
        current.push(c);
        if matches!(c, '.' | '!' | '?')
            && chars.peek().map(|n| n.is_whitespace()).unwrap_or(false)
        {
            while chars.peek().map(|n| n.is_whitespace()).unwrap_or(false) {
                chars.next();
            }
            let unit = current.trim();
            if !unit.is_empty() {
                units.push(unit.to_string());
            }
            current.clear();
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        units.push(tail.to_string());
    }
    units
}

/// Greedily merge adjacent units whenever either side is too short: the
/// buffer keeps growing while it is under `MIN_BUFFER_CHARS` or the next
/// unit is under `MIN_UNIT_CHARS`.
pub fn merge_units(raw: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::new();
    let mut current = String::new();

    for unit in raw {
        if current.is_empty() {
            current = unit.clone();
        } else if current.chars().count() < MIN_BUFFER_CHARS
            || unit.chars().count() < MIN_UNIT_CHARS
        {
            current.push(' ');
            current.push_str(unit);
        } else {
            merged.push(std::mem::replace(&mut current, unit.clone()));
        }
    }
    if !current.is_empty() {
        merged.push(current);
    }
    merged
}
