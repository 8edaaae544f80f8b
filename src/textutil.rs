//! Small library of text-pattern operations shared by the scoring and
//! optimization engines.
//!
//! All keyword matching in the engines is ASCII case-insensitive
//! substring containment, so the helpers here work on byte windows with
//! `eq_ignore_ascii_case` rather than allocating lowercased copies.
//! Sentence segmentation follows the engines' convention: a sentence
//! terminator is any run of `.`, `!`, or `?`.

use regex::Regex;
use std::sync::OnceLock;

static TERMINATOR: OnceLock<Regex> = OnceLock::new();

fn terminator() -> &'static Regex {
    TERMINATOR.get_or_init(|| Regex::new(r"[.!?]+").expect("valid regex"))
}

/// Byte offset of the first case-insensitive occurrence of `needle`.
///
/// `needle` must be non-empty ASCII; every keyword and phrase the engines
/// match satisfies that. A window starting mid-way through a multi-byte
/// character can never match an ASCII needle, so the returned offset is
/// always a char boundary.
pub fn find_ci(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|w| w.eq_ignore_ascii_case(needle))
}

/// Case-insensitive substring containment.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    find_ci(haystack, needle).is_some()
}

/// Whether any of `needles` occurs in `haystack`, case-insensitively.
pub fn contains_any_ci(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| contains_ci(haystack, n))
}

/// How many of `needles` occur at least once in `haystack`.
pub fn count_present_ci(haystack: &str, needles: &[&str]) -> usize {
    needles.iter().filter(|n| contains_ci(haystack, n)).count()
}

/// Non-overlapping case-insensitive occurrences of `needle`.
pub fn count_occurrences_ci(haystack: &str, needle: &str) -> usize {
    let mut count = 0;
    let mut rest = haystack;
    while let Some(pos) = find_ci(rest, needle) {
        count += 1;
        rest = &rest[pos + needle.len()..];
    }
    count
}

/// Replace the first case-insensitive occurrence of `from` with `to`.
///
/// Returns `None` when `from` does not occur.
pub fn replace_first_ci(text: &str, from: &str, to: &str) -> Option<String> {
    let pos = find_ci(text, from)?;
    let mut out = String::with_capacity(text.len() + to.len());
    out.push_str(&text[..pos]);
    out.push_str(to);
    out.push_str(&text[pos + from.len()..]);
    Some(out)
}

/// Whitespace-delimited word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Sentences split on terminal punctuation, trimmed, empties dropped.
pub fn split_sentences(text: &str) -> Vec<&str> {
    terminator()
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Mean words per sentence; a sentence count of zero is treated as one
/// so that empty input degrades to 0.0 instead of dividing by zero.
pub fn mean_words_per_sentence(text: &str) -> f64 {
    let sentences = split_sentences(text);
    let words: usize = sentences.iter().map(|s| word_count(s)).sum();
    words as f64 / sentences.len().max(1) as f64
}

/// One sentence plus the punctuation run that terminated it.
///
/// Concatenating `body` and `terminator` over all segments reproduces the
/// input exactly, which lets rewrites edit a single sentence without
/// disturbing the surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment<'a> {
    pub body: &'a str,
    pub terminator: &'a str,
}

/// Split text into sentence segments, preserving terminators and spacing.
pub fn sentence_segments(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    for m in terminator().find_iter(text) {
        segments.push(Segment {
            body: &text[start..m.start()],
            terminator: m.as_str(),
        });
        start = m.end();
    }
    if start < text.len() {
        segments.push(Segment {
            body: &text[start..],
            terminator: "",
        });
    }
    segments
}
