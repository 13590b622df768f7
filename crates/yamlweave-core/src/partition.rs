//! Splitting strings on embedded placeholder tokens.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::placeholder::RESERVED_PREFIX;

/// Matches a whole word that has the placeholder shape: the reserved prefix
/// followed by decimal digits.
static TOKEN_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{}[0-9]+$", regex::escape(RESERVED_PREFIX)))
        .expect("placeholder shape pattern is valid")
});

/// One partition of a string: literal text, or a placeholder-shaped token.
///
/// Shape recognition only: whether a `Token` actually corresponds to a live
/// descriptor is the reconstructor's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Partition<'a> {
    Literal(&'a str),
    Token(&'a str),
}

impl<'a> Partition<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Partition::Literal(text) | Partition::Token(text) => text,
        }
    }
}

/// Split a string into literal partitions and placeholder-shaped tokens.
///
/// A token is a maximal non-whitespace run matching the placeholder shape,
/// bounded by whitespace or the string edges; the bounding requirement means
/// a token glued to other characters stays literal text. Everything between
/// tokens, separating whitespace included, accumulates into a single
/// `Literal` partition. Concatenating all partitions in order reproduces the
/// input exactly.
pub fn split_placeholders(s: &str) -> Vec<Partition<'_>> {
    let mut partitions = Vec::new();
    let mut literal_start = 0;

    for (start, word) in words(s) {
        if TOKEN_SHAPE.is_match(word) {
            if literal_start < start {
                partitions.push(Partition::Literal(&s[literal_start..start]));
            }
            partitions.push(Partition::Token(word));
            literal_start = start + word.len();
        }
    }

    if literal_start < s.len() || partitions.is_empty() {
        partitions.push(Partition::Literal(&s[literal_start..]));
    }
    partitions
}

/// Maximal non-whitespace runs of `s`, with their byte offsets.
fn words(s: &str) -> Vec<(usize, &str)> {
    let mut out = Vec::new();
    let mut start = None;

    for (idx, ch) in s.char_indices() {
        if ch.is_whitespace() {
            if let Some(begin) = start.take() {
                out.push((begin, &s[begin..idx]));
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }
    if let Some(begin) = start {
        out.push((begin, &s[begin..]));
    }
    out
}
