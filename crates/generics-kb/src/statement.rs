use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use avl_index::Keyed;
use serde::{Deserialize, Serialize};

/// One knowledge-base entry: a term, a sentence about it and a confidence
/// score.
///
/// Equality and ordering look at `term` only (case-sensitive), so two
/// statements about the same term compare equal whatever they say.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Statement {
    pub term: String,
    pub sentence: String,
    pub confidence: f64,
}

impl Statement {
    pub fn new(term: impl Into<String>, sentence: impl Into<String>, confidence: f64) -> Self {
        Self {
            term: term.into(),
            sentence: sentence.into(),
            confidence,
        }
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.term == other.term
    }
}

impl Eq for Statement {}

impl PartialOrd for Statement {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Statement {
    fn cmp(&self, other: &Self) -> Ordering {
        self.term.cmp(&other.term)
    }
}

impl Keyed for Statement {
    fn key(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.term)
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\t{}\t{}", self.term, self.sentence, self.confidence)
    }
}
