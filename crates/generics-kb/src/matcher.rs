//! Exact-match comparison of a test query list against the knowledge-base
//! query list.

use std::collections::HashSet;
use std::io::{BufRead, Write};

use crate::error::KbError;

/// Trimmed, non-blank lines of `reader`.
pub fn read_queries<R: BufRead>(reader: R) -> Result<Vec<String>, KbError> {
    let mut out = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() {
            out.push(line.to_string());
        }
    }
    Ok(out)
}

/// Writes `Match: ..` or `Not a match: ..` for every test query, comparing
/// case-sensitively against `known`. Returns the number of matches.
pub fn match_queries<R: BufRead, W: Write>(
    known: &[String],
    tests: R,
    mut out: W,
) -> Result<usize, KbError> {
    let known: HashSet<&str> = known.iter().map(String::as_str).collect();
    let mut matches = 0;
    for query in read_queries(tests)? {
        if known.contains(query.as_str()) {
            matches += 1;
            writeln!(out, "Match: {query}")?;
        } else {
            writeln!(out, "Not a match: {query}")?;
        }
    }
    out.flush()?;
    Ok(matches)
}
