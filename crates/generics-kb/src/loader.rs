//! Bulk loading of `term\tsentence\tconfidence` files.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use avl_index::AvlTree;
use tracing::{info, warn};

use crate::error::{KbError, LineError};
use crate::statement::Statement;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub loaded: usize,
    pub skipped: usize,
}

/// Parses one knowledge-base line. Blank lines yield `Ok(None)`.
///
/// The line and each field are trimmed; exactly three tab-separated fields
/// are required.
///
/// Confidence goes through `f64::from_str`, which is not Java's
/// `Double.parseDouble`: type suffixes such as `1.0d` or `0.5f` are
/// rejected, while `inf`, `infinity` and `nan` are accepted in any letter
/// case. Hexadecimal floats (`0x1p-2`) are rejected.
pub fn parse_line(line: &str) -> Result<Option<Statement>, LineError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = line.split('\t').collect();
    let [term, sentence, confidence] = &parts[..] else {
        return Err(LineError::FieldCount(parts.len()));
    };

    let confidence = confidence.trim();
    let confidence = confidence
        .parse::<f64>()
        .map_err(|source| LineError::Confidence {
            value: confidence.to_string(),
            source,
        })?;

    Ok(Some(Statement::new(term.trim(), sentence.trim(), confidence)))
}

/// Inserts every well-formed line of `reader` into `tree`.
///
/// Lines are split on `\n` and decoded as UTF-8 one at a time. Malformed
/// lines, undecodable ones included, are skipped with a warning, or abort the
/// load with their 1-based line number when `strict` is set.
pub fn load_statements<R: BufRead>(
    mut reader: R,
    tree: &mut AvlTree<Statement>,
    strict: bool,
) -> Result<LoadReport, KbError> {
    let mut report = LoadReport::default();
    let mut buf = Vec::new();
    for idx in 0.. {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let parsed = std::str::from_utf8(&buf)
            .map_err(LineError::Encoding)
            .and_then(parse_line);
        match parsed {
            Ok(Some(statement)) => {
                tree.insert(statement)?;
                report.loaded += 1;
            }
            Ok(None) => {}
            Err(source) if strict => {
                return Err(KbError::Malformed {
                    path: None,
                    line: idx + 1,
                    source,
                })
            }
            Err(err) => {
                warn!(line = idx + 1, %err, "skipping malformed knowledge-base line");
                report.skipped += 1;
            }
        }
    }
    Ok(report)
}

pub fn load_file(
    path: &Path,
    tree: &mut AvlTree<Statement>,
    strict: bool,
) -> Result<LoadReport, KbError> {
    let file = File::open(path).map_err(KbError::io(path))?;
    let report =
        load_statements(BufReader::new(file), tree, strict).map_err(|err| err.in_file(path))?;
    info!(
        path = %path.display(),
        loaded = report.loaded,
        skipped = report.skipped,
        height = tree.height(),
        "knowledge base loaded"
    );
    Ok(report)
}
