//! Term lookups driven by a query stream.

use std::io::{BufRead, Write};

use avl_index::{AvlTree, Metrics};
use tracing::debug;

use crate::config::MetricsFormat;
use crate::error::KbError;
use crate::statement::Statement;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct QueryReport {
    pub found: usize,
    pub missing: usize,
}

/// Looks up every non-blank (trimmed) line of `queries` and writes one
/// `Term found: ..` / `Term not found: ..` line per query to `out`.
pub fn answer_queries<R: BufRead, W: Write>(
    tree: &mut AvlTree<Statement>,
    queries: R,
    mut out: W,
) -> Result<QueryReport, KbError> {
    let mut report = QueryReport::default();
    for line in queries.lines() {
        let line = line?;
        let query = line.trim();
        if query.is_empty() {
            continue;
        }

        if tree.contains(query) {
            report.found += 1;
            writeln!(out, "Term found: {query}")?;
        } else {
            report.missing += 1;
            writeln!(out, "Term not found: {query}")?;
        }
        debug!(
            query,
            comparisons = tree.metrics().search_comparisons,
            "answered query"
        );
    }
    out.flush()?;
    Ok(report)
}

pub fn render_metrics(metrics: &Metrics, format: MetricsFormat) -> Result<String, KbError> {
    Ok(match format {
        MetricsFormat::Text => metrics.to_string(),
        MetricsFormat::Json => serde_json::to_string_pretty(metrics)?,
    })
}
