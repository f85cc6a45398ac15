use std::fs::File;
use std::io::{BufReader, BufWriter};

use avl_index::{AvlTree, Metrics};
use tracing::info;

use crate::config::KbConfig;
use crate::error::KbError;
use crate::loader::{load_file, LoadReport};
use crate::query::{answer_queries, QueryReport};
use crate::statement::Statement;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub load: LoadReport,
    pub queries: QueryReport,
    pub metrics: Metrics,
}

/// Loads the knowledge base, answers the query file into the output file and
/// returns the tree's final metrics.
pub fn run(config: &KbConfig) -> Result<RunSummary, KbError> {
    let mut tree: AvlTree<Statement> = AvlTree::new();
    let load = load_file(&config.kb_path, &mut tree, config.strict)?;

    let queries = File::open(&config.queries_path).map_err(KbError::io(&config.queries_path))?;
    let output = File::create(&config.output_path).map_err(KbError::io(&config.output_path))?;
    let queries = answer_queries(
        &mut tree,
        BufReader::new(queries),
        BufWriter::new(output),
    )?;
    info!(
        found = queries.found,
        missing = queries.missing,
        output = %config.output_path.display(),
        "queries answered"
    );

    Ok(RunSummary {
        load,
        queries,
        metrics: tree.metrics(),
    })
}
