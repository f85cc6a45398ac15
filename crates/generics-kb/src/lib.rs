//! GenericsKB term index.
//!
//! Loads `term\tsentence\tconfidence` records into an
//! [`avl_index::AvlTree`] keyed by term and answers term queries against it.
//!
//! - [`loader`]: knowledge-base parsing and bulk insertion
//! - [`query`]: query answering and metrics rendering
//! - [`matcher`]: exact comparison of two query lists
//! - [`config`]: TOML settings and command-line flags
//! - [`app`]: the end-to-end run used by `generics-kb-avl`

pub mod app;
pub mod config;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod query;
pub mod statement;

pub use app::{run, RunSummary};
pub use config::{AppArgs, KbConfig, MatchArgs, MetricsFormat};
pub use error::{KbError, LineError};
pub use loader::{load_file, load_statements, parse_line, LoadReport};
pub use matcher::{match_queries, read_queries};
pub use query::{answer_queries, render_metrics, QueryReport};
pub use statement::Statement;

/// Installs the stderr `tracing` subscriber used by the binaries.
///
/// `RUST_LOG` overrides the default `info` level.
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
