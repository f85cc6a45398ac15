//! Application settings: defaults, optional TOML file, command-line flags.
//!
//! Precedence, lowest first: built-in defaults, `--config` file, flags.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::error::KbError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MetricsFormat {
    #[default]
    Text,
    Json,
}

/// Resolved settings for `generics-kb-avl`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KbConfig {
    pub kb_path: PathBuf,
    pub queries_path: PathBuf,
    pub output_path: PathBuf,
    pub metrics: MetricsFormat,
    /// Fail on the first malformed knowledge-base line instead of skipping.
    pub strict: bool,
}

impl Default for KbConfig {
    fn default() -> Self {
        Self {
            kb_path: PathBuf::from("GenericsKB.txt"),
            queries_path: PathBuf::from("GenericsKB-queries.txt"),
            output_path: PathBuf::from("output.txt"),
            metrics: MetricsFormat::Text,
            strict: false,
        }
    }
}

impl KbConfig {
    pub fn load(path: &Path) -> Result<Self, KbError> {
        let text = fs::read_to_string(path).map_err(KbError::io(path))?;
        toml::from_str(&text).map_err(|source| KbError::Config {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "generics-kb-avl",
    about = "Load a GenericsKB file into an AVL tree and answer term queries"
)]
pub struct AppArgs {
    /// TOML file with default settings
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Knowledge base (term<TAB>sentence<TAB>confidence per line)
    #[arg(long)]
    pub kb: Option<PathBuf>,
    /// Queries, one term per line
    #[arg(long)]
    pub queries: Option<PathBuf>,
    /// Where query results are written
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Format of the metrics printed to stdout
    #[arg(long, value_enum)]
    pub metrics: Option<MetricsFormat>,
    /// Abort on the first malformed knowledge-base line
    #[arg(long, overrides_with = "no_strict")]
    pub strict: bool,
    /// Skip malformed lines even if the config file sets `strict`
    #[arg(long, overrides_with = "strict")]
    pub no_strict: bool,
}

impl AppArgs {
    pub fn resolve(&self) -> Result<KbConfig, KbError> {
        let mut config = match &self.config {
            Some(path) => KbConfig::load(path)?,
            None => KbConfig::default(),
        };
        if let Some(kb) = &self.kb {
            config.kb_path = kb.clone();
        }
        if let Some(queries) = &self.queries {
            config.queries_path = queries.clone();
        }
        if let Some(output) = &self.output {
            config.output_path = output.clone();
        }
        if let Some(metrics) = self.metrics {
            config.metrics = metrics;
        }
        if self.strict {
            config.strict = true;
        } else if self.no_strict {
            config.strict = false;
        }
        Ok(config)
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "kb-query-match",
    about = "Report which test queries appear in the knowledge-base query list"
)]
pub struct MatchArgs {
    /// Test queries, one per line
    #[arg(long, default_value = "TestQueries.txt")]
    pub test: PathBuf,
    /// Reference query list
    #[arg(long, default_value = "GenericsKB-queries.txt")]
    pub kb_queries: PathBuf,
}
