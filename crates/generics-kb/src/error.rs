use std::num::ParseFloatError;
use std::path::{Path, PathBuf};
use std::str::Utf8Error;

use avl_index::TreeError;
use thiserror::Error;

/// Why a knowledge-base line could not be turned into a statement.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 3 tab-separated fields, found {0}")]
    FieldCount(usize),
    #[error("line is not valid UTF-8: {0}")]
    Encoding(#[source] Utf8Error),
    #[error("confidence `{value}` is not a number")]
    Confidence {
        value: String,
        #[source]
        source: ParseFloatError,
    },
}

#[derive(Debug, Error)]
pub enum KbError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Stream(#[from] std::io::Error),
    #[error("{}: {source}", location(.path, .line))]
    Malformed {
        path: Option<PathBuf>,
        line: usize,
        #[source]
        source: LineError,
    },
    #[error("invalid config {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(transparent)]
    Tree(#[from] TreeError),
    #[error("cannot render metrics: {0}")]
    Metrics(#[from] serde_json::Error),
}

impl KbError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| KbError::Io { path, source }
    }

    /// Attaches `path` to errors raised while reading an anonymous stream.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            KbError::Stream(source) => KbError::Io {
                path: path.to_path_buf(),
                source,
            },
            KbError::Malformed {
                path: None,
                line,
                source,
            } => KbError::Malformed {
                path: Some(path.to_path_buf()),
                line,
                source,
            },
            other => other,
        }
    }
}

fn location(path: &Option<PathBuf>, line: &usize) -> String {
    match path {
        Some(path) => format!("{}:{line}", path.display()),
        None => format!("line {line}"),
    }
}
