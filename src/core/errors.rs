//! Error types shared by the stripper and the tree walker.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while stripping a BOM from a file.
///
/// `UnsupportedEncoding` is a configuration error and is the same for every
/// file in a batch; `Io` is specific to one path. CLI validation keeps the
/// former from ever reaching the processing stage, but the type distinguishes
/// them so callers can tell a bad run apart from a bad file.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported encoding: {0}")]
    UnsupportedEncoding(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
