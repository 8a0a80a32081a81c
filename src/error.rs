//! Error types for `c4stream`.
//!
//! Every failure is a defect in the input or the configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for `c4stream` operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading graphs or running estimators.
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid estimator parameters (edge budget, ensemble size).
    #[error("invalid configuration: {0}")]
    Config(String),

    /// The edge source could not be opened.
    #[error("could not open {}: {source}", path.display())]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Reading from an already opened source failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The edge source is malformed (bad header, edge count mismatch).
    #[error("malformed graph input: {0}")]
    Format(String),

    /// An edge endpoint lies outside the declared node range.
    #[error("node {node} out of range for graph with {node_count} nodes")]
    NodeOutOfRange {
        /// Offending endpoint.
        node: i64,
        /// Declared number of nodes.
        node_count: usize,
    },
}

impl Error {
    /// Builds a [`Error::Config`] from anything displayable.
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Builds a [`Error::Format`] from anything displayable.
    pub(crate) fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }
}
