//! Error types for the rat-graph library.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can occur in the rat-graph library.
#[derive(Error, Debug)]
pub enum RatError {
    /// The dataset could not be opened. Ingestion cannot continue.
    #[error("Data source {path:?} could not be opened: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A traversal was started from a vertex that is not in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(String),

    /// Malformed line in a TGF file or title table.
    #[error("Parse error on line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for rat-graph operations.
pub type RatResult<T> = Result<T, RatError>;
