//! Error types for snapshot persistence.

/// Errors that can occur while saving or loading a ledger snapshot.
///
/// Snapshots are financial state, so every failure mode is hard: a corrupt
/// or version-mismatched file is an error, never silently replaced with an
/// empty ledger.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    /// Filesystem I/O failed.
    #[error("Snapshot I/O failed at {path}")]
    Io {
        /// The path involved in the failed operation
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The snapshot could not be serialized or parsed.
    #[error("Snapshot serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The file was written by an incompatible snapshot format version.
    #[error("Snapshot version mismatch: found {found}, expected {expected}")]
    VersionMismatch {
        /// Version recorded in the file
        found: u32,
        /// Version this build understands
        expected: u32,
    },
}

impl SnapshotError {
    /// Create an `Io` error with the path that failed.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        SnapshotError::Io {
            path: path.into(),
            source,
        }
    }
}
