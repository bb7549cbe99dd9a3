use std::path::PathBuf;
use thiserror::Error;

/// Result type for parse operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while reading a config source
///
/// Reading is the only thing that can fail: malformed section structure is
/// handled by best-effort classification, and lookup misses are plain
/// `None`/empty results.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The config file could not be opened
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The line source failed mid-stream; no partial document is returned
    #[error("read error at line {line}: {source}")]
    Read { line: usize, source: std::io::Error },
}
