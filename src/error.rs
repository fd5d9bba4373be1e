use std::{io, path::PathBuf};

use thiserror::Error;

/// Filesystem failure that aborts a rewrite run.
///
/// Every variant keeps the underlying [`io::Error`] as its source so callers
/// can inspect the [`io::ErrorKind`].
#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("cannot locate current executable: {source}")]
    CurrentExe {
        #[source]
        source: io::Error,
    },

    #[error("cannot list {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read entry {}: {source}", .path.display())]
    DirEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("read failed for {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("write failed for {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write progress output: {source}")]
    Output {
        #[source]
        source: io::Error,
    },
}

impl RewriteError {
    /// Kind of the underlying I/O error.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::CurrentExe { source }
            | Self::ReadDir { source, .. }
            | Self::DirEntry { source, .. }
            | Self::ReadFile { source, .. }
            | Self::WriteFile { source, .. }
            | Self::Output { source } => source.kind(),
        }
    }
}
