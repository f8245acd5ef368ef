use std::io;
use std::path::PathBuf;

/// Hard failures of a whole run.
///
/// Per-archive failures never surface here; they are captured as
/// [`ArchiveRecord`](crate::ArchiveRecord) entries in the result set.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("input archive not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("no extractor matches input: {}", path.display())]
    UnsupportedInput { path: PathBuf },

    #[error("failed to walk extracted tree at '{}': {source}", path.display())]
    TreeWalk {
        path: PathBuf,
        source: walkdir::Error,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
