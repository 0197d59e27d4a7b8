use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FsError {
    /// Malformed input to a path helper (currently: the empty path).
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: &'static str },

    #[error("no such file or directory: {path}")]
    NotFound { path: String },

    #[error("not a directory: {path}")]
    NotADirectory { path: String },

    /// The reader classified an entry as none, or more than one, of
    /// file/directory/symlink.
    #[error("unrecognized entry kind at {path}")]
    UnknownEntryKind { path: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Map an OS error onto the taxonomy, keeping unrecognized kinds as `Io`.
    pub fn from_io(path: impl Into<String>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => FsError::NotFound { path },
            io::ErrorKind::NotADirectory => FsError::NotADirectory { path },
            _ => FsError::Io { path, source: err },
        }
    }

    pub(crate) fn empty_path() -> Self {
        FsError::InvalidArgument {
            reason: "path must not be empty",
        }
    }
}

pub type Result<T> = std::result::Result<T, FsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
