//! Error and result types.

use std::io;

use thiserror::Error;

/// `Result` type alias for operations that can fail.
pub type Result<T> = ::std::result::Result<T, Error>;

/// Errors in reading word lists or selecting embeddings.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid file format.
    #[error("{0}")]
    Format(String),

    /// I/O error.
    #[error("{desc}: {error}")]
    Io {
        desc: String,
        #[source]
        error: io::Error,
    },
}

impl Error {
    pub fn io_error(desc: impl Into<String>, error: io::Error) -> Self {
        Error::Io {
            desc: desc.into(),
            error,
        }
    }
}
