//! Error types for the boot image inventory library
//!
//! Errors fall into two categories: I/O errors carrying the path they
//! occurred on, and validation errors raised before any traversal starts
//! (bad glob patterns, unusable configuration).

use thiserror::Error;

pub mod io;
pub mod validation;

pub use self::io::{IoError, IoErrorKind};
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the boot image inventory library
///
/// The discovery engine itself never fails on filesystem conditions; it
/// skips what it cannot read. The errors that do surface are pattern and
/// configuration problems, plus I/O failures from explicit single-file
/// operations such as [`crate::checksum::checksum_file`].
#[derive(Error, Debug)]
pub enum Error {
    /// I/O related errors
    #[error(transparent)]
    Io(#[from] IoError),

    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::Io(IoError::from_std(source))
    }
}
