//! Recoverable errors.
//!
//! Only failures the user can cause and the caller is expected to report live
//! here: a bad search pattern, a file that cannot be read or written, a `:set`
//! that names an unknown option. Out-of-range indices are contract violations
//! and panic instead. Every operation that returns one of these leaves the
//! document exactly as it was.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the editing core.
#[derive(Debug, Error)]
pub enum Error {
    /// The search pattern is not a valid regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Save was requested on a document with no associated file.
    #[error("no file name")]
    NoFileName,

    /// The file exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing the file failed. Nothing on disk was replaced.
    #[error("could not save {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `:set` named an option that does not exist.
    #[error("unknown option: {0}")]
    UnknownOption(String),

    /// `:set` gave an option a value it cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue { name: String, value: String },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
