//! # Error Types
//!
//! This module defines the error type used throughout the library.
//! All operations return [`Result<T, CryptError>`](CryptError); callers branch on
//! the variant, never on the message text.

use std::path::PathBuf;
use thiserror::Error;

/// The error type for all container operations.
///
/// Every error is fatal to the encrypt/decrypt call that produced it. Output
/// already written before the failure is not retracted and must be treated as
/// invalid by the caller.
#[derive(Error, Debug)]
pub enum CryptError {
    /// I/O error while reading or writing one of the streams.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// I/O error on a named file (open, create, read, write or flush).
    #[error("I/O error on {}: {source}", path.display())]
    File {
        /// The offending path.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The input is not a container, or is truncated/malformed.
    ///
    /// Covers:
    /// - Magic tag mismatch
    /// - Truncated header (magic or nonce)
    /// - A block too short to hold its 16-byte tag
    /// - A block longer than the format allows
    #[error("Format error: {0}")]
    Format(String),

    /// A block's tag did not verify: the data was tampered with, or the key
    /// (password/salt) is wrong.
    #[error("Authentication failed: wrong password or corrupted data")]
    Authentication,

    /// scrypt rejected its parameters or output length.
    #[error("Key derivation error: {0}")]
    KeyDerivation(String),
}

impl CryptError {
    /// Attaches `path` to a bare I/O error; other variants pass through unchanged.
    pub(crate) fn with_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            CryptError::Io(source) => CryptError::File {
                path: path.into(),
                source,
            },
            other => other,
        }
    }
}
