// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while writing, reading or decrypting mapping files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The output directory does not exist.
    OutputDirectoryMissing(String),
    /// Reading or writing a file failed.
    Io {
        /// The file involved.
        path: String,
        /// The underlying I/O error message.
        reason: String,
    },
    /// Serialization/deserialization error.
    SerializationError(String),
    /// The stored key is not a valid encoded key.
    InvalidKey(String),
    /// Encrypting a receiver name failed.
    EncryptionFailed,
    /// A stored token could not be decrypted with the stored key.
    DecryptionFailed(String),
    /// A giver name would collide with a metadata key.
    ReservedName(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutputDirectoryMissing(path) => {
                write!(f, "Output directory does not exist: {path}")
            }
            Self::Io { path, reason } => write!(f, "I/O error on '{path}': {reason}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
            Self::InvalidKey(msg) => write!(f, "Invalid key: {msg}"),
            Self::EncryptionFailed => write!(f, "Encryption failed"),
            Self::DecryptionFailed(msg) => write!(f, "Decryption failed: {msg}"),
            Self::ReservedName(name) => {
                write!(f, "Giver name '{name}' is reserved for record metadata")
            }
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}
