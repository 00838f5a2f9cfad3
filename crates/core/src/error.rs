// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use santify_domain::DomainError;

/// Errors that can occur while loading configuration or running a draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The configuration file could not be read.
    ConfigRead {
        /// The path that was read.
        path: String,
        /// The underlying I/O error message.
        reason: String,
    },
    /// The configuration is malformed or missing a required value.
    Configuration(String),
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl CoreError {
    /// Returns whether the failure is caused by bad input rather than by
    /// an exhausted attempt budget.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        match self {
            Self::ConfigRead { .. } | Self::Configuration(_) => true,
            Self::DomainViolation(err) => err.is_configuration_error(),
        }
    }
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ConfigRead { path, reason } => {
                write!(f, "Failed to read configuration '{path}': {reason}")
            }
            Self::Configuration(msg) => write!(f, "Configuration error: {msg}"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
