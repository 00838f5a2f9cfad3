// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised by the constraint and mapping rules.
///
/// Every variant is terminal for the current run. Nothing in this crate
/// retries on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The giver sequence and the candidate permutation differ in length.
    LengthMismatch {
        /// Number of givers.
        names: usize,
        /// Number of receivers in the candidate.
        permutation: usize,
    },
    /// The same participant name appears more than once.
    DuplicateParticipant(String),
    /// A participant record is missing a required value.
    InvalidParticipant {
        /// The participant's name, as given.
        name: String,
        /// What is wrong with the record.
        reason: String,
    },
    /// The year is not a plausible calendar year.
    InvalidYear(String),
    /// No valid mapping was found within the attempt budget.
    GenerationExhausted {
        /// The attempt budget that was exceeded.
        max_iterations: usize,
    },
}

impl DomainError {
    /// Returns whether this error is caused by malformed input rather than
    /// by an unlucky or infeasible draw.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        !matches!(self, Self::GenerationExhausted { .. })
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LengthMismatch { names, permutation } => {
                write!(
                    f,
                    "Names and permutation must have the same length [{names} != {permutation}]"
                )
            }
            Self::DuplicateParticipant(name) => {
                write!(f, "Participant '{name}' appears more than once")
            }
            Self::InvalidParticipant { name, reason } => {
                write!(f, "Invalid participant '{name}': {reason}")
            }
            Self::InvalidYear(msg) => write!(f, "Invalid year: {msg}"),
            Self::GenerationExhausted { max_iterations } => {
                write!(
                    f,
                    "Failed to generate a mapping after {max_iterations} iterations"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
