// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rejection-sampling mapping generator.
//!
//! ## States
//!
//! ```text
//! Init ──► Checking ──valid──► Success
//!             ▲  │
//!             │  └─invalid, attempts > max──► Exhausted
//!             │  │
//!             │  invalid, attempts <= max
//!             │  ▼
//!           Sampling
//! ```
//!
//! - `Init` sets the candidate to the identity ordering, so the first check
//!   fails on self-assignment for any non-empty group and at least one
//!   sample is always drawn.
//! - `Sampling` draws a fresh permutation and counts the attempt.
//! - `Checking` runs the validity check on the current candidate.
//!
//! ## Invariants
//!
//! - The random stream is never reseeded inside the loop
//! - At most `max_iterations + 1` permutations are drawn
//! - Infeasible constraint sets are only detected by exhaustion

use crate::error::DomainError;
use crate::permutation::{RunRng, sample_permutation};
use crate::types::{CandidateMapping, ConstraintSet};
use crate::validity::is_valid_mapping;
use std::collections::{BTreeMap, HashSet};
use tracing::{error, info};

/// Attempt budget used when the caller does not choose one.
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Where the generator is in its sample/check loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorState {
    /// Candidate set to the identity ordering.
    Init,
    /// Drawing a new candidate.
    Sampling,
    /// Validating the current candidate.
    Checking,
    /// The current candidate is a valid mapping.
    Success,
    /// The attempt budget ran out.
    Exhausted,
}

impl GeneratorState {
    /// Returns whether the loop stops in this state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Success | Self::Exhausted)
    }
}

/// A successful generation and how much work it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationOutcome {
    /// The accepted mapping.
    pub mapping: CandidateMapping,
    /// Number of permutations drawn before one was accepted.
    pub attempts: usize,
}

/// Generates a mapping for a fixed set of givers and constraints.
#[derive(Debug)]
pub struct MappingGenerator<'a> {
    names: &'a [String],
    constraints: &'a ConstraintSet,
    year: Option<u16>,
    max_iterations: usize,
}

impl<'a> MappingGenerator<'a> {
    /// Creates a generator with the default attempt budget and no year tag.
    #[must_use]
    pub const fn new(names: &'a [String], constraints: &'a ConstraintSet) -> Self {
        Self {
            names,
            constraints,
            year: None,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Tags the produced mapping with `year`.
    #[must_use]
    pub const fn with_year(mut self, year: Option<u16>) -> Self {
        self.year = year;
        self
    }

    /// Sets the attempt budget.
    #[must_use]
    pub const fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Runs the sample/check loop to a terminal state.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A participant name appears more than once
    /// - A candidate has a different length than the giver list
    /// - No valid mapping was found within the attempt budget
    pub fn run(&self, rng: &mut RunRng) -> Result<GenerationOutcome, DomainError> {
        self.ensure_unique_names()?;

        let mut permutation: Vec<String> = Vec::new();
        let mut attempts: usize = 0;
        let mut state: GeneratorState = GeneratorState::Init;

        while !state.is_terminal() {
            state = match state {
                GeneratorState::Init => {
                    permutation = self.names.to_vec();
                    GeneratorState::Checking
                }
                GeneratorState::Sampling => {
                    permutation = sample_permutation(self.names, rng);
                    attempts += 1;
                    GeneratorState::Checking
                }
                GeneratorState::Checking => {
                    if is_valid_mapping(self.names, &permutation, self.constraints)? {
                        GeneratorState::Success
                    } else if attempts > self.max_iterations {
                        GeneratorState::Exhausted
                    } else {
                        GeneratorState::Sampling
                    }
                }
                GeneratorState::Success | GeneratorState::Exhausted => state,
            };
        }

        if state == GeneratorState::Exhausted {
            let err: DomainError = DomainError::GenerationExhausted {
                max_iterations: self.max_iterations,
            };
            error!(max_iterations = self.max_iterations, "{err}");
            return Err(err);
        }

        info!(attempts, "Valid mapping generated after {attempts} attempts");

        let mapping: BTreeMap<String, String> =
            self.names.iter().cloned().zip(permutation).collect();

        Ok(GenerationOutcome {
            mapping: CandidateMapping::new(self.year, mapping),
            attempts,
        })
    }

    fn ensure_unique_names(&self) -> Result<(), DomainError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(self.names.len());
        for name in self.names {
            if !seen.insert(name.as_str()) {
                return Err(DomainError::DuplicateParticipant(name.clone()));
            }
        }
        Ok(())
    }
}

/// Generates a mapping of givers to receivers.
///
/// # Arguments
///
/// * `names` - Active participant names, duplicate-free
/// * `constraints` - Forbidden (giver, receiver) pairs
/// * `year` - Year tag for the produced mapping
/// * `max_iterations` - Attempt budget, usually `DEFAULT_MAX_ITERATIONS`
/// * `rng` - The run's random stream
///
/// # Errors
///
/// Returns `DomainError::GenerationExhausted` if no valid mapping was found
/// within the budget, and a configuration error for duplicate names.
pub fn generate_mapping(
    names: &[String],
    constraints: &ConstraintSet,
    year: Option<u16>,
    max_iterations: usize,
    rng: &mut RunRng,
) -> Result<CandidateMapping, DomainError> {
    MappingGenerator::new(names, constraints)
        .with_year(year)
        .with_max_iterations(max_iterations)
        .run(rng)
        .map(|outcome| outcome.mapping)
}
