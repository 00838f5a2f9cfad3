// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod constraints;
mod error;
mod generator;
mod permutation;
mod types;
mod validation;
mod validity;

#[cfg(test)]
mod tests;

pub use constraints::{
    active_participants, build_constraints, build_history_constraints, build_partner_constraints,
};
pub use error::DomainError;
pub use generator::{
    DEFAULT_MAX_ITERATIONS, GenerationOutcome, GeneratorState, MappingGenerator, generate_mapping,
};
pub use permutation::{RunRng, sample_permutation};
pub use validity::is_valid_mapping;

// Re-export public types
pub use types::{
    AliasTable, AliasTarget, CandidateMapping, Constraint, ConstraintSet, HistoricalMapping,
    Participant,
};
pub use validation::{validate_participant, validate_unique_names, validate_year};
