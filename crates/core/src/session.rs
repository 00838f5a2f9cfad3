// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::config::SessionConfig;
use crate::error::CoreError;
use santify_domain::{
    CandidateMapping, ConstraintSet, DEFAULT_MAX_ITERATIONS, GenerationOutcome, MappingGenerator,
    Participant, RunRng, build_constraints,
};
use tracing::{debug, info};

/// Knobs for a single draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    /// Attempt budget for the mapping generator.
    pub max_iterations: usize,
    /// Fixed seed for reproducing an earlier run. `None` draws a fresh seed.
    pub seed: Option<u64>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }
}

/// The result of a successful draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    /// The accepted assignment.
    pub mapping: CandidateMapping,
    /// Permutations drawn before one was accepted.
    pub attempts: usize,
    /// Seed of the run's random stream.
    pub seed: u64,
    /// Number of distinct forbidden pairs the draw honoured.
    pub constraint_count: usize,
}

/// Runs one draw for a validated configuration.
///
/// The random stream is created here, once, and threaded through the
/// generator; its seed is logged and returned so the run can be replayed.
///
/// # Errors
///
/// Returns `CoreError::DomainViolation` if no valid mapping exists within
/// the attempt budget or the participant list is malformed.
pub fn run_session(
    config: &SessionConfig,
    options: &SessionOptions,
) -> Result<SessionOutcome, CoreError> {
    let mut rng: RunRng = options
        .seed
        .map_or_else(RunRng::from_entropy, RunRng::from_seed);
    let seed: u64 = rng.seed();
    info!(seed, "Random seed for this run");

    info!(
        count = config.participants().len(),
        "Participants: {}",
        join_names(config.participants().iter())
    );

    let santas: Vec<&Participant> = config.active_participants();
    info!(
        count = santas.len(),
        "Active participants: {}",
        join_names(santas.iter().copied())
    );

    let constraints: ConstraintSet =
        build_constraints(santas.iter().copied(), config.history(), config.aliases());
    info!(count = constraints.len(), "Built constraints");
    for constraint in constraints.to_sorted_vec() {
        debug!(
            giver = constraint.giver(),
            receiver = constraint.receiver(),
            "Forbidden pair"
        );
    }

    let names: Vec<String> = santas.iter().map(|p| p.name().to_string()).collect();
    let outcome: GenerationOutcome = MappingGenerator::new(&names, &constraints)
        .with_year(Some(config.metadata().year))
        .with_max_iterations(options.max_iterations)
        .run(&mut rng)?;

    Ok(SessionOutcome {
        mapping: outcome.mapping,
        attempts: outcome.attempts,
        seed,
        constraint_count: constraints.len(),
    })
}

fn join_names<'a>(participants: impl Iterator<Item = &'a Participant>) -> String {
    participants
        .map(Participant::name)
        .collect::<Vec<&str>>()
        .join(", ")
}
