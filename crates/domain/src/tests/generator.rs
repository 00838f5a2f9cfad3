// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::names;
use crate::{
    CandidateMapping, Constraint, ConstraintSet, DEFAULT_MAX_ITERATIONS, DomainError,
    GenerationOutcome, GeneratorState, MappingGenerator, RunRng, generate_mapping,
    sample_permutation,
};
use std::collections::BTreeSet;

fn assert_derangement(givers: &[String], mapping: &CandidateMapping) {
    assert_eq!(mapping.len(), givers.len());
    for giver in givers {
        let receiver: &str = mapping.receiver_of(giver).unwrap();
        assert_ne!(receiver, giver.as_str());
    }
    let receivers: BTreeSet<&str> = mapping.pairs().map(|(_, r)| r).collect();
    let expected: BTreeSet<&str> = givers.iter().map(String::as_str).collect();
    assert_eq!(receivers, expected);
}

#[test]
fn test_three_people_without_constraints_get_a_derangement() {
    let givers: Vec<String> = names(&["A", "B", "C"]);

    for seed in 0..50 {
        let mut rng: RunRng = RunRng::from_seed(seed);
        let mapping: CandidateMapping = generate_mapping(
            &givers,
            &ConstraintSet::new(),
            Some(2025),
            DEFAULT_MAX_ITERATIONS,
            &mut rng,
        )
        .unwrap();

        assert_ne!(mapping.receiver_of("A"), Some("A"));
        assert_ne!(mapping.receiver_of("B"), Some("B"));
        assert_ne!(mapping.receiver_of("C"), Some("C"));
        assert_derangement(&givers, &mapping);
        assert_eq!(mapping.year(), Some(2025));
    }
}

#[test]
fn test_groups_of_every_size_get_a_derangement() {
    for size in 2_u64..=12 {
        let givers: Vec<String> = (0..size).map(|i| format!("P{i}")).collect();
        let mut rng: RunRng = RunRng::from_seed(size);

        let mapping: CandidateMapping = generate_mapping(
            &givers,
            &ConstraintSet::new(),
            None,
            DEFAULT_MAX_ITERATIONS,
            &mut rng,
        )
        .unwrap();
        assert_derangement(&givers, &mapping);
    }
}

#[test]
fn test_result_never_contains_a_constrained_pair() {
    let givers: Vec<String> = names(&["Alice", "Bob", "Carol", "Dave", "Eve"]);
    let constraints: ConstraintSet = [
        Constraint::new("Alice", "Bob"),
        Constraint::new("Bob", "Alice"),
        Constraint::new("Carol", "Dave"),
        Constraint::new("Dave", "Eve"),
        Constraint::new("Eve", "Alice"),
    ]
    .into_iter()
    .collect();

    for seed in 0..50 {
        let mut rng: RunRng = RunRng::from_seed(seed);
        let mapping: CandidateMapping = generate_mapping(
            &givers,
            &constraints,
            None,
            DEFAULT_MAX_ITERATIONS,
            &mut rng,
        )
        .unwrap();

        assert_derangement(&givers, &mapping);
        for (giver, receiver) in mapping.pairs() {
            assert!(!constraints.forbids(giver, receiver));
        }
    }
}

#[test]
fn test_single_participant_exhausts() {
    let givers: Vec<String> = names(&["Alone"]);
    let mut rng: RunRng = RunRng::from_seed(7);

    let result: Result<CandidateMapping, DomainError> =
        generate_mapping(&givers, &ConstraintSet::new(), None, 100, &mut rng);
    assert_eq!(
        result,
        Err(DomainError::GenerationExhausted {
            max_iterations: 100
        })
    );
}

#[test]
fn test_mutual_partners_alone_exhaust() {
    let givers: Vec<String> = names(&["Alice", "Bob"]);
    let constraints: ConstraintSet = [
        Constraint::new("Alice", "Bob"),
        Constraint::new("Bob", "Alice"),
    ]
    .into_iter()
    .collect();
    let mut rng: RunRng = RunRng::from_seed(7);

    let result: Result<CandidateMapping, DomainError> =
        generate_mapping(&givers, &constraints, None, 100, &mut rng);
    assert!(matches!(
        result,
        Err(DomainError::GenerationExhausted { .. })
    ));
}

#[test]
fn test_exhaustion_is_not_a_configuration_error() {
    let err: DomainError = DomainError::GenerationExhausted { max_iterations: 1 };
    assert!(!err.is_configuration_error());
}

#[test]
fn test_empty_group_succeeds_without_sampling() {
    let mut rng: RunRng = RunRng::from_seed(1);

    let outcome: GenerationOutcome = MappingGenerator::new(&[], &ConstraintSet::new())
        .run(&mut rng)
        .unwrap();
    assert_eq!(outcome.attempts, 0);
    assert!(outcome.mapping.is_empty());
}

#[test]
fn test_non_empty_group_always_samples_at_least_once() {
    let givers: Vec<String> = names(&["A", "B"]);
    let mut rng: RunRng = RunRng::from_seed(3);

    let outcome: GenerationOutcome = MappingGenerator::new(&givers, &ConstraintSet::new())
        .run(&mut rng)
        .unwrap();
    assert!(outcome.attempts >= 1);
    assert_eq!(outcome.mapping.receiver_of("A"), Some("B"));
    assert_eq!(outcome.mapping.receiver_of("B"), Some("A"));
}

#[test]
fn test_zero_budget_exhausts_after_one_sample() {
    let givers: Vec<String> = names(&["A"]);
    let mut rng: RunRng = RunRng::from_seed(3);

    let result: Result<GenerationOutcome, DomainError> =
        MappingGenerator::new(&givers, &ConstraintSet::new())
            .with_max_iterations(0)
            .run(&mut rng);
    assert_eq!(
        result,
        Err(DomainError::GenerationExhausted { max_iterations: 0 })
    );
}

#[test]
fn test_duplicate_names_are_rejected() {
    let givers: Vec<String> = names(&["A", "B", "A"]);
    let mut rng: RunRng = RunRng::from_seed(3);

    let result: Result<CandidateMapping, DomainError> = generate_mapping(
        &givers,
        &ConstraintSet::new(),
        None,
        DEFAULT_MAX_ITERATIONS,
        &mut rng,
    );
    assert_eq!(
        result,
        Err(DomainError::DuplicateParticipant(String::from("A")))
    );
}

#[test]
fn test_same_seed_gives_same_mapping() {
    let givers: Vec<String> = names(&["A", "B", "C", "D", "E", "F"]);

    let mut first_rng: RunRng = RunRng::from_seed(2024);
    let mut second_rng: RunRng = RunRng::from_seed(2024);
    let first: CandidateMapping = generate_mapping(
        &givers,
        &ConstraintSet::new(),
        None,
        DEFAULT_MAX_ITERATIONS,
        &mut first_rng,
    )
    .unwrap();
    let second: CandidateMapping = generate_mapping(
        &givers,
        &ConstraintSet::new(),
        None,
        DEFAULT_MAX_ITERATIONS,
        &mut second_rng,
    )
    .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_sample_permutation_keeps_elements() {
    let givers: Vec<String> = names(&["A", "B", "C", "D", "E"]);
    let mut rng: RunRng = RunRng::from_seed(11);

    let permutation: Vec<String> = sample_permutation(&givers, &mut rng);
    let mut sorted: Vec<String> = permutation.clone();
    sorted.sort();
    assert_eq!(sorted, givers);
    assert_eq!(rng.seed(), 11);
}

#[test]
fn test_sample_permutation_continues_the_stream() {
    let givers: Vec<String> = (0..20).map(|i| format!("P{i}")).collect();
    let mut rng: RunRng = RunRng::from_seed(5);

    let first: Vec<String> = sample_permutation(&givers, &mut rng);
    let second: Vec<String> = sample_permutation(&givers, &mut rng);
    assert_ne!(first, second);
}

#[test]
fn test_terminal_states() {
    assert!(GeneratorState::Success.is_terminal());
    assert!(GeneratorState::Exhausted.is_terminal());
    assert!(!GeneratorState::Init.is_terminal());
    assert!(!GeneratorState::Sampling.is_terminal());
    assert!(!GeneratorState::Checking.is_terminal());
}
