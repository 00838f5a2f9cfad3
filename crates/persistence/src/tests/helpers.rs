// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use santify::RunMetadata;
use santify_domain::{
    CandidateMapping, ConstraintSet, DEFAULT_MAX_ITERATIONS, RunRng, generate_mapping,
};

pub const TEST_SEED: u64 = 424_242;

pub fn create_test_metadata() -> RunMetadata {
    RunMetadata {
        id: String::from("novak"),
        display_name: String::from("Novák Family"),
        year: 2025,
        theme: None,
        budget: Some(30),
    }
}

pub fn create_test_mapping() -> CandidateMapping {
    let names: Vec<String> = ["Anna", "Bohuš", "Cyril", "Dáša"]
        .iter()
        .map(ToString::to_string)
        .collect();
    let mut rng: RunRng = RunRng::from_seed(TEST_SEED);
    generate_mapping(
        &names,
        &ConstraintSet::new(),
        Some(2025),
        DEFAULT_MAX_ITERATIONS,
        &mut rng,
    )
    .unwrap()
}
