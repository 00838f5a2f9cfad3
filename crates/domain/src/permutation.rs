// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// The random stream for one run.
///
/// Seeded exactly once. The seed is kept so it can be logged and stored
/// with the result, which makes any run reproducible.
#[derive(Debug)]
pub struct RunRng {
    seed: u64,
    rng: StdRng,
}

impl RunRng {
    /// Creates a stream from a known seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a stream from a freshly drawn seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random::<u64>())
    }

    /// Returns the seed this stream was created from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

/// Returns a uniformly random permutation of `names`.
///
/// Draws from the continuing stream in `rng`; consecutive calls yield
/// independent permutations.
#[must_use]
pub fn sample_permutation(names: &[String], rng: &mut RunRng) -> Vec<String> {
    let mut permutation: Vec<String> = names.to_vec();
    permutation.shuffle(&mut rng.rng);
    permutation
}
