//! Space descriptor compliance test helpers.
//!
//! These functions verify that a [`Space`] satisfies the invariants
//! required by the descriptor contract. Reused across backend test
//! modules and by environments that declare custom space trees.

use crate::space::Space;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Assert that `rounds` consecutive samples are all contained in the
/// space that produced them.
pub fn assert_samples_contained(space: &Space, rounds: usize) {
    let mut rng = ChaCha8Rng::seed_from_u64(0);
    for round in 0..rounds {
        let value = space.sample(&mut rng);
        assert!(
            space.contains(&value),
            "sample {round} not contained in its space: {value:?}"
        );
    }
}

/// Assert that every sample's scalar count matches the declared
/// [`flat_len()`](Space::flat_len).
pub fn assert_flat_len_consistent(space: &Space) {
    let mut rng = ChaCha8Rng::seed_from_u64(1);
    let value = space.sample(&mut rng);
    assert_eq!(
        value.flat_len(),
        space.flat_len(),
        "sample flat_len diverges from declared flat_len"
    );
}

/// Assert that identical seeds yield identical sample streams.
pub fn assert_sampling_deterministic(space: &Space) {
    let mut a = ChaCha8Rng::seed_from_u64(42);
    let mut b = ChaCha8Rng::seed_from_u64(42);
    for round in 0..8 {
        assert_eq!(
            space.sample(&mut a),
            space.sample(&mut b),
            "sample {round} diverged between identical seeds"
        );
    }
}
