use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animal::{new_animal, Kind, SharedAnimal};

pub const DEFAULT_COUNT: u32 = 10;

/// Build a seeded generator. Without an explicit seed, one is derived from
/// the wall clock. The seed used is returned so a run can be replayed.
pub fn seeded_rng(seed: Option<u64>) -> (StdRng, u64) {
    let seed = seed.unwrap_or_else(clock_seed);
    (StdRng::seed_from_u64(seed), seed)
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// Fill a sequence with `count` animals indexed `1..=count`, flipping a fair
/// coin for each one to decide between a cat and a dog.
///
/// `count` is a `u32` so every index fits an `i64` without wrapping.
pub fn populate<R: Rng + ?Sized>(count: u32, rng: &mut R) -> Vec<SharedAnimal> {
    (1..=i64::from(count))
        .map(|index| {
            let kind = if rng.gen::<bool>() { Kind::Cat } else { Kind::Dog };
            new_animal(kind, index)
        })
        .collect()
}
