#![forbid(unsafe_code)]

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Simple RNG wrapper returning a seeded ChaCha8Rng
pub fn make_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// RNG for a chat session: reproducible when `seed` is set, otherwise
/// seeded from the operating system.
pub fn session_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => make_rng(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Pick one element uniformly at random; `None` for an empty slice.
pub fn pick<'a, T, R>(items: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    items.choose(rng)
}
