//! Deterministic random number generation for deck shuffling.
//!
//! The engine owns one `GameRng` and draws every shuffle from it. The same
//! seed gives the same deck order, so a game replays exactly from its seed
//! and action list. Restarting a session keeps consuming the same stream,
//! so the second deal differs from the first but is still reproducible.
//!
//! ```
//! use queens_garden::core::GameRng;
//!
//! let mut a = GameRng::new(7);
//! let mut b = GameRng::new(7);
//!
//! let mut xs: Vec<u32> = (0..10).collect();
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded RNG owned by a game session.
///
/// ChaCha8: fast, and portable across platforms for a given seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the thread RNG. The chosen seed is still recorded, see
    /// [`GameRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly shuffle a slice in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.inner.gen_range(0..=i);
            slice.swap(i, j);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut GameRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..36).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_same_seed_same_shuffles() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        assert_ne!(shuffled(&mut GameRng::new(1)), shuffled(&mut GameRng::new(2)));
    }

    #[test]
    fn test_stream_advances() {
        let mut rng = GameRng::new(5);
        let first = shuffled(&mut rng);
        let second = shuffled(&mut rng);
        assert_ne!(first, second);
        assert_eq!(rng.seed(), 5);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = GameRng::new(42);
        let mut data = shuffled(&mut rng);
        assert_ne!(data, (0..36).collect::<Vec<_>>());

        data.sort_unstable();
        assert_eq!(data, (0..36).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(3);
        let mut empty: Vec<u8> = vec![];
        rng.shuffle(&mut empty);
        assert!(empty.is_empty());

        let mut one = vec![9];
        rng.shuffle(&mut one);
        assert_eq!(one, vec![9]);
    }

    #[test]
    fn test_entropy_records_seed() {
        let mut rng = GameRng::from_entropy();
        let mut replay = GameRng::new(rng.seed());
        assert_eq!(shuffled(&mut rng), shuffled(&mut replay));
    }
}
