//! Random source for team balancing, hinter selection and word sampling.
//!
//! Games draw from OS entropy by default. Tests and tools can seed a
//! `GameRng` to replay the same shuffles.
//!
//! ```
//! use rust_codenames::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut xs = vec![1, 2, 3, 4, 5];
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Game random source.
///
/// Uses ChaCha8 for speed while maintaining good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
    }

    /// Sample `amount` distinct elements without replacement.
    ///
    /// The result is in random order. Returns fewer than `amount` elements
    /// only when the slice is shorter than `amount`.
    pub fn sample<T: Clone>(&mut self, slice: &[T], amount: usize) -> Vec<T> {
        slice
            .choose_multiple(&mut self.inner, amount)
            .cloned()
            .collect()
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let pool: Vec<u32> = (0..1000).collect();
        for _ in 0..20 {
            assert_eq!(rng1.sample(&pool, 25), rng2.sample(&pool, 25));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let mut seq1: Vec<u32> = (0..50).collect();
        let mut seq2 = seq1.clone();
        rng1.shuffle(&mut seq1);
        rng2.shuffle(&mut seq2);

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=20).collect();
        let original = data.clone();

        rng.shuffle(&mut data);

        assert_ne!(data, original);
        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items).copied();
        assert!(chosen.is_some_and(|c| items.contains(&c)));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_sample_is_distinct() {
        let mut rng = GameRng::new(7);
        let pool: Vec<u32> = (0..100).collect();

        let mut picked = rng.sample(&pool, 25);
        assert_eq!(picked.len(), 25);

        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 25);
    }

    #[test]
    fn test_sample_short_pool() {
        let mut rng = GameRng::new(7);
        let pool = vec!["a", "b"];
        assert_eq!(rng.sample(&pool, 5).len(), 2);
    }
}
