use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

/// Seeded random source for a single game. Two instances created with the
/// same seed produce the same sequence.
pub struct SessionRng {
    rng: StdRng,
    seed: u64,
}

impl SessionRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn from_random() -> Self {
        let seed: u64 = rand::rng().random();
        Self::new(seed)
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly picks one element, `None` for an empty slice.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        items.choose(&mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SessionRng::new(42);
        let mut b = SessionRng::new(42);
        let items: Vec<u32> = (0..1000).collect();
        for _ in 0..20 {
            assert_eq!(a.choose(&items), b.choose(&items));
        }
        assert_eq!(a.seed(), 42);
    }

    #[test]
    fn test_choose_empty_is_none() {
        let mut rng = SessionRng::new(1);
        let empty: [u8; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_choose_returns_member() {
        let mut rng = SessionRng::new(7);
        let items = [3, 5, 8];
        for _ in 0..10 {
            assert!(items.contains(rng.choose(&items).unwrap()));
        }
    }
}
