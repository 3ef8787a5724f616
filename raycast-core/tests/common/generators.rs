//! Stochastic generators for test variations
//!
//! Uses seeded RNG for reproducibility. Print seed on failure for replay.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded generator for reproducible stochastic tests
pub struct Gen {
    pub rng: StdRng,
    pub seed: u64,
}

impl Gen {
    /// Create with specific seed (for reproduction)
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create from environment or random seed
    pub fn from_env_or_random() -> Self {
        let seed = std::env::var("RAYCAST_TEST_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(rand::random);
        Self::new(seed)
    }

    /// Geometric distribution: count until rand > alpha
    pub fn geometric(&mut self, alpha: f64) -> usize {
        let mut n = 0;
        while self.rng.gen::<f64>() < alpha {
            n += 1;
        }
        n
    }

    /// Random boolean with probability p
    pub fn chance(&mut self, p: f64) -> bool {
        self.rng.gen::<f64>() < p
    }

    /// A run of scene-file whitespace, usually short and often empty
    pub fn whitespace(&mut self) -> Vec<u8> {
        const WS: &[u8] = b"  \t\n\r";
        let len = self.geometric(0.5);
        (0..len).map(|_| WS[self.rng.gen_range(0..WS.len())]).collect()
    }

    /// Random printable ASCII text with no quote or backslash
    pub fn plain_text(&mut self, max_len: usize) -> String {
        let len = self.rng.gen_range(0..=max_len);
        (0..len)
            .map(|_| loop {
                let c = self.rng.gen_range(32u8..=126);
                if c != b'"' && c != b'\\' {
                    break c as char;
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reproducibility() {
        let mut g1 = Gen::new(42);
        let mut g2 = Gen::new(42);

        for _ in 0..10 {
            assert_eq!(g1.whitespace(), g2.whitespace());
            assert_eq!(g1.plain_text(20), g2.plain_text(20));
        }
    }
}
