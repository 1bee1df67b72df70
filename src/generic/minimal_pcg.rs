//! A small pseudorandom number generator.
//!
//! A translation of the minimal C implementation of PCG32 from
//! <https://www.pcg-random.org/>, wired to the [rand] traits so a
//! context may be generic over its source of randomness.
//!
//! PCG32 keeps the rest of the library simple: two words of state, a
//! fixed increment, and a completely reproducible stream from a seed.
//! The default solve configuration never consults the generator, so
//! solves are deterministic unless randomness is asked for.

use rand::SeedableRng;
use rand_core::{impls, Error, RngCore};

/// State and increment.
pub struct MinimalPCG32 {
    state: u64,
    inc: u64,
}

/// An odd constant for the increment, with no further motivation.
const INCREMENT: u64 = 2891336453168467025;

impl RngCore for MinimalPCG32 {
    fn next_u32(&mut self) -> u32 {
        let old_state = self.state;

        self.state = old_state
            .wrapping_mul(6364136223846793005_u64)
            .wrapping_add(self.inc);

        let xorshifted = ((old_state >> 18) ^ old_state) >> 27;
        let rot = (old_state >> 59) as u32;
        (xorshifted as u32).rotate_right(rot)
    }

    fn next_u64(&mut self) -> u64 {
        self.next_u32() as u64
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for MinimalPCG32 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self {
            state: u64::from_le_bytes(seed).wrapping_add(INCREMENT),
            inc: INCREMENT,
        }
    }
}

impl Default for MinimalPCG32 {
    fn default() -> Self {
        Self::from_seed(crate::config::defaults::RNG_SEED.to_le_bytes())
    }
}

#[cfg(test)]
mod pcg_tests {
    use super::*;

    #[test]
    fn equal_seeds_equal_streams() {
        let mut left = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        let mut right = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        for _ in 0..64 {
            assert_eq!(left.next_u32(), right.next_u32());
        }
    }

    #[test]
    fn distinct_seeds_distinct_streams() {
        let mut left = MinimalPCG32::from_seed(7_u64.to_le_bytes());
        let mut right = MinimalPCG32::from_seed(8_u64.to_le_bytes());
        let disagreement = (0..64).any(|_| left.next_u32() != right.next_u32());
        assert!(disagreement);
    }

    #[test]
    fn default_matches_seeded() {
        let mut defaulted = MinimalPCG32::default();
        let mut seeded =
            MinimalPCG32::from_seed(crate::config::defaults::RNG_SEED.to_le_bytes());
        for _ in 0..16 {
            assert_eq!(defaulted.next_u64(), seeded.next_u64());
        }
    }
}
