//! Xoroshiro128++ pseudo-random number generator.
//!
//! Small, fast and reproducible. Not suitable for cryptographic use.

#[cfg(test)]
mod test;

use rand::{RngCore, SeedableRng};

/// Used in place of the all-zero state, which the generator never leaves.
const ZERO_SEED_REPLACEMENT: (u64, u64) = (0x9E37_79B9_7F4A_7C15, 0xBF58_476D_1CE4_E5B9);

/// Xoroshiro128++ generator with a 128-bit state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128PlusPlus {
    s0: u64,
    s1: u64,
}

impl Xoroshiro128PlusPlus {
    /// Build a generator directly from its two state words.
    pub fn from_state(s0: u64, s1: u64) -> Self {
        if s0 == 0 && s1 == 0 {
            let (s0, s1) = ZERO_SEED_REPLACEMENT;
            return Self { s0, s1 };
        }
        Self { s0, s1 }
    }

    /// Current state words, `(s0, s1)`.
    pub fn state(&self) -> (u64, u64) {
        (self.s0, self.s1)
    }
}

/// One Xoroshiro128++ step: returns the output and advances the state.
#[inline]
pub fn xoroshiro_step(s0: &mut u64, s1: &mut u64) -> u64 {
    let a = *s0;
    let b = *s1;

    let result = a.wrapping_add(b).rotate_left(17).wrapping_add(a);

    let b = b ^ a;
    *s0 = a.rotate_left(49) ^ b ^ (b << 21);
    *s1 = b.rotate_left(28);

    result
}

/// SplitMix64, used to expand a 64-bit seed into the full state.
fn splitmix64(x: &mut u64) -> u64 {
    *x = x.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *x;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

impl RngCore for Xoroshiro128PlusPlus {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        xoroshiro_step(&mut self.s0, &mut self.s1)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Xoroshiro128PlusPlus {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&seed[..8]);
        hi.copy_from_slice(&seed[8..]);
        Self::from_state(u64::from_le_bytes(lo), u64::from_le_bytes(hi))
    }

    fn seed_from_u64(mut state: u64) -> Self {
        let s0 = splitmix64(&mut state);
        let s1 = splitmix64(&mut state);
        Self::from_state(s0, s1)
    }
}
