//! Seedable linear congruential generator
//!
//! `state' = (a * state + c) mod m` with GCC's constants. Only ball respawns
//! draw from it, two values per respawn.

use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

const MODULUS: u64 = 1 << 31;
const MULTIPLIER: u64 = 1_103_515_245;
const INCREMENT: u64 = 12_345;

/// Deterministic generator owned by whoever performs respawns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Create a generator; the seed is reduced mod 2^31
    pub fn new(seed: u32) -> Self {
        Self {
            state: (seed as u64 % MODULUS) as u32,
        }
    }

    /// Seed from the platform RNG (used when no seed is configured)
    pub fn from_entropy() -> Self {
        Self::from_rng(&mut rand::rng())
    }

    /// Generator for a configured seed. Zero counts as unset, like a missing
    /// seed, and falls back to entropy.
    pub fn from_setting(seed: Option<u32>) -> Self {
        match seed {
            Some(seed) if seed != 0 => Self::new(seed),
            _ => Self::from_entropy(),
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Advance and return the new state, in `[0, 2^31)`.
    ///
    /// `a * state + c` stays below 2^62, so the product is exact in u64.
    pub fn next_int(&mut self) -> u32 {
        self.state = ((MULTIPLIER * self.state as u64 + INCREMENT) % MODULUS) as u32;
        self.state
    }

    /// Next value in `[0, 1]`
    pub fn next_float(&mut self) -> f64 {
        self.next_int() as f64 / (MODULUS - 1) as f64
    }

    /// Next value in `[-1, 1]`
    pub fn next_signed(&mut self) -> f64 {
        self.next_float() * 2.0 - 1.0
    }
}

impl Default for Lcg {
    fn default() -> Self {
        Self::new(crate::consts::RNG_SEED)
    }
}

impl RngCore for Lcg {
    /// Only the low 31 bits vary.
    fn next_u32(&mut self) -> u32 {
        self.next_int()
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_int() as u64;
        let lo = self.next_int() as u64;
        (hi << 31) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.next_int().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for Lcg {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
