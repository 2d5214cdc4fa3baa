//! Seeded Park-Miller generator driving every random choice in synthesis
//!
//! Seeds are reduced to their low 32 bits and scrambled with a multiplicative
//! hash so that adjacent seeds give unrelated streams. The scrambled value
//! seeds a Lehmer generator with multiplier 16807 modulo the Mersenne prime
//! 2^31 - 1.
//!
//! A Lehmer state of zero is absorbing, which the unguarded generator reaches
//! for seed 0 and every seed hashing to a multiple of the modulus. The state is
//! floored to 1 in that case. All other seeds produce the unguarded stream.

use rand::RngCore;
use rand::rand_core::impls;

/// Lehmer generator modulus (the Mersenne prime 2^31 - 1)
pub const MODULUS: u64 = 2_147_483_647;

/// Lehmer generator multiplier
pub const MULTIPLIER: u64 = 16_807;

/// Odd multiplicative hash applied to the seed before it becomes a state
pub const SEED_SCRAMBLE: u32 = 2_654_435_761;

/// State used when the scrambled seed reduces to zero
pub const ZERO_STATE_FLOOR: u32 = 1;

/// Source of uniformly distributed values in `[0, 1)`
pub trait UnitSource {
    /// Advance the stream and return the next value
    fn next_unit(&mut self) -> f64;
}

/// Scramble a seed's 32-bit pattern with the multiplicative hash
pub const fn scramble_seed(seed: i64) -> u32 {
    (seed as u32).wrapping_mul(SEED_SCRAMBLE)
}

/// Minimal-standard Lehmer generator seeded from an integer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParkMiller {
    state: u32,
}

impl ParkMiller {
    /// Create a stream for a seed
    pub const fn new(seed: i64) -> Self {
        let reduced = scramble_seed(seed) as u64 % MODULUS;
        let state = if reduced == 0 {
            ZERO_STATE_FLOOR
        } else {
            reduced as u32
        };
        Self { state }
    }

    /// Current generator state, always in `[1, MODULUS)`
    pub const fn state(&self) -> u32 {
        self.state
    }

    fn advance(&mut self) -> u32 {
        self.state = ((u64::from(self.state) * MULTIPLIER) % MODULUS) as u32;
        self.state
    }
}

impl UnitSource for ParkMiller {
    fn next_unit(&mut self) -> f64 {
        f64::from(self.advance()) / MODULUS as f64
    }
}

impl RngCore for ParkMiller {
    fn next_u32(&mut self) -> u32 {
        self.advance()
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        impls::fill_bytes_via_next(self, dst);
    }
}
