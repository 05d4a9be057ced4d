//! Multiplicative congruential generator with a prime modulus.
//!
//! Zero is a fixed point of `state = a * state mod p`, and the state starts at
//! 1, so the generator cycles through a subgroup of `{1, ..., p - 1}` and
//! never produces 0. For the default `a = 5, p = 263`, 5 is a primitive root
//! and the cycle covers all 262 non-zero residues.

use tracing::debug;

use super::linear::LinearCongruential;
use super::Generator;
use crate::error::GeneratorError;

/// Default multiplier `a`.
pub const MULTIPLIER: u64 = 5;
/// Default prime modulus `p`.
pub const MODULUS: u64 = 263;

/// Multiplicative generator `state = (5 * state) mod 263`.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Generator, PrimeGenerator};
///
/// let mut rng = PrimeGenerator::new();
/// assert_eq!(rng.produce_next(), 5);
/// assert_eq!(rng.produce_next(), 25);
/// assert_eq!(rng.produce_next(), 125);
/// assert_eq!(rng.produce_next(), 625 % 263);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeGenerator {
    lcg: LinearCongruential,
}

impl PrimeGenerator {
    /// Creates the generator with the default constants.
    pub fn new() -> Self {
        Self {
            lcg: LinearCongruential::preset(MULTIPLIER, 0, MODULUS),
        }
    }

    /// Creates a generator with a custom multiplier and prime modulus.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidModulus`] if `modulus < 2`
    /// - [`GeneratorError::NotPrime`] if `modulus` is composite
    /// - [`GeneratorError::DegenerateMultiplier`] if `multiplier % modulus == 0`
    /// - [`GeneratorError::ArithmeticOverflow`] if a step could overflow `u64`
    pub fn with_params(multiplier: u64, modulus: u64) -> Result<Self, GeneratorError> {
        if modulus >= 2 && !is_prime(modulus) {
            return Err(GeneratorError::NotPrime { modulus });
        }
        if modulus >= 2 && multiplier % modulus == 0 {
            return Err(GeneratorError::DegenerateMultiplier {
                multiplier,
                modulus,
            });
        }
        let lcg = LinearCongruential::new(multiplier, 0, modulus)?;
        Ok(Self { lcg })
    }

    /// The underlying recurrence.
    pub fn recurrence(&self) -> &LinearCongruential {
        &self.lcg
    }
}

impl Default for PrimeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for PrimeGenerator {
    #[inline]
    fn produce_next(&mut self) -> u64 {
        self.lcg.step()
    }

    #[inline]
    fn modulus(&self) -> u64 {
        self.lcg.modulus()
    }

    fn reset(&mut self) {
        debug!(generator = self.name(), "reset");
        self.lcg.reset();
    }

    fn name(&self) -> &str {
        "prime"
    }
}

/// Trial-division primality test.
fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut divisor = 3u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}
