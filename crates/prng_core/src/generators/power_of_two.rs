//! Mixed congruential generator with a power-of-two modulus.

use tracing::debug;

use super::linear::LinearCongruential;
use super::Generator;
use crate::error::GeneratorError;

/// Default multiplier `a = 4 * 7 + 1`.
pub const MULTIPLIER: u64 = 29;
/// Default increment `c`.
pub const INCREMENT: u64 = 37;
/// Default modulus `m = 2^8`.
pub const MODULUS: u64 = 256;

/// Linear-congruential generator `state = (29 * state + 37) mod 256`.
///
/// With an odd increment and `a - 1` divisible by 4 the default parameters
/// reach every residue, so the sequence has full period 256.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Generator, PowerOfTwoGenerator};
///
/// let mut rng = PowerOfTwoGenerator::new();
/// assert_eq!(rng.produce_next(), 66);
/// assert_eq!(rng.produce_next(), 159);
/// assert_eq!(rng.produce_next(), 40);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerOfTwoGenerator {
    lcg: LinearCongruential,
}

impl PowerOfTwoGenerator {
    /// Creates the generator with the default constants.
    pub fn new() -> Self {
        Self {
            lcg: LinearCongruential::preset(MULTIPLIER, INCREMENT, MODULUS),
        }
    }

    /// Creates a generator with custom parameters.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidModulus`] if `modulus < 2`
    /// - [`GeneratorError::NotPowerOfTwo`] if `modulus` is not a power of two
    /// - [`GeneratorError::ArithmeticOverflow`] if a step could overflow `u64`
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prng_core::{Generator, PowerOfTwoGenerator};
    ///
    /// let rng = PowerOfTwoGenerator::with_params(5, 3, 1024).unwrap();
    /// assert_eq!(rng.modulus(), 1024);
    ///
    /// assert!(PowerOfTwoGenerator::with_params(5, 3, 1000).is_err());
    /// ```
    pub fn with_params(
        multiplier: u64,
        increment: u64,
        modulus: u64,
    ) -> Result<Self, GeneratorError> {
        if modulus >= 2 && !modulus.is_power_of_two() {
            return Err(GeneratorError::NotPowerOfTwo { modulus });
        }
        let lcg = LinearCongruential::new(multiplier, increment, modulus)?;
        Ok(Self { lcg })
    }

    /// The underlying recurrence.
    pub fn recurrence(&self) -> &LinearCongruential {
        &self.lcg
    }
}

impl Default for PowerOfTwoGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator for PowerOfTwoGenerator {
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
        "power-of-two"
    }
}
