//! # Deterministic Integer Generators
//!
//! This module provides the [`Generator`] contract and its three
//! implementations.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator starts from a fixed state; `reset()` replays the sequence
//! - **Static dispatch first**: [`ShuffledGenerator`] is generic over its collaborators
//! - **Runtime selection**: `Box<dyn Generator>` also implements the contract, see [`GeneratorKind::build`]
//! - **Batch draws**: [`Generator::fill`] writes into a caller-owned slice
//!
//! ## Module Structure
//!
//! - [`linear`]: shared linear-congruential recurrence and parameter validation
//! - [`power_of_two`]: `state = (29 * state + 37) mod 256`
//! - [`prime`]: `state = (5 * state) mod 263`
//! - [`shuffled`]: Knuth's algorithm M over two owned generators
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_core::generators::{Generator, PrimeGenerator};
//!
//! let mut rng = PrimeGenerator::new();
//! let mut buffer = [0u64; 4];
//! rng.fill(&mut buffer);
//! assert_eq!(buffer, [5, 25, 125, 99]);
//!
//! rng.reset();
//! assert_eq!(rng.produce_next(), 5);
//! ```

pub mod linear;
pub mod power_of_two;
pub mod prime;
pub mod shuffled;

use std::fmt;
use std::str::FromStr;

use crate::error::GeneratorError;

pub use linear::LinearCongruential;
pub use power_of_two::PowerOfTwoGenerator;
pub use prime::PrimeGenerator;
pub use shuffled::ShuffledGenerator;

/// Capability contract shared by every generator.
///
/// Implementations must be pure functions of their prior state: no clock,
/// no entropy source, no shared mutable state.
pub trait Generator {
    /// Advances the internal state and returns the new value.
    ///
    /// The value lies in `[0, self.modulus())`.
    fn produce_next(&mut self) -> u64;

    /// Returns the exclusive upper bound of produced values.
    ///
    /// Constant for the generator's lifetime.
    fn modulus(&self) -> u64;

    /// Restores the initial state without touching configuration.
    fn reset(&mut self);

    /// Short label used in reports and log records.
    fn name(&self) -> &str;

    /// Fallible form of [`Generator::produce_next`].
    ///
    /// Generators that cannot fail keep the default, which always succeeds.
    ///
    /// # Errors
    ///
    /// Implementation specific; [`ShuffledGenerator`] reports a shuffle slot
    /// outside its buffer.
    fn try_produce_next(&mut self) -> Result<u64, GeneratorError> {
        Ok(self.produce_next())
    }

    /// Fills the buffer with consecutive values.
    ///
    /// Empty buffers are a no-op.
    fn fill(&mut self, buffer: &mut [u64]) {
        for value in buffer.iter_mut() {
            *value = self.produce_next();
        }
    }

    /// Fills the buffer through [`Generator::try_produce_next`], stopping at
    /// the first error.
    ///
    /// # Errors
    ///
    /// The first error raised by [`Generator::try_produce_next`]; slots from
    /// the failing one onwards are left untouched.
    fn try_fill(&mut self, buffer: &mut [u64]) -> Result<(), GeneratorError> {
        for value in buffer.iter_mut() {
            *value = self.try_produce_next()?;
        }
        Ok(())
    }
}

impl<G: Generator + ?Sized> Generator for Box<G> {
    #[inline]
    fn produce_next(&mut self) -> u64 {
        (**self).produce_next()
    }

    #[inline]
    fn try_produce_next(&mut self) -> Result<u64, GeneratorError> {
        (**self).try_produce_next()
    }

    #[inline]
    fn modulus(&self) -> u64 {
        (**self).modulus()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<G: Generator + ?Sized> Generator for &mut G {
    #[inline]
    fn produce_next(&mut self) -> u64 {
        (**self).produce_next()
    }

    #[inline]
    fn try_produce_next(&mut self) -> Result<u64, GeneratorError> {
        (**self).try_produce_next()
    }

    #[inline]
    fn modulus(&self) -> u64 {
        (**self).modulus()
    }

    #[inline]
    fn reset(&mut self) {
        (**self).reset()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Generator variants selectable at runtime.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GeneratorKind {
    /// [`PowerOfTwoGenerator`] with its default constants.
    #[default]
    PowerOfTwo,
    /// [`PrimeGenerator`] with its default constants.
    Prime,
    /// [`ShuffledGenerator`] drawing from a power-of-two generator and
    /// indexing with a prime generator.
    Shuffled,
}

impl GeneratorKind {
    /// All variants, in the order the demo driver runs them.
    pub const ALL: [GeneratorKind; 3] = [
        GeneratorKind::PowerOfTwo,
        GeneratorKind::Prime,
        GeneratorKind::Shuffled,
    ];

    /// Builds a fresh generator of this kind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prng_core::generators::{Generator, GeneratorKind};
    ///
    /// let mut rng = GeneratorKind::Shuffled.build();
    /// assert_eq!(rng.modulus(), 256);
    /// ```
    pub fn build(self) -> Box<dyn Generator> {
        match self {
            GeneratorKind::PowerOfTwo => Box::new(PowerOfTwoGenerator::new()),
            GeneratorKind::Prime => Box::new(PrimeGenerator::new()),
            GeneratorKind::Shuffled => Box::new(ShuffledGenerator::new(
                PowerOfTwoGenerator::new(),
                PrimeGenerator::new(),
            )),
        }
    }

    /// Kebab-case identifier, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::PowerOfTwo => "power-of-two",
            GeneratorKind::Prime => "prime",
            GeneratorKind::Shuffled => "shuffled",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GeneratorKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "power-of-two" | "pow2" => Ok(GeneratorKind::PowerOfTwo),
            "prime" => Ok(GeneratorKind::Prime),
            "shuffled" | "maclaren" => Ok(GeneratorKind::Shuffled),
            other => Err(format!(
                "Unknown generator: {}. Supported: power-of-two, prime, shuffled",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests;
