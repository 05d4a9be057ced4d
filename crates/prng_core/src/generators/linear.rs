//! Linear-congruential recurrence shared by the power-of-two and prime generators.
//!
//! `state = (state * multiplier + increment) mod modulus`, starting from
//! [`INITIAL_STATE`]. Parameters are validated once at construction so that
//! stepping can never overflow.

use crate::error::GeneratorError;

/// State every congruential generator starts from and returns to on reset.
pub const INITIAL_STATE: u64 = 1;

/// Validated linear-congruential recurrence with its running state.
///
/// # Examples
///
/// ```rust
/// use prng_core::generators::LinearCongruential;
///
/// let mut lcg = LinearCongruential::new(29, 37, 256).unwrap();
/// assert_eq!(lcg.step(), 66);
/// assert_eq!(lcg.step(), 159);
///
/// lcg.reset();
/// assert_eq!(lcg.state(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearCongruential {
    multiplier: u64,
    increment: u64,
    modulus: u64,
    state: u64,
}

impl LinearCongruential {
    /// Creates a recurrence after checking the modulus and overflow bound.
    ///
    /// # Errors
    ///
    /// - [`GeneratorError::InvalidModulus`] if `modulus < 2`
    /// - [`GeneratorError::ArithmeticOverflow`] if
    ///   `(modulus - 1) * multiplier + increment` exceeds `u64::MAX`
    pub fn new(multiplier: u64, increment: u64, modulus: u64) -> Result<Self, GeneratorError> {
        if modulus < 2 {
            return Err(GeneratorError::InvalidModulus { modulus });
        }

        let fits = (modulus - 1)
            .checked_mul(multiplier)
            .and_then(|product| product.checked_add(increment))
            .is_some();
        if !fits {
            return Err(GeneratorError::ArithmeticOverflow {
                multiplier,
                increment,
                modulus,
            });
        }

        Ok(Self {
            multiplier,
            increment,
            modulus,
            state: INITIAL_STATE,
        })
    }

    /// Builds a recurrence from constants already known to be valid.
    pub(crate) const fn preset(multiplier: u64, increment: u64, modulus: u64) -> Self {
        Self {
            multiplier,
            increment,
            modulus,
            state: INITIAL_STATE,
        }
    }

    /// Advances the recurrence and returns the new state.
    #[inline]
    pub fn step(&mut self) -> u64 {
        self.state = (self.state * self.multiplier + self.increment) % self.modulus;
        self.state
    }

    /// Returns the state to [`INITIAL_STATE`].
    #[inline]
    pub fn reset(&mut self) {
        self.state = INITIAL_STATE;
    }

    /// Current state (the last value produced, or 1 after a reset).
    #[inline]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Multiplier `a`.
    #[inline]
    pub fn multiplier(&self) -> u64 {
        self.multiplier
    }

    /// Increment `c`.
    #[inline]
    pub fn increment(&self) -> u64 {
        self.increment
    }

    /// Modulus `m`.
    #[inline]
    pub fn modulus(&self) -> u64 {
        self.modulus
    }
}
