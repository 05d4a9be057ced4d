//! Knuth's algorithm M: emitting one generator's values out of order.
//!
//! A buffer is primed with [`BUFFER_SIZE`] values from `first`. On every
//! step `second` picks a slot, the slot's value is emitted, and the slot is
//! refilled from `first`. The output domain is therefore `first`'s domain,
//! while the emission order is driven by `second`.
//!
//! # Index Mapping
//!
//! The slot is `trunc(x * (BUFFER_SIZE / m))` where `x` is the value drawn
//! from `second` and `m` its modulus, evaluated in single precision. For
//! large moduli the rounding of `x` to `f32` can land the product exactly on
//! `BUFFER_SIZE`; that index is reported as
//! [`GeneratorError::BufferIndexOutOfRange`] rather than clamped.

use tracing::debug;

use super::Generator;
use crate::error::GeneratorError;

/// Number of buffered values.
pub const BUFFER_SIZE: usize = 100;

/// Algorithm M combinator over two exclusively owned generators.
///
/// # Examples
///
/// ```rust
/// use prng_core::{Generator, PowerOfTwoGenerator, PrimeGenerator, ShuffledGenerator};
///
/// let mut rng = ShuffledGenerator::new(PowerOfTwoGenerator::new(), PrimeGenerator::new());
/// assert_eq!(rng.modulus(), 256);
///
/// let head: Vec<u64> = (0..4).map(|_| rng.produce_next()).collect();
/// assert_eq!(head, vec![159, 119, 145, 11]);
/// ```
#[derive(Clone, Debug)]
pub struct ShuffledGenerator<F, S> {
    first: F,
    second: S,
    buffer: [u64; BUFFER_SIZE],
}

impl<F: Generator, S: Generator> ShuffledGenerator<F, S> {
    /// Takes ownership of both collaborators and primes the buffer.
    ///
    /// Both collaborators are reset first, so their prior history does not
    /// matter. Passing two handles to the same underlying generator is legal
    /// but defeats the decorrelation.
    pub fn new(first: F, second: S) -> Self {
        let mut generator = Self {
            first,
            second,
            buffer: [0; BUFFER_SIZE],
        };
        generator.reset();
        generator
    }

    /// Current buffer contents in slot order.
    pub fn buffer(&self) -> &[u64] {
        &self.buffer
    }

    /// Generator supplying buffered values.
    pub fn first(&self) -> &F {
        &self.first
    }

    /// Generator selecting buffer slots.
    pub fn second(&self) -> &S {
        &self.second
    }

    /// Releases both collaborators.
    pub fn into_parts(self) -> (F, S) {
        (self.first, self.second)
    }
}

/// Maps a selector in `[0, modulus)` onto `[0, BUFFER_SIZE)`.
#[inline]
fn slot_index(selector: u64, modulus: u64) -> usize {
    let scale = BUFFER_SIZE as f32 / modulus as f32;
    (selector as f32 * scale) as usize
}

impl<F: Generator, S: Generator> Generator for ShuffledGenerator<F, S> {
    /// # Panics
    ///
    /// Panics if the selected slot falls outside the buffer; see
    /// [`Generator::try_produce_next`] for the fallible form.
    fn produce_next(&mut self) -> u64 {
        match self.try_produce_next() {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// Produces the next value, reporting an out-of-range slot as an error.
    ///
    /// On a slot error `second` has advanced but neither the buffer nor
    /// `first` has changed. Errors from either collaborator are passed on.
    ///
    /// # Errors
    ///
    /// [`GeneratorError::BufferIndexOutOfRange`] when the scaled selector
    /// reaches or exceeds [`BUFFER_SIZE`].
    fn try_produce_next(&mut self) -> Result<u64, GeneratorError> {
        let selector = self.second.try_produce_next()?;
        let index = slot_index(selector, self.second.modulus());
        if index >= BUFFER_SIZE {
            return Err(GeneratorError::BufferIndexOutOfRange {
                index,
                len: BUFFER_SIZE,
            });
        }

        let refill = self.first.try_produce_next()?;
        Ok(std::mem::replace(&mut self.buffer[index], refill))
    }

    #[inline]
    fn modulus(&self) -> u64 {
        self.first.modulus()
    }

    fn reset(&mut self) {
        self.first.reset();
        self.second.reset();
        for slot in self.buffer.iter_mut() {
            *slot = self.first.produce_next();
        }
        debug!(
            first = self.first.name(),
            second = self.second.name(),
            "shuffle buffer primed"
        );
    }

    fn name(&self) -> &str {
        "shuffled"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{PowerOfTwoGenerator, PrimeGenerator};

    /// Counts upwards from zero, wrapping at `modulus`.
    struct Counter {
        next: u64,
        modulus: u64,
    }

    impl Generator for Counter {
        fn produce_next(&mut self) -> u64 {
            let value = self.next;
            self.next = (self.next + 1) % self.modulus;
            value
        }

        fn modulus(&self) -> u64 {
            self.modulus
        }

        fn reset(&mut self) {
            self.next = 0;
        }

        fn name(&self) -> &str {
            "counter"
        }
    }

    /// Always returns the same value.
    struct Fixed {
        value: u64,
        modulus: u64,
    }

    impl Generator for Fixed {
        fn produce_next(&mut self) -> u64 {
            self.value
        }

        fn modulus(&self) -> u64 {
            self.modulus
        }

        fn reset(&mut self) {}

        fn name(&self) -> &str {
            "fixed"
        }
    }

    #[test]
    fn test_buffer_primed_with_first_outputs_in_order() {
        let first = Counter {
            next: 57,
            modulus: 1000,
        };
        let rng = ShuffledGenerator::new(first, PrimeGenerator::new());

        let expected: Vec<u64> = (0..BUFFER_SIZE as u64).collect();
        assert_eq!(rng.buffer(), expected.as_slice());
    }

    #[test]
    fn test_buffer_matches_reset_power_of_two_sequence() {
        let mut reference = PowerOfTwoGenerator::new();
        let expected: Vec<u64> = (0..BUFFER_SIZE).map(|_| reference.produce_next()).collect();

        let mut used = PowerOfTwoGenerator::new();
        for _ in 0..17 {
            used.produce_next();
        }
        let rng = ShuffledGenerator::new(used, PrimeGenerator::new());
        assert_eq!(rng.buffer(), expected.as_slice());
    }

    #[test]
    fn test_modulus_delegates_to_first() {
        let rng = ShuffledGenerator::new(PrimeGenerator::new(), PowerOfTwoGenerator::new());
        assert_eq!(rng.modulus(), 263);

        let rng = ShuffledGenerator::new(PowerOfTwoGenerator::new(), PrimeGenerator::new());
        assert_eq!(rng.modulus(), 256);
    }

    #[test]
    fn test_emitted_slot_is_refilled_from_first() {
        let first = Counter {
            next: 0,
            modulus: 1000,
        };
        let second = Fixed {
            value: 3,
            modulus: 10,
        };
        let mut rng = ShuffledGenerator::new(first, second);

        // 3 * (100 / 10) selects slot 30.
        assert_eq!(rng.produce_next(), 30);
        assert_eq!(rng.buffer()[30], 100);
        assert_eq!(rng.produce_next(), 100);
        assert_eq!(rng.buffer()[30], 101);
    }

    #[test]
    fn test_selector_at_modulus_is_reported() {
        let second = Fixed {
            value: 10,
            modulus: 10,
        };
        let mut rng = ShuffledGenerator::new(PowerOfTwoGenerator::new(), second);
        let before = rng.buffer().to_vec();

        assert_eq!(
            rng.try_produce_next(),
            Err(GeneratorError::BufferIndexOutOfRange {
                index: 100,
                len: BUFFER_SIZE
            })
        );
        assert_eq!(rng.buffer(), before.as_slice());
    }

    #[test]
    fn test_single_precision_rounding_reaches_buffer_len() {
        // 2^30 - 1 rounds to 2^30 in f32, so the scaled index is exactly 100.
        let modulus = 1u64 << 30;
        assert_eq!(slot_index(modulus - 1, modulus), BUFFER_SIZE);

        let second = Fixed {
            value: modulus - 1,
            modulus,
        };
        let mut rng = ShuffledGenerator::new(PowerOfTwoGenerator::new(), second);
        assert!(matches!(
            rng.try_produce_next(),
            Err(GeneratorError::BufferIndexOutOfRange { index: 100, .. })
        ));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_produce_next_panics_on_bad_index() {
        let second = Fixed {
            value: 10,
            modulus: 10,
        };
        let mut rng = ShuffledGenerator::new(PowerOfTwoGenerator::new(), second);
        rng.produce_next();
    }

    #[test]
    fn test_slot_index_covers_prime_range() {
        for selector in 0..263 {
            assert!(slot_index(selector, 263) < BUFFER_SIZE);
        }
        assert_eq!(slot_index(0, 263), 0);
        assert_eq!(slot_index(262, 263), 99);
    }

    #[test]
    fn test_into_parts_returns_collaborators() {
        let rng = ShuffledGenerator::new(PowerOfTwoGenerator::new(), PrimeGenerator::new());
        let (first, second) = rng.into_parts();
        assert_eq!(first.modulus(), 256);
        assert_eq!(second.modulus(), 263);
    }
}
