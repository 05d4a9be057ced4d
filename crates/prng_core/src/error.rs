//! Error types for generator construction and diagnostics.
//!
//! Numeric degeneracy in the diagnostics (for example a constant sequence in
//! the serial-correlation test) is never reported here: the non-finite float
//! produced by the arithmetic is returned to the caller instead.

use thiserror::Error;

/// Errors raised by generator construction and generation.
///
/// # Examples
///
/// ```
/// use prng_core::{GeneratorError, PowerOfTwoGenerator};
///
/// let err = PowerOfTwoGenerator::with_params(29, 37, 250).unwrap_err();
/// assert_eq!(err, GeneratorError::NotPowerOfTwo { modulus: 250 });
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GeneratorError {
    /// Modulus too small to hold the initial state of 1.
    #[error("Invalid modulus {modulus}: must be at least 2")]
    InvalidModulus {
        /// The rejected modulus
        modulus: u64,
    },

    /// Power-of-two generator configured with another modulus.
    #[error("Invalid modulus {modulus}: must be a power of two")]
    NotPowerOfTwo {
        /// The rejected modulus
        modulus: u64,
    },

    /// Prime generator configured with a composite modulus.
    #[error("Invalid modulus {modulus}: must be prime")]
    NotPrime {
        /// The rejected modulus
        modulus: u64,
    },

    /// Multiplier collapses a multiplicative sequence to zero.
    #[error("Degenerate multiplier {multiplier}: must not be a multiple of modulus {modulus}")]
    DegenerateMultiplier {
        /// The rejected multiplier
        multiplier: u64,
        /// The configured modulus
        modulus: u64,
    },

    /// `(modulus - 1) * multiplier + increment` does not fit in `u64`.
    #[error(
        "Parameters overflow: multiplier {multiplier}, increment {increment}, modulus {modulus}"
    )]
    ArithmeticOverflow {
        /// The configured multiplier
        multiplier: u64,
        /// The configured increment
        increment: u64,
        /// The configured modulus
        modulus: u64,
    },

    /// Shuffle index computed outside the buffer.
    #[error("Shuffle buffer index {index} out of range for buffer of length {len}")]
    BufferIndexOutOfRange {
        /// The computed index
        index: usize,
        /// The buffer length
        len: usize,
    },
}

/// Configuration error for diagnostic runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Sample size of zero.
    #[error("Invalid sample size {0}: must be at least 1")]
    InvalidSampleSize(usize),

    /// Fewer than two buckets leave no degrees of freedom.
    #[error("Invalid bucket count {0}: must be at least 2")]
    InvalidBucketCount(usize),
}

/// Errors raised by the statistical diagnostics.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DiagnosticError {
    /// Generator reported a modulus of zero.
    #[error("Generator reported modulus {0}: must be positive")]
    InvalidModulus(u64),

    /// Generator produced a value outside `[0, modulus)`.
    #[error("Sample {sample} falls outside bucket range of modulus {modulus}")]
    SampleOutOfRange {
        /// The offending sample
        sample: u64,
        /// The generator's modulus
        modulus: u64,
    },

    /// Invalid diagnostic configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Generator failed while drawing samples.
    #[error("Generator error: {0}")]
    Generator(#[from] GeneratorError),

    /// Reference distribution could not be built.
    #[error("Distribution error: {0}")]
    Distribution(String),
}
