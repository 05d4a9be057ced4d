//! Knuth's serial-correlation coefficient.
//!
//! For samples `x[0..n]` paired cyclically with `x[(i + 1) mod n]`:
//!
//! ```text
//! C = (n Σ x[i] x[i+1] - (Σ x[i])^2) / (n Σ x[i]^2 - (Σ x[i])^2)
//! ```
//!
//! `C` lies roughly in `[-1, 1]`; values near 0 mean successive outputs are
//! nearly uncorrelated. A constant sequence makes both numerator and
//! denominator zero and the result is NaN.

use tracing::debug;

use super::config::DiagnosticConfig;
use crate::error::DiagnosticError;
use crate::generators::Generator;

/// Serial correlation over the default 200 samples.
///
/// The generator is reset before sampling. Degenerate input surfaces as a
/// non-finite result rather than an error.
///
/// # Panics
///
/// Panics if the generator fails to produce a sample, as
/// [`Generator::produce_next`] does; use [`serial_correlation_with`] to get
/// the failure as a [`DiagnosticError`].
///
/// # Examples
///
/// ```rust
/// use prng_core::{serial_correlation, PrimeGenerator};
///
/// let mut rng = PrimeGenerator::new();
/// let coefficient = serial_correlation(&mut rng);
/// assert!((coefficient - 0.187_679).abs() < 1e-6);
/// ```
pub fn serial_correlation<G: Generator + ?Sized>(generator: &mut G) -> f64 {
    match sampled_correlation(generator, DiagnosticConfig::default().sample_size()) {
        Ok(coefficient) => coefficient,
        Err(err) => panic!("{}", err),
    }
}

/// Serial correlation with an explicit sample size.
///
/// # Errors
///
/// - [`DiagnosticError::Config`] for an invalid configuration
/// - [`DiagnosticError::Generator`] if drawing a sample fails
pub fn serial_correlation_with<G: Generator + ?Sized>(
    generator: &mut G,
    config: &DiagnosticConfig,
) -> Result<f64, DiagnosticError> {
    config.validate()?;
    sampled_correlation(generator, config.sample_size())
}

fn sampled_correlation<G: Generator + ?Sized>(
    generator: &mut G,
    sample_size: usize,
) -> Result<f64, DiagnosticError> {
    generator.reset();
    let mut samples = vec![0u64; sample_size];
    generator.try_fill(&mut samples)?;

    let coefficient = serial_correlation_of(&samples);
    debug!(
        generator = generator.name(),
        samples = sample_size,
        coefficient,
        "serial correlation computed"
    );
    Ok(coefficient)
}

/// Serial correlation of pre-drawn samples, treated as a cycle.
///
/// Sums are accumulated exactly in `u128` and only converted to `f64` for the
/// final division; if an intermediate would overflow, the whole computation
/// falls back to `f64`.
///
/// # Examples
///
/// ```rust
/// use prng_core::diagnostics::serial_correlation_of;
///
/// assert!(serial_correlation_of(&[7; 50]).is_nan());
/// assert!(serial_correlation_of(&[0, 1, 0, 1]) < 0.0);
/// ```
pub fn serial_correlation_of(samples: &[u64]) -> f64 {
    match exact_sums(samples) {
        Some(sums) => sums.coefficient(),
        None => float_coefficient(samples),
    }
}

/// Exact accumulators for the cyclic pairing.
struct Sums {
    n: u128,
    products: u128,
    squares: u128,
    values: u128,
}

impl Sums {
    fn coefficient(&self) -> f64 {
        let numerator = centred(self.n, self.products, self.values);
        let denominator = centred(self.n, self.squares, self.values);
        numerator / denominator
    }
}

/// `n * moment - sum^2`, exact when it fits.
fn centred(n: u128, moment: u128, sum: u128) -> f64 {
    match (n.checked_mul(moment), sum.checked_mul(sum)) {
        (Some(scaled), Some(squared)) if scaled >= squared => (scaled - squared) as f64,
        (Some(scaled), Some(squared)) => -((squared - scaled) as f64),
        _ => n as f64 * moment as f64 - (sum as f64) * (sum as f64),
    }
}

fn exact_sums(samples: &[u64]) -> Option<Sums> {
    let mut sums = Sums {
        n: samples.len() as u128,
        products: 0,
        squares: 0,
        values: 0,
    };
    let successors = samples.iter().cycle().skip(1);
    for (&current, &next) in samples.iter().zip(successors) {
        let (current, next) = (u128::from(current), u128::from(next));
        sums.products = sums.products.checked_add(current * next)?;
        sums.squares = sums.squares.checked_add(current * current)?;
        sums.values = sums.values.checked_add(current)?;
    }
    Some(sums)
}

fn float_coefficient(samples: &[u64]) -> f64 {
    let n = samples.len() as f64;
    let successors = samples.iter().cycle().skip(1);
    let (mut products, mut squares, mut values) = (0.0, 0.0, 0.0);
    for (&current, &next) in samples.iter().zip(successors) {
        let (current, next) = (current as f64, next as f64);
        products += current * next;
        squares += current * current;
        values += current;
    }
    (n * products - values * values) / (n * squares - values * values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_sequence_is_nan() {
        assert!(serial_correlation_of(&[42; 200]).is_nan());
        assert!(serial_correlation_of(&[0; 200]).is_nan());
    }

    #[test]
    fn test_empty_sequence_is_nan() {
        assert!(serial_correlation_of(&[]).is_nan());
    }

    #[test]
    fn test_alternating_sequence_is_negative_one() {
        let samples: Vec<u64> = (0..200).map(|i| i % 2).collect();
        assert_relative_eq!(serial_correlation_of(&samples), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_cyclic_pairing_wraps_around() {
        // Pairs (1,2), (2,3), (3,1): products 2 + 6 + 3 = 11.
        // n=3, sum=6, squares=14: (33 - 36) / (42 - 36) = -0.5.
        assert_relative_eq!(serial_correlation_of(&[1, 2, 3]), -0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_large_values_fall_back_to_float() {
        let samples = [u64::MAX, u64::MAX - 1, u64::MAX, u64::MAX - 1];
        assert!(exact_sums(&samples).is_none());
        // Both values round to 2^64 as f64, so the sequence degenerates.
        assert!(serial_correlation_of(&samples).is_nan());
    }

    #[test]
    fn test_exact_and_float_paths_agree() {
        let samples: Vec<u64> = (0..200).map(|i| (i * i * 31 + 7) % 263).collect();
        let exact = exact_sums(&samples).map(|sums| sums.coefficient());
        assert_relative_eq!(
            exact.unwrap_or(f64::NAN),
            float_coefficient(&samples),
            epsilon = 1e-9
        );
    }
}
