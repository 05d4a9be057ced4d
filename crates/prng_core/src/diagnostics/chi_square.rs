//! Chi-square goodness-of-fit against the uniform distribution.
//!
//! The output range `[0, modulus)` is split into equal-width buckets; the
//! statistic is `Σ (observed - expected)^2 / expected` with
//! `expected = samples / buckets`. Smaller is closer to uniform. Comparing
//! against a critical value is left to the caller (see
//! [`super::QualityReport`] for a p-value).

use tracing::debug;

use super::config::DiagnosticConfig;
use crate::error::{ConfigError, DiagnosticError};
use crate::generators::Generator;

/// Chi-square statistic over the default 200 samples and 10 buckets.
///
/// The generator is reset before sampling.
///
/// # Errors
///
/// - [`DiagnosticError::InvalidModulus`] if the generator reports modulus 0
/// - [`DiagnosticError::SampleOutOfRange`] if a sample is not below the modulus
/// - [`DiagnosticError::Generator`] if drawing a sample fails
///
/// # Examples
///
/// ```rust
/// use prng_core::{chi_square, PowerOfTwoGenerator};
///
/// let mut rng = PowerOfTwoGenerator::new();
/// let statistic = chi_square(&mut rng).unwrap();
/// assert!((statistic - 2.0).abs() < 1e-9);
/// ```
pub fn chi_square<G: Generator + ?Sized>(generator: &mut G) -> Result<f64, DiagnosticError> {
    chi_square_with(generator, &DiagnosticConfig::default())
}

/// Chi-square statistic with an explicit sample size and bucket count.
///
/// # Errors
///
/// As [`chi_square`], plus [`DiagnosticError::Config`] for an invalid
/// configuration.
pub fn chi_square_with<G: Generator + ?Sized>(
    generator: &mut G,
    config: &DiagnosticConfig,
) -> Result<f64, DiagnosticError> {
    config.validate()?;
    let modulus = generator.modulus();
    if modulus == 0 {
        return Err(DiagnosticError::InvalidModulus(modulus));
    }

    generator.reset();
    let mut samples = vec![0u64; config.sample_size()];
    generator.try_fill(&mut samples)?;

    let statistic = chi_square_statistic(&samples, modulus, config.bucket_count())?;
    debug!(
        generator = generator.name(),
        samples = samples.len(),
        buckets = config.bucket_count(),
        statistic,
        "chi-square computed"
    );
    Ok(statistic)
}

/// Chi-square statistic of pre-drawn samples.
///
/// Bucket `i` covers `[i * w, (i + 1) * w)` with `w = modulus / bucket_count`.
/// An empty sample yields NaN.
///
/// # Errors
///
/// - [`DiagnosticError::Config`] if `bucket_count < 2`
/// - [`DiagnosticError::InvalidModulus`] if `modulus` is 0
/// - [`DiagnosticError::SampleOutOfRange`] if a sample does not map to a bucket
///
/// # Examples
///
/// ```rust
/// use prng_core::diagnostics::chi_square_statistic;
///
/// let samples: Vec<u64> = (0..200).map(|i| i % 10).collect();
/// assert_eq!(chi_square_statistic(&samples, 10, 10).unwrap(), 0.0);
/// ```
pub fn chi_square_statistic(
    samples: &[u64],
    modulus: u64,
    bucket_count: usize,
) -> Result<f64, DiagnosticError> {
    if bucket_count < 2 {
        return Err(ConfigError::InvalidBucketCount(bucket_count).into());
    }
    if modulus == 0 {
        return Err(DiagnosticError::InvalidModulus(modulus));
    }

    let mut observed = vec![0usize; bucket_count];
    for &sample in samples {
        if sample >= modulus {
            return Err(DiagnosticError::SampleOutOfRange { sample, modulus });
        }
        observed[bucket_index(sample, modulus, bucket_count)] += 1;
    }

    let expected = samples.len() as f64 / bucket_count as f64;
    Ok(observed
        .iter()
        .map(|&count| {
            let deviation = count as f64 - expected;
            deviation * deviation / expected
        })
        .sum())
}

/// `floor(sample / (modulus / bucket_count))` in exact integer arithmetic.
///
/// Requires `sample < modulus`, which keeps the result below `bucket_count`.
#[inline]
fn bucket_index(sample: u64, modulus: u64, bucket_count: usize) -> usize {
    (u128::from(sample) * bucket_count as u128 / u128::from(modulus)) as usize
}
