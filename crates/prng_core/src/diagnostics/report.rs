//! Aggregated quality report for a single generator.

use statrs::distribution::{ChiSquared, ContinuousCDF};
use tracing::debug;

use super::chi_square::chi_square_with;
use super::config::DiagnosticConfig;
use super::serial::serial_correlation_with;
use crate::error::DiagnosticError;
use crate::generators::Generator;

/// Both diagnostics for one generator, plus the chi-square upper-tail
/// probability under the uniform hypothesis.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityReport {
    /// Generator label.
    pub generator: String,
    /// Generator modulus.
    pub modulus: u64,
    /// Samples drawn per diagnostic.
    pub sample_size: usize,
    /// Chi-square bucket count.
    pub bucket_count: usize,
    /// Chi-square degrees of freedom.
    pub degrees_of_freedom: usize,
    /// Chi-square statistic.
    pub chi_square: f64,
    /// `P(X >= chi_square)` for `X ~ ChiSquared(degrees_of_freedom)`.
    pub p_value: f64,
    /// Serial-correlation coefficient; NaN for degenerate samples.
    pub serial_correlation: f64,
}

impl QualityReport {
    /// Whether the chi-square statistic rejects uniformity at `significance`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use prng_core::{assess, DiagnosticConfig, PowerOfTwoGenerator};
    ///
    /// let mut rng = PowerOfTwoGenerator::new();
    /// let report = assess(&mut rng, &DiagnosticConfig::default()).unwrap();
    /// assert!(!report.rejects_uniformity(0.05));
    /// ```
    pub fn rejects_uniformity(&self, significance: f64) -> bool {
        self.p_value < significance
    }
}

/// Runs both diagnostics and assembles a [`QualityReport`].
///
/// # Errors
///
/// Propagates [`DiagnosticError`] from the chi-square run, and returns
/// [`DiagnosticError::Distribution`] if the reference distribution cannot
/// be built.
pub fn assess<G: Generator + ?Sized>(
    generator: &mut G,
    config: &DiagnosticConfig,
) -> Result<QualityReport, DiagnosticError> {
    let chi_square = chi_square_with(generator, config)?;
    let serial_correlation = serial_correlation_with(generator, config)?;

    let degrees_of_freedom = config.degrees_of_freedom();
    let distribution = ChiSquared::new(degrees_of_freedom as f64)
        .map_err(|e| DiagnosticError::Distribution(e.to_string()))?;
    let p_value = distribution.sf(chi_square);

    let report = QualityReport {
        generator: generator.name().to_string(),
        modulus: generator.modulus(),
        sample_size: config.sample_size(),
        bucket_count: config.bucket_count(),
        degrees_of_freedom,
        chi_square,
        p_value,
        serial_correlation,
    };
    debug!(
        generator = %report.generator,
        chi_square = report.chi_square,
        p_value = report.p_value,
        serial_correlation = report.serial_correlation,
        "quality report assembled"
    );
    Ok(report)
}
