//! Diagnostic run configuration.
//!
//! This module provides the sample-size and bucket-count settings shared by
//! the chi-square and serial-correlation diagnostics, with validation at
//! build time.

use crate::error::ConfigError;

/// Number of samples drawn by default.
pub const DEFAULT_SAMPLE_SIZE: usize = 200;

/// Number of chi-square buckets by default (9 degrees of freedom).
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Diagnostic configuration.
///
/// Immutable once built. Use [`DiagnosticConfigBuilder`] to construct
/// non-default instances.
///
/// # Examples
///
/// ```rust
/// use prng_core::DiagnosticConfig;
///
/// let config = DiagnosticConfig::builder()
///     .sample_size(1_000)
///     .bucket_count(16)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.sample_size(), 1_000);
/// assert_eq!(config.degrees_of_freedom(), 15);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiagnosticConfig {
    /// Number of values drawn after the reset.
    sample_size: usize,
    /// Number of equal-width chi-square buckets.
    bucket_count: usize,
}

impl Default for DiagnosticConfig {
    fn default() -> Self {
        Self {
            sample_size: DEFAULT_SAMPLE_SIZE,
            bucket_count: DEFAULT_BUCKET_COUNT,
        }
    }
}

impl DiagnosticConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> DiagnosticConfigBuilder {
        DiagnosticConfigBuilder::default()
    }

    /// Returns the number of samples drawn.
    #[inline]
    pub fn sample_size(&self) -> usize {
        self.sample_size
    }

    /// Returns the number of chi-square buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.bucket_count
    }

    /// Returns `bucket_count - 1`.
    #[inline]
    pub fn degrees_of_freedom(&self) -> usize {
        self.bucket_count - 1
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `sample_size` is 0
    /// - `bucket_count` is less than 2
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_size == 0 {
            return Err(ConfigError::InvalidSampleSize(self.sample_size));
        }
        if self.bucket_count < 2 {
            return Err(ConfigError::InvalidBucketCount(self.bucket_count));
        }
        Ok(())
    }
}

/// Builder for [`DiagnosticConfig`].
///
/// Unset fields fall back to [`DEFAULT_SAMPLE_SIZE`] and
/// [`DEFAULT_BUCKET_COUNT`].
#[derive(Clone, Debug, Default)]
pub struct DiagnosticConfigBuilder {
    sample_size: Option<usize>,
    bucket_count: Option<usize>,
}

impl DiagnosticConfigBuilder {
    /// Sets the number of samples drawn.
    #[inline]
    pub fn sample_size(mut self, sample_size: usize) -> Self {
        self.sample_size = Some(sample_size);
        self
    }

    /// Sets the number of chi-square buckets.
    #[inline]
    pub fn bucket_count(mut self, bucket_count: usize) -> Self {
        self.bucket_count = Some(bucket_count);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if validation fails.
    pub fn build(self) -> Result<DiagnosticConfig, ConfigError> {
        let config = DiagnosticConfig {
            sample_size: self.sample_size.unwrap_or(DEFAULT_SAMPLE_SIZE),
            bucket_count: self.bucket_count.unwrap_or(DEFAULT_BUCKET_COUNT),
        };
        config.validate()?;
        Ok(config)
    }
}
