//! # Statistical Diagnostics
//!
//! Two classical tests of a generator's output, both operating on any
//! [`Generator`](crate::generators::Generator) and both resetting it before
//! sampling so results are reproducible:
//!
//! - [`chi_square`]: goodness-of-fit of the value distribution to uniform
//! - [`serial_correlation`]: Knuth's coefficient between successive values
//!
//! [`assess`] runs both and adds a chi-square p-value.
//!
//! ## Usage Example
//!
//! ```rust
//! use prng_core::diagnostics::{chi_square_with, serial_correlation, DiagnosticConfig};
//! use prng_core::PowerOfTwoGenerator;
//!
//! let mut rng = PowerOfTwoGenerator::new();
//! let config = DiagnosticConfig::builder().sample_size(256).build().unwrap();
//!
//! // A full period of a full-period generator is perfectly flat.
//! let statistic = chi_square_with(&mut rng, &config).unwrap();
//! assert!(statistic < 0.5);
//!
//! let coefficient = serial_correlation(&mut rng);
//! assert!(coefficient.abs() < 0.1);
//! ```

mod chi_square;
mod config;
mod report;
mod serial;

pub use chi_square::{chi_square, chi_square_statistic, chi_square_with};
pub use config::{
    DiagnosticConfig, DiagnosticConfigBuilder, DEFAULT_BUCKET_COUNT, DEFAULT_SAMPLE_SIZE,
};
pub use report::{assess, QualityReport};
pub use serial::{serial_correlation, serial_correlation_of, serial_correlation_with};
