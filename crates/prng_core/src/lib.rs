//! # prng_core: Deterministic Generators and Their Diagnostics
//!
//! ## Core Layer Role
//!
//! prng_core is the bottom layer of the workspace, providing:
//! - The [`Generator`] contract (`generators`)
//! - Two linear-congruential generators: [`PowerOfTwoGenerator`] and [`PrimeGenerator`]
//! - Knuth's algorithm M combinator: [`ShuffledGenerator`]
//! - Chi-square and serial-correlation diagnostics (`diagnostics`)
//! - Error types: [`GeneratorError`], [`DiagnosticError`], [`ConfigError`] (`error`)
//!
//! ## Determinism
//!
//! Every generator starts from a fixed state and draws no external entropy.
//! After `reset()` the same sequence is produced again, which is what the
//! diagnostics rely on: each diagnostic resets the generator before sampling.
//!
//! ## Usage Examples
//!
//! ```rust
//! use prng_core::{chi_square, serial_correlation, Generator};
//! use prng_core::{PowerOfTwoGenerator, PrimeGenerator, ShuffledGenerator};
//!
//! let mut lcg = PowerOfTwoGenerator::new();
//! assert_eq!(lcg.produce_next(), 66);
//! assert_eq!(lcg.modulus(), 256);
//!
//! let mut shuffled = ShuffledGenerator::new(PowerOfTwoGenerator::new(), PrimeGenerator::new());
//! let statistic = chi_square(&mut shuffled).unwrap();
//! assert!(statistic >= 0.0);
//!
//! let correlation = serial_correlation(&mut shuffled);
//! assert!(correlation.abs() < 1.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for [`QualityReport`]

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod diagnostics;
pub mod error;
pub mod generators;

pub use diagnostics::{
    assess, chi_square, chi_square_with, serial_correlation, serial_correlation_with,
    DiagnosticConfig, QualityReport,
};
pub use error::{ConfigError, DiagnosticError, GeneratorError};
pub use generators::{
    Generator, GeneratorKind, PowerOfTwoGenerator, PrimeGenerator, ShuffledGenerator,
};
