//! Demo command implementation
//!
//! Walks every generator kind in turn: prints a sequence, then the
//! chi-square statistic and the serial correlation of a fresh sample.

use std::io::Write;

use prng_core::diagnostics::serial_correlation_with;
use prng_core::{chi_square_with, DiagnosticConfig, GeneratorKind};
use tracing::info;

use super::sequence::write_sequence;
use crate::Result;

/// Run the demo command
pub fn run(length: usize, config: &DiagnosticConfig, out: &mut impl Write) -> Result<()> {
    for kind in GeneratorKind::ALL {
        info!(generator = %kind, length, "Running demo");
        let mut generator = kind.build();

        writeln!(out, "Test for {}, size {}", generator.name(), length)?;
        write_sequence(generator.as_mut(), length, out)?;
        writeln!(out)?;

        let chi_square = chi_square_with(generator.as_mut(), config)?;
        writeln!(out, "Chi-square = {:.4}", chi_square)?;
        writeln!(out)?;

        let correlation = serial_correlation_with(generator.as_mut(), config)?;
        writeln!(out, "Serial correlation = {:.6}", correlation)?;
        writeln!(out)?;
    }

    info!("Demo complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(length: usize) -> String {
        let mut out = Vec::new();
        run(length, &DiagnosticConfig::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_demo_sections() {
        let output = render(4);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Test for power-of-two, size 4");
        assert_eq!(lines[1], "66, 159, 40, 173");
        assert_eq!(lines[3], "Chi-square = 2.0000");
        assert_eq!(lines[5], "Serial correlation = -0.015055");

        assert!(output.contains("Test for prime, size 4\n5, 25, 125, 99\n"));
        assert!(output.contains("Chi-square = 1.8000\n"));
        assert!(output.contains("Test for shuffled, size 4\n159, 119, 145, 11\n"));
        assert!(output.contains("Chi-square = 2.2000\n"));
        assert!(output.contains("Serial correlation = 0.187679\n"));
        assert!(output.contains("Serial correlation = 0.053525\n"));
    }

    #[test]
    fn test_demo_covers_every_generator() {
        let output = render(1);
        assert_eq!(output.matches("Test for ").count(), 3);
        assert_eq!(output.matches("Serial correlation = ").count(), 3);
    }
}
