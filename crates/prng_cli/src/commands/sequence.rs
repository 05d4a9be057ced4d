//! Sequence command implementation
//!
//! Prints consecutive values of a freshly built generator.

use std::io::Write;

use prng_core::{DiagnosticError, Generator, GeneratorKind};
use tracing::info;

use crate::Result;

/// Run the sequence command
pub fn run(kind: GeneratorKind, length: usize, out: &mut impl Write) -> Result<()> {
    info!(generator = %kind, length, "Generating sequence");

    let mut generator = kind.build();
    write_sequence(generator.as_mut(), length, out)?;

    info!("Sequence complete");
    Ok(())
}

/// Writes `length` values separated by `", "` and ends the line.
pub fn write_sequence(
    generator: &mut dyn Generator,
    length: usize,
    out: &mut impl Write,
) -> Result<()> {
    let mut values = vec![0u64; length];
    generator
        .try_fill(&mut values)
        .map_err(DiagnosticError::from)?;

    let line = values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(out, "{}", line)?;
    Ok(())
}
