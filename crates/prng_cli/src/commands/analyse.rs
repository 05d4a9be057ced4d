//! Analyse command implementation
//!
//! Runs both diagnostics against one generator and prints a quality report.

use std::io::Write;

use prng_core::{assess, DiagnosticConfig, GeneratorKind, QualityReport};
use tracing::{info, warn};

use crate::config::OutputFormat;
use crate::Result;

/// Significance level used for the verdict column.
const SIGNIFICANCE: f64 = 0.05;

/// Run the analyse command
pub fn run(
    kind: GeneratorKind,
    config: &DiagnosticConfig,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<()> {
    info!(
        generator = %kind,
        sample_size = config.sample_size(),
        buckets = config.bucket_count(),
        "Starting analysis"
    );

    let mut generator = kind.build();
    let report = assess(generator.as_mut(), config)?;
    if !report.serial_correlation.is_finite() {
        warn!(generator = %kind, "Serial correlation is not finite; sample is degenerate");
    }

    match format {
        OutputFormat::Json => {
            info!("Outputting report as JSON...");
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
        OutputFormat::Table => {
            info!("Outputting report as table...");
            write_table(&report, out)?;
        }
    }

    info!("Analysis complete");
    Ok(())
}

/// Writes the report as a two-column box table.
pub fn write_table(report: &QualityReport, out: &mut impl Write) -> Result<()> {
    let verdict = if report.rejects_uniformity(SIGNIFICANCE) {
        "reject"
    } else {
        "accept"
    };
    let rows = [
        ("Generator", report.generator.clone()),
        ("Modulus", report.modulus.to_string()),
        ("Samples", report.sample_size.to_string()),
        ("Buckets", report.bucket_count.to_string()),
        ("Chi-square", format!("{:.4}", report.chi_square)),
        ("Degrees of freedom", report.degrees_of_freedom.to_string()),
        ("p-value", format!("{:.4}", report.p_value)),
        ("Uniform at 5%", verdict.to_string()),
        ("Serial correlation", format!("{:.6}", report.serial_correlation)),
    ];

    writeln!(out, "┌────────────────────┬──────────────┐")?;
    writeln!(out, "│ {:<18} │ {:>12} │", "Metric", "Value")?;
    writeln!(out, "├────────────────────┼──────────────┤")?;
    for (metric, value) in rows {
        writeln!(out, "│ {:<18} │ {:>12} │", metric, value)?;
    }
    writeln!(out, "└────────────────────┴──────────────┘")?;
    Ok(())
}
