//! PRNG CLI - Command Line Driver for the Generator Family
//!
//! Prints generated sequences and runs the uniformity and independence
//! diagnostics from `prng_core`.
//!
//! # Commands
//!
//! - `prng sequence -g <kind>` - Print consecutive values of one generator
//! - `prng analyse -g <kind>` - Chi-square and serial-correlation report
//! - `prng demo` - Sequence and diagnostics for every generator
//!
//! # Configuration
//!
//! Settings come from, in order of precedence: command-line flags, `PRNG_*`
//! environment variables, a TOML file given with `--config`, then defaults.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use prng_core::GeneratorKind;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::{build_config, CliOverrides};

/// Deterministic PRNG family and diagnostics
#[derive(Parser)]
#[command(name = "prng")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging, takes precedence over RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML)
    #[arg(short, long, global = true, env = "PRNG_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print consecutive values of one generator
    Sequence {
        /// Generator (power-of-two, prime, shuffled)
        #[arg(short, long, default_value = "power-of-two")]
        generator: GeneratorKind,

        /// Number of values to print
        #[arg(short = 'n', long)]
        length: Option<usize>,
    },

    /// Run chi-square and serial-correlation diagnostics
    Analyse {
        /// Generator (power-of-two, prime, shuffled)
        #[arg(short, long, default_value = "power-of-two")]
        generator: GeneratorKind,

        /// Samples drawn per diagnostic
        #[arg(short, long)]
        sample_size: Option<usize>,

        /// Chi-square bucket count
        #[arg(short, long)]
        buckets: Option<usize>,

        /// Output format (table, json)
        #[arg(short, long)]
        format: Option<String>,
    },

    /// Print a sequence and both diagnostics for every generator
    Demo {
        /// Number of values printed per generator
        #[arg(short = 'n', long)]
        length: Option<usize>,
    },
}

/// `--verbose` forces debug; otherwise `RUST_LOG` wins over the configured level.
fn log_filter(verbose: bool, log_level: &str) -> EnvFilter {
    if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    }
}

fn init_tracing(filter: EnvFilter) {
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn overrides(cli: &Cli) -> CliOverrides {
    let mut overrides = CliOverrides {
        config_file: cli.config.clone(),
        log_level: cli.log_level.clone(),
        ..Default::default()
    };
    match &cli.command {
        Commands::Sequence { length, .. } | Commands::Demo { length } => {
            overrides.sequence_length = *length;
        }
        Commands::Analyse {
            sample_size,
            buckets,
            format,
            ..
        } => {
            overrides.sample_size = *sample_size;
            overrides.bucket_count = *buckets;
            overrides.format = format.clone();
        }
    }
    overrides
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&overrides(&cli))?;

    init_tracing(log_filter(cli.verbose, config.log_level.as_filter_str()));

    info!(
        log_level = %config.log_level,
        sequence_length = config.sequence_length,
        sample_size = config.sample_size,
        bucket_count = config.bucket_count,
        format = %config.format,
        "Configuration loaded"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Sequence { generator, .. } => {
            commands::sequence::run(generator, config.sequence_length, &mut out)
        }
        Commands::Analyse { generator, .. } => commands::analyse::run(
            generator,
            &config.diagnostic_config()?,
            config.format,
            &mut out,
        ),
        Commands::Demo { .. } => {
            commands::demo::run(config.sequence_length, &config.diagnostic_config()?, &mut out)
        }
    }
}
