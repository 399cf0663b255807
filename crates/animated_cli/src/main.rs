//! Animated Code Generator CLI
//!
//! Prints the SwiftUI `Animated` overload set for an arity:
//!
//! ```text
//! animated-codegen            # two-argument overloads (16 functions)
//! animated-codegen 4 --out Sources/Animated/AnimatedFourArgs.swift
//! animated-codegen 4 --out Sources/Animated/AnimatedFourArgs.swift --check
//! ```
//!
//! Generation happens entirely in memory; nothing is written unless the whole
//! run succeeds.

mod config;
mod output;

use animated_codegen::{Arity, Generator};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::config::CodegenConfig;
use crate::output::Destination;

/// Generate multi-source Animated overloads
#[derive(Parser, Debug)]
#[command(name = "animated-codegen")]
#[command(about = "Generate SwiftUI Animated overloads for N animatable sources")]
#[command(version)]
struct Cli {
    /// Number of animatable sources per overload (default: 2)
    #[arg(allow_negative_numbers = true)]
    arity: Option<i64>,

    /// Configuration file (default: ./animated.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Fail if the file given with --out differs from fresh output; write nothing
    #[arg(long, requires = "out")]
    check: bool,

    /// Only render the given combination indices
    #[arg(long, value_name = "POINTER")]
    only: Vec<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    try_main(cli).map_err(|err| {
        tracing::error!("{err:#}");
        err
    })
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn try_main(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let text = render(&cli, config)?;

    let destination = match (&cli.out, cli.check) {
        (Some(path), true) => Destination::Check(path),
        (Some(path), false) => Destination::File(path),
        (None, _) => Destination::Stdout,
    };
    output::emit(&text, destination)
}

fn load_config(cli: &Cli) -> Result<CodegenConfig> {
    match &cli.config {
        Some(path) => CodegenConfig::load(path),
        None => {
            let cwd = std::env::current_dir().context("Failed to resolve working directory")?;
            CodegenConfig::load_from_dir(&cwd)
        }
    }
}

fn resolve_arity(cli: &Cli, config: &CodegenConfig) -> Result<Arity> {
    match cli.arity.or(config.generator.arity) {
        Some(raw) => Ok(Arity::new(raw)?),
        None => Ok(Arity::DEFAULT),
    }
}

/// Produce the complete output blob, newline-terminated
fn render(cli: &Cli, config: CodegenConfig) -> Result<String> {
    let arity = resolve_arity(cli, &config)?;
    tracing::info!(
        "Generating {} overloads for arity {}",
        arity.combination_count(),
        arity
    );

    let generator = Generator::new(config.style);
    let text = if cli.only.is_empty() {
        generator.generate(arity)
    } else {
        generator.generate_selected(arity, &cli.only)?
    };
    Ok(output::finish(text))
}
