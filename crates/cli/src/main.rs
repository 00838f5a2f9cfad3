// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # santify
//!
//! Draws a Secret Santa assignment from a JSON configuration, optionally
//! emails every giver their receiver and writes the result to disk.
//!
//! - `santify generate family.json -o out/ -e` draws and stores an encrypted record
//! - `santify generate family.json -m` draws and emails every participant
//! - `santify reveal out/mapping_smith_2025.json --giver Anna` looks one pair up

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

mod generate;
mod prompt;
mod reveal;

#[cfg(test)]
mod tests;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{Report, Result};
use santify::CoreError;
use santify_domain::DEFAULT_MAX_ITERATIONS;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(exit_code(&err));
        }
    }
    Ok(())
}

/// Exit status for input that has to be fixed before a rerun can succeed.
const EXIT_CONFIGURATION: i32 = 2;

/// Exit status for every other failure, including an exhausted draw.
const EXIT_FAILURE: i32 = 1;

fn exit_code(err: &Report) -> i32 {
    match err.downcast_ref::<CoreError>() {
        Some(core) if core.is_configuration_error() => EXIT_CONFIGURATION,
        _ => EXIT_FAILURE,
    }
}

/// Santify - Secret Santa draws that remember previous years
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Draw a new assignment from a configuration file
    #[command(visible_alias = "g")]
    Generate(GenerateArgs),

    /// Print the assignments stored in a mapping file
    #[command(visible_alias = "r")]
    Reveal(RevealArgs),
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::Generate(args) => generate::run(&args),
            Self::Reveal(args) => reveal::run(&args),
        }
    }
}

#[derive(Clone, Debug, clap::Args)]
pub struct GenerateArgs {
    /// Path to the JSON configuration file
    pub config: PathBuf,

    /// Directory to write the mapping file into
    #[arg(short, long)]
    pub outdir: Option<PathBuf>,

    /// Print the mapping and send a single email to the sending account only
    #[arg(short, long)]
    pub debug: bool,

    /// Email every giver their receiver
    #[arg(short = 'm', long)]
    pub email: bool,

    /// Encrypt receiver names in the mapping file
    #[arg(short, long, requires = "outdir")]
    pub encrypt: bool,

    /// Number of permutations to try before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Seed to replay an earlier draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Send emails without asking for confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

#[derive(Clone, Debug, clap::Args)]
pub struct RevealArgs {
    /// Path to a mapping file written by `generate`
    pub file: PathBuf,

    /// Only print the receiver for this giver
    #[arg(long)]
    pub giver: Option<String>,
}
