//! brainzcloud - a ListenBrainz companion CLI.
//!
//! Fetches recent listen history, enriches identified recordings with tag
//! metadata, and produces a bounded, weighted word list for an external
//! word-cloud layout renderer. Also provides now-playing lookup, grid-stats
//! chart art download, and token login.

pub mod brainz;
pub mod cli;
pub mod cloud;
pub mod config;
pub mod error;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(EnvFilter::from_default_env().add_directive("brainzcloud=info".parse().unwrap()))
        .init();

    cli::run_command(&args)
}
