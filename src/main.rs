//! svgstash - merge individual SVG files into a single `<symbol>` sprite.

#![allow(dead_code)]

mod cli;
mod config;
mod dom;
mod format;
mod logger;
mod merge;
mod preview;
mod sources;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::StashConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = StashConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { force } => cli::init::init_config(&config, *force),
        Commands::Build { build_args } => {
            logger::set_verbose(build_args.verbose);
            cli::build::build_sprite(&config)
        }
    }
}
