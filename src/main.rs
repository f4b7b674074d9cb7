//! Folio - A static renderer for JSON-driven portfolio sites.

mod assemble;
mod cache;
mod cli;
mod config;
mod core;
mod element;
mod embed;
mod generator;
mod listing;
mod logger;
mod page;
mod render;
mod resolve;
mod source;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Build { .. } => cli::build::build_site(&config, false).map(|_| ()),
        Commands::Render { route, output } => {
            cli::render::render_route(route, output.as_deref(), &config)
        }
        Commands::Manifest { stdout } => cli::manifest::run_manifest(&config, *stdout),
        Commands::Query { args } => cli::query::run_query(args, &config),
    }
}
