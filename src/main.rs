//! Music Blog - site binary for the music review blog.
//!
//! Renders the site's pages (head metadata, structured data, layout chrome)
//! into static HTML and serves them locally for preview.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod embed;
mod generator;
mod logger;
mod page;
mod render;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, build::build_site};
use config::{SiteConfig, init_config};
use generator::{manifest::build_manifest, robots::build_robots, sitemap::build_sitemap};

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::setup_shutdown_handler()?;

    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = init_config(SiteConfig::load(cli)?);

    match &cli.command {
        Commands::Build { .. } => build_all(&config),
        Commands::Serve { .. } => serve_site(&config),
    }
}

/// Build the site plus the auxiliary artifacts.
fn build_all(config: &SiteConfig) -> Result<()> {
    build_site(config)?;

    // Generate sitemap and manifest in parallel
    let (sitemap_result, manifest_result) =
        rayon::join(|| build_sitemap(config), || build_manifest(config));

    sitemap_result?;
    manifest_result?;
    build_robots(config)?;
    Ok(())
}

/// Build once, then serve the output directory.
fn serve_site(config: &SiteConfig) -> Result<()> {
    build_all(config)?;

    let bound = cli::serve::bind_server(config)?;
    bound.run()
}
