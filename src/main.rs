//! docsite - load, validate and export documentation site configuration.

mod cli;
mod config;
mod export;
mod link;
mod logger;
mod utils;

use anyhow::{Context, Result};
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
    logger::set_verbose(cli.verbose);

    let cwd = std::env::current_dir().context("Failed to get current working directory")?;

    if let Commands::Init { name, dry } = &cli.command {
        let root = name.as_ref().map_or_else(|| cwd.clone(), |name| cwd.join(name));
        return cli::init::new_site(&root, *dry);
    }

    let config_name = utils::path::expand_tilde(&cli.config);
    let config = SiteConfig::locate_and_load(&config_name, &cwd, cli.profile.as_deref())?;
    debug!("config"; "loaded {}", config.config_path.display());

    match &cli.command {
        Commands::Init { .. } => unreachable!("handled above"),
        Commands::Check { no_docs } => cli::check::check_site(&config, !no_docs),
        Commands::Show { pretty, output } => {
            cli::show::show_config(&config, *pretty, output.as_deref())
        }
        Commands::Links => cli::links::print_links(&config),
        Commands::Profiles => {
            cli::links::print_profiles(&config);
            Ok(())
        }
    }
}
