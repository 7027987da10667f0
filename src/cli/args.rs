//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Documentation site configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "docsite.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Profile to merge over the base configuration
    #[arg(short, long, global = true)]
    pub profile: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a starter docsite.toml
    #[command(visible_alias = "i")]
    Init {
        /// Site directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the template to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Validate the configuration and check navbar doc IDs
    #[command(visible_alias = "c")]
    Check {
        /// Skip scanning the docs directory for doc IDs
        #[arg(long)]
        no_docs: bool,
    },

    /// Print the configuration as generator JSON
    #[command(visible_alias = "s")]
    Show {
        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Print every navbar and footer entry with its absolute URL
    #[command(visible_alias = "l")]
    Links,

    /// List profiles declared in the config file
    Profiles,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_profile_after_subcommand() {
        let cli = Cli::parse_from(["docsite", "show", "--pretty", "-p", "staging"]);
        assert_eq!(cli.profile.as_deref(), Some("staging"));
        assert!(matches!(cli.command, Commands::Show { pretty: true, .. }));
        assert_eq!(cli.config, PathBuf::from("docsite.toml"));
    }

    #[test]
    fn test_init_dry() {
        let cli = Cli::parse_from(["docsite", "init", "site", "--dry"]);
        match cli.command {
            Commands::Init { name, dry } => {
                assert_eq!(name, Some(PathBuf::from("site")));
                assert!(dry);
            }
            _ => unreachable!(),
        }
    }
}
