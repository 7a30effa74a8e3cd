//! Addon checker CLI - validates addon packages before repository submission

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use addoncheck_cli::commands;

/// Addon checker - packaging rule checks for addon repositories
#[derive(Parser)]
#[command(name = "addoncheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check icon, fanart, screenshots and bundled images of an addon
    Artwork {
        /// Path to the addon root directory (containing addon.xml)
        addon_dir: String,

        /// Path to a JSON policy file overriding accepted image sizes
        #[arg(long)]
        policy: Option<String>,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,

        /// Treat warnings as failures
        #[arg(long)]
        strict: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let result = match cli.command {
        Commands::Artwork {
            addon_dir,
            policy,
            json,
            strict,
        } => commands::artwork::run(&addon_dir, policy.as_deref(), json, strict),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_artwork() {
        let cli = Cli::try_parse_from(["addoncheck", "artwork", "plugin.video.example"]).unwrap();
        assert!(!cli.verbose);
        match cli.command {
            Commands::Artwork {
                addon_dir,
                policy,
                json,
                strict,
            } => {
                assert_eq!(addon_dir, "plugin.video.example");
                assert!(policy.is_none());
                assert!(!json);
                assert!(!strict);
            }
        }
    }

    #[test]
    fn test_cli_parses_artwork_with_flags() {
        let cli = Cli::try_parse_from([
            "addoncheck",
            "artwork",
            "addons/script.module.example",
            "--policy",
            "policy.json",
            "--json",
            "--strict",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Artwork {
                addon_dir,
                policy,
                json,
                strict,
            } => {
                assert_eq!(addon_dir, "addons/script.module.example");
                assert_eq!(policy.as_deref(), Some("policy.json"));
                assert!(json);
                assert!(strict);
            }
        }
    }

    #[test]
    fn test_cli_requires_addon_dir() {
        assert!(Cli::try_parse_from(["addoncheck", "artwork"]).is_err());
    }
}
