//! Onboard CLI - GitHub Actions entry point for the onboarding bot
//!
//! Invites the `@username` named in an issue title to the target repository
//! and answers the issue.

mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use onboard_core::Settings;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{ParseArgs, RunArgs};

/// Onboard: invite issue requesters as repository collaborators
#[derive(Parser, Debug)]
#[command(name = "onboard")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Settings file (defaults to ~/.config/onboard/config.toml)
    #[arg(long, global = true, env = "ONBOARD_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,

    /// Arguments for the default `run` command
    #[command(flatten)]
    run: RunArgs,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer the issue in the triggering event (default)
    #[command(visible_alias = "r")]
    Run(RunArgs),

    /// Print the username an issue title would be read as
    Parse(ParseArgs),

    /// Show current configuration
    Config,

    /// Show version information
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing
    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Run failed");
            println!("::error::{}", escape_annotation(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Version) => {
            println!("onboard {}", env!("CARGO_PKG_VERSION"));
        }
        Some(Commands::Parse(args)) => {
            args.execute()?;
        }
        Some(Commands::Config) => {
            let settings = Settings::load(cli.config.as_deref())?;
            commands::show_settings(&settings, cli.config.as_deref())?;
        }
        Some(Commands::Run(args)) => {
            args.execute(Settings::load(cli.config.as_deref())?).await?;
        }
        None => {
            cli.run.execute(Settings::load(cli.config.as_deref())?).await?;
        }
    }

    Ok(())
}

/// Escape a message for a GitHub Actions `::error::` workflow command
fn escape_annotation(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
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
    fn test_bare_invocation_runs() {
        let cli = Cli::try_parse_from(["onboard", "--target-repo", "acme/handbook", "--dry-run"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.run.dry_run);
        assert_eq!(cli.run.target_repo.as_deref(), Some("acme/handbook"));
    }

    #[test]
    fn test_parse_subcommand() {
        let cli = Cli::try_parse_from(["onboard", "parse", "Add @jane"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Parse(ref a)) if a.title == "Add @jane"));
    }

    #[test]
    fn test_escape_annotation() {
        assert_eq!(escape_annotation("50% done\nnext"), "50%25 done%0Anext");
    }
}
