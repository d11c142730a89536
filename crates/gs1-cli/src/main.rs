//! # gs1vc CLI Entry Point
//!
//! Assembles subcommands and dispatches to handler modules.

use std::process::ExitCode;

use clap::Parser;

use gs1_cli::link::{run_parse_link, ParseLinkArgs};
use gs1_cli::verify::{run_verify, run_verify_presentation, VerifyArgs, VerifyPresentationArgs};

/// GS1 credential toolkit.
///
/// Parses GS1 Digital Links and verifies GS1 license credential chains.
/// Exits with status 0 when the input is valid and 1 otherwise.
#[derive(Parser, Debug)]
#[command(name = "gs1vc", version, about)]
struct Cli {
    /// Emit logs as JSON objects.
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Parse a GS1 Digital Link.
    ParseLink(ParseLinkArgs),
    /// Verify a credential and its chain.
    Verify(VerifyArgs),
    /// Verify every credential in a presentation.
    VerifyPresentation(VerifyPresentationArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    gs1_cli::logging::init(cli.json_logs);

    let mut stdout = std::io::stdout().lock();
    let valid = match &cli.command {
        Commands::ParseLink(args) => run_parse_link(args, &mut stdout)?,
        Commands::Verify(args) => run_verify(args, &mut stdout).await?,
        Commands::VerifyPresentation(args) => run_verify_presentation(args, &mut stdout).await?,
    };

    Ok(if valid { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
