//! Journal Guru command-line entry point.

use clap::Parser;
use journal_guru::cli::{
    Cli, Commands, handle_choices_command, handle_compose_command, handle_serve_command,
};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    journal_guru_core::init_tracing();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Serve(args) => handle_serve_command(args).await,
        Commands::Compose(args) => handle_compose_command(args).await,
        Commands::Choices => handle_choices_command(),
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
