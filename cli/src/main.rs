use clap::Parser;
use epubinfo_cli::Cli;
use epubinfo_cli::command::Commands;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.commands {
        Commands::Show(show) => show.show(),
        Commands::Codes(codes) => codes.codes(),
    }
}
