mod commands;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "playlist-report")]
#[command(version, about = "Plain-text report for a tab-delimited music library export", long_about = None)]
struct Cli {
    /// Tab-delimited library export (first line is a header)
    input: PathBuf,

    /// Report file to write
    output: PathBuf,

    /// Report configuration (TOML)
    #[arg(short, long, env = "PLAYLIST_REPORT_CONFIG")]
    config: Option<PathBuf>,

    /// Label genre counts with their own genre name
    #[arg(long)]
    corrected_labels: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = commands::report::Options {
        input: cli.input,
        output: cli.output,
        config: cli.config,
        corrected_labels: cli.corrected_labels,
    };

    match commands::report::run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            let code = err
                .downcast_ref::<playlist_report_core::Error>()
                .map(playlist_report_core::Error::exit_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
