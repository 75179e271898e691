use anyhow::Result;
use playlist_report_core::{ReportConfig, parse_report_toml};
use playlist_report_parser::parse_file;
use playlist_report_reporter::render_report;
use playlist_report_writer::write_report;
use std::path::PathBuf;
use tracing::info;

pub struct Options {
    pub input: PathBuf,
    pub output: PathBuf,
    pub config: Option<PathBuf>,
    pub corrected_labels: bool,
}

/// Parse the library export and write the report.
///
/// Nothing is written unless the whole export parses.
pub fn run(options: Options) -> Result<()> {
    let mut config = match &options.config {
        Some(path) => {
            info!(path = %path.display(), "loading report configuration");
            parse_report_toml(path)?
        }
        None => ReportConfig::default(),
    };
    if options.corrected_labels {
        config.corrected_labels = true;
    }

    println!("📖 Reading library export...");
    println!("   Source: {}", options.input.display());

    let songs = parse_file(&options.input)?;
    println!("✓ Parsed {} songs", songs.len());

    let report = render_report(&songs, &config);
    write_report(&options.output, &report)?;

    println!("✓ Report written to {}", options.output.display());
    Ok(())
}
