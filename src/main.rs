//! `songprep` - filter and normalize a scraped song lyric corpus.
//!
//! Reads `data/music.json` and writes `data/music_processed.json`, both in the
//! `data` directory beside the executable.

use anyhow::Context;
use songprep::config::Config;
use songprep::services::runner;

fn init_tracing() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    // Logs go to stderr so the summary on stdout stays clean.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::default();
    tracing::debug!(
        "{} {} reading {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.input_path.display()
    );

    let summary = runner::run(&config)
        .with_context(|| format!("failed to process {}", config.input_path.display()))?;

    println!("Original records: {}", summary.report.input);
    println!("Processed records: {}", summary.report.output);
    println!("Processed data saved to: {}", summary.output_path.display());

    Ok(())
}
