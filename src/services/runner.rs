//! End-to-end batch run: read, transform, write.

use std::path::PathBuf;
use std::time::Instant;

use crate::config::Config;
use crate::error::Result;
use crate::services::transform::{BatchTransformer, ProcessReport};
use crate::utils::json_io::{read_records, write_records};

/// Outcome of a completed run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// Counts gathered while processing.
    pub report: ProcessReport,
    /// Where the processed records were written.
    pub output_path: PathBuf,
}

/// Run one batch as described by `config`.
///
/// Nothing is written unless reading and processing both succeed.
pub fn run(config: &Config) -> Result<RunSummary> {
    config.validate()?;

    let start = Instant::now();
    let raw = read_records(&config.input_path)?;
    let output = BatchTransformer::from_config(config).process(&raw);
    write_records(&config.output_path, &output.records)?;

    let elapsed = start.elapsed();
    tracing::info!(
        multiple_artists = output.report.multiple_artists,
        no_artist = output.report.no_artist,
        rejected_name = output.report.rejected_name,
        empty_lyric = output.report.empty_lyric,
        "Finished batch in {elapsed:?}"
    );

    Ok(RunSummary {
        report: output.report,
        output_path: config.output_path.clone(),
    })
}
