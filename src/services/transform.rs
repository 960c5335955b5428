//! Record filtering and renaming.
//!
//! Turns raw corpus entries into numbered clean records. Filtering is total:
//! every record is either kept or counted under one exclusion reason.

use crate::config::Config;
use crate::lyrics::LyricCleaner;
use crate::services::filter::NameFilter;
use crate::types::{CleanRecord, RawRecord, SongId};

/// Counts gathered while processing a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessReport {
    /// Records read.
    pub input: usize,
    /// Records written.
    pub output: usize,
    /// Dropped for crediting more than one performer.
    pub multiple_artists: usize,
    /// Dropped for crediting no performer.
    pub no_artist: usize,
    /// Dropped by the song name filter.
    pub rejected_name: usize,
    /// Dropped because nothing but whitespace survived lyric cleaning.
    pub empty_lyric: usize,
}

impl ProcessReport {
    /// Total records excluded for any reason.
    pub const fn excluded(&self) -> usize {
        self.multiple_artists + self.no_artist + self.rejected_name + self.empty_lyric
    }
}

/// Result of processing a batch.
#[derive(Debug, Clone, Default)]
pub struct ProcessOutput {
    /// Surviving records in input order.
    pub records: Vec<CleanRecord>,
    /// Input/output and exclusion counts.
    pub report: ProcessReport,
}

/// Filters, renames and numbers raw records.
#[derive(Debug, Clone)]
pub struct BatchTransformer {
    cleaner: LyricCleaner,
    name_filter: NameFilter,
    start_id: u64,
}

impl Default for BatchTransformer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl BatchTransformer {
    /// Build a transformer from the marker lists and start id in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self {
            cleaner: LyricCleaner::new(config.lyric_markers.clone()),
            name_filter: config.name_filter.clone(),
            start_id: config.start_id,
        }
    }

    /// Process a batch of raw records.
    pub fn process(&self, records: &[RawRecord]) -> ProcessOutput {
        let mut report = ProcessReport {
            input: records.len(),
            ..ProcessReport::default()
        };

        let kept: Vec<(String, String, String)> = records
            .iter()
            .filter_map(|record| self.candidate(record, &mut report))
            .collect();

        let records: Vec<CleanRecord> = (self.start_id..)
            .zip(kept)
            .map(|(id, (name, artist, lyric))| CleanRecord {
                id: SongId::new(id),
                name,
                artist,
                lyric,
            })
            .collect();

        report.output = records.len();
        tracing::info!(
            input = report.input,
            output = report.output,
            excluded = report.excluded(),
            "Processed song records"
        );

        ProcessOutput { records, report }
    }

    /// Name, artist and cleaned lyric of a record that passes every filter.
    fn candidate(
        &self,
        record: &RawRecord,
        report: &mut ProcessReport,
    ) -> Option<(String, String, String)> {
        let artist = match record.singer_name.as_slice() {
            [artist] => artist,
            [] => {
                tracing::debug!(song = %record.song_name, "Skipping song with no credited artist");
                report.no_artist += 1;
                return None;
            }
            _ => {
                tracing::debug!(song = %record.song_name, "Skipping song with multiple artists");
                report.multiple_artists += 1;
                return None;
            }
        };

        if let Some(reason) = self.name_filter.rejection(&record.song_name) {
            tracing::debug!(song = %record.song_name, %reason, "Skipping song name");
            report.rejected_name += 1;
            return None;
        }

        let lyric = self.cleaner.clean(&record.lyric);
        if lyric.trim().is_empty() {
            tracing::debug!(song = %record.song_name, "Skipping song with empty lyric");
            report.empty_lyric += 1;
            return None;
        }

        Some((record.song_name.clone(), artist.clone(), lyric))
    }
}

/// Process records using the settings in `config`.
pub fn process_records(records: &[RawRecord], config: &Config) -> ProcessOutput {
    BatchTransformer::from_config(config).process(records)
}

/// Process records with the default markers and start id.
pub fn process_records_default(records: &[RawRecord]) -> ProcessOutput {
    BatchTransformer::default().process(records)
}
