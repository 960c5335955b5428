//! Application configuration.
//!
//! Paths are fixed relative to the `data` directory beside the executable;
//! nothing is read from the command line or the environment. Tests build their
//! own `Config` pointing at fixture directories.

use std::path::{Path, PathBuf};

use crate::constants::{paths, records};
use crate::error::{Error, Result};
use crate::lyrics::LyricMarkers;
use crate::services::filter::NameFilter;

/// Configuration for a single batch run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw corpus to read
    pub input_path: PathBuf,
    /// Destination for processed records
    pub output_path: PathBuf,
    /// Identifier given to the first surviving record
    pub start_id: u64,
    /// Markers skipped while looking for the lyric body
    pub lyric_markers: LyricMarkers,
    /// Song name filter
    pub name_filter: NameFilter,
}

impl Config {
    /// Configuration reading and writing the standard file names in `dir`.
    pub fn with_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            input_path: dir.join(paths::INPUT_FILE),
            output_path: dir.join(paths::OUTPUT_FILE),
            ..Self::default()
        }
    }

    /// Check the configuration before any file is touched.
    pub fn validate(&self) -> Result<()> {
        if self.output_path.file_name().is_none() {
            return Err(Error::config(
                format!("output path {} has no file name", self.output_path.display()),
                "Point the output path at a file, not a directory",
            ));
        }
        self.lyric_markers.validate()?;
        self.name_filter.validate()?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        let data_dir = default_data_dir();
        Self {
            input_path: data_dir.join(paths::INPUT_FILE),
            output_path: data_dir.join(paths::OUTPUT_FILE),
            start_id: records::DEFAULT_START_ID,
            lyric_markers: LyricMarkers::default(),
            name_filter: NameFilter::default(),
        }
    }
}

/// The `data` directory next to the running executable.
///
/// Development builds live under `target/`, away from the checked-in data, so
/// when no `data` directory sits beside the executable the crate root's is
/// used instead.
pub fn default_data_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| data_dir_beside(&exe))
        .unwrap_or_else(|| Path::new(env!("CARGO_MANIFEST_DIR")).join(paths::DATA_DIR))
}

/// The `data` directory in the same folder as `exe`, if it exists.
fn data_dir_beside(exe: &Path) -> Option<PathBuf> {
    let dir = exe.parent()?.join(paths::DATA_DIR);
    dir.is_dir().then_some(dir)
}
