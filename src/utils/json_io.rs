//! JSON corpus reading and writing.
//!
//! Output goes to a temporary file in the destination directory and is renamed
//! into place only once fully written, so a failed run never leaves a
//! truncated corpus behind.

use std::fs::Permissions;
use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};
use crate::types::{CleanRecord, RawRecord};

/// Read the raw corpus at `path`.
///
/// The whole file must be valid UTF-8 and every entry must carry all raw
/// record fields; any violation aborts with an error naming the file.
pub fn read_records(path: &Path) -> Result<Vec<RawRecord>> {
    let bytes = fs_err::read(path)?;
    let data = String::from_utf8(bytes)
        .map_err(|e| Error::parse(format!("invalid UTF-8: {e}"), path.to_path_buf()))?;
    let records: Vec<RawRecord> = serde_json::from_str(&data)
        .map_err(|e| Error::parse(e.to_string(), path.to_path_buf()))?;

    tracing::debug!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Write clean records to `path` as indented JSON with literal non-ASCII text.
///
/// An existing file keeps its permissions; a new one is created world-readable.
pub fn write_records(path: &Path, records: &[CleanRecord]) -> Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs_err::create_dir_all(dir)?;

    // tempfile errors already carry the directory path.
    let mut tmp = NamedTempFile::new_in(dir)?;
    let tmp_path = tmp.path().to_path_buf();
    write_json(tmp.as_file_mut(), records, &tmp_path)?;
    tmp.as_file()
        .sync_all()
        .map_err(|e| Error::io(e, tmp_path.clone()))?;

    if let Some(perms) = target_permissions(path) {
        tmp.as_file()
            .set_permissions(perms)
            .map_err(|e| Error::io(e, tmp_path))?;
    }

    tmp.persist(path)
        .map_err(|e| Error::io(e.error, path.to_path_buf()))?;

    tracing::debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}

/// Serialize `records` into `writer`, attributing write failures to `path`.
fn write_json<W: Write>(writer: W, records: &[CleanRecord], path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(writer);
    serde_json::to_writer_pretty(&mut writer, records).map_err(|e| {
        if e.is_io() {
            Error::io(e.into(), path.to_path_buf())
        } else {
            Error::serialize(e.to_string())
        }
    })?;
    writer.flush().map_err(|e| Error::io(e, path.to_path_buf()))
}

/// Permissions the output file should end up with.
fn target_permissions(path: &Path) -> Option<Permissions> {
    std::fs::metadata(path)
        .map(|meta| meta.permissions())
        .ok()
        .or_else(new_file_permissions)
}

#[cfg(unix)]
#[allow(clippy::unnecessary_wraps)]
fn new_file_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;

    // Temp files are created 0600; match a plain `File::create` under the usual umask.
    Some(Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
const fn new_file_permissions() -> Option<Permissions> {
    None
}
