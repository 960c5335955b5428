//! Core record types.
//!
//! Raw records mirror the scraped corpus; clean records are what gets written
//! back out after filtering and renaming.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sequential identifier assigned to a clean record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SongId(pub u64);

impl SongId {
    /// Create a new `SongId`.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SongId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for SongId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A song entry as stored in the source corpus.
///
/// All three fields are required; a missing one fails the whole batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Song title.
    pub song_name: String,
    /// Credited performers.
    pub singer_name: Vec<String>,
    /// Lyric text with escaped (`\\n`) line breaks.
    pub lyric: String,
}

/// A song entry after filtering, renaming, lyric cleaning and numbering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanRecord {
    /// Position-derived identifier.
    pub id: SongId,
    /// Song title.
    pub name: String,
    /// The single credited performer.
    pub artist: String,
    /// Cleaned lyric with real newlines.
    pub lyric: String,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn raw_record_ignores_unknown_keys() {
        let json = r#"{"song_name":"晴天","singer_name":["周杰伦"],"lyric":"a\\nb","album":"叶惠美"}"#;
        let rec: RawRecord = serde_json::from_str(json).unwrap();
        assert_eq!(rec.song_name, "晴天");
        assert_eq!(rec.singer_name, vec!["周杰伦".to_string()]);
        assert_eq!(rec.lyric, "a\\nb");
    }

    #[test]
    fn raw_record_requires_lyric() {
        let json = r#"{"song_name":"晴天","singer_name":["周杰伦"]}"#;
        let err = serde_json::from_str::<RawRecord>(json).unwrap_err();
        assert!(err.to_string().contains("lyric"));
    }

    #[test]
    fn clean_record_serializes_id_as_integer() {
        let rec = CleanRecord {
            id: SongId::new(26),
            name: "晴天".to_string(),
            artist: "周杰伦".to_string(),
            lyric: "第一句\n第二句".to_string(),
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["id"], 26);
        assert_eq!(value["lyric"], "第一句\n第二句");
    }
}
