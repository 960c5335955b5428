//! Application constants.
//!
//! Centralizes marker lists and fixed values so they can be swapped out
//! through [`crate::config::Config`] instead of being inlined at call sites.

/// Lyric cleaning markers.
pub mod lyrics {
    /// Literal escape sequence separating lines in raw lyric text.
    ///
    /// This is a backslash followed by `n`, not a real newline.
    pub const ESCAPED_NEWLINE: &str = "\\n";

    /// Credit labels: lyricist, composer, arranger, producer.
    pub const ATTRIBUTION_MARKERS: &[&str] = &["作词", "作曲", "编曲", "制作", "词：", "曲："];

    /// Punctuation that only shows up in credit or header lines.
    pub const PUNCTUATION_MARKERS: &[&str] = &["-", "：", ":"];

    /// Cover performance and licensing notices.
    pub const NOTICE_MARKERS: &[&str] = &["翻唱", "授权"];
}

/// Song name filtering.
pub mod names {
    /// Bracket characters that disqualify a song name on their own.
    pub const BRACKETS: &[char] = &['(', ')'];

    /// Substrings marking medleys and mashups.
    pub const MEDLEY_MARKERS: &[&str] = &["串烧"];
}

/// Record numbering.
pub mod records {
    /// Identifier given to the first surviving record.
    pub const DEFAULT_START_ID: u64 = 26;
}

/// Fixed file locations.
pub mod paths {
    /// Data directory, relative to the crate root.
    pub const DATA_DIR: &str = "data";

    /// Raw corpus file name.
    pub const INPUT_FILE: &str = "music.json";

    /// Processed corpus file name.
    pub const OUTPUT_FILE: &str = "music_processed.json";
}
