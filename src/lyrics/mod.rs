//! Lyric text cleaning.
//!
//! Scraped lyrics open with a header block of credits (lyricist, composer,
//! arranger, licensing notices). Cleaning drops everything before the first
//! line that looks like an actual lyric and converts the escaped line breaks
//! into real newlines.

use crate::constants::lyrics::{
    ATTRIBUTION_MARKERS, ESCAPED_NEWLINE, NOTICE_MARKERS, PUNCTUATION_MARKERS,
};
use crate::error::{Error, Result};

/// Substrings that disqualify a line from starting the lyric body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LyricMarkers(Vec<String>);

impl LyricMarkers {
    /// Build a marker list from arbitrary substrings.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(markers.into_iter().map(Into::into).collect())
    }

    /// The configured markers.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Whether `line` contains any marker.
    pub fn matches(&self, line: &str) -> bool {
        self.0.iter().any(|m| line.contains(m.as_str()))
    }

    /// Reject empty markers, which would match every line.
    pub fn validate(&self) -> Result<()> {
        if self.0.iter().any(String::is_empty) {
            return Err(Error::config(
                "empty lyric marker",
                "Remove blank entries from the lyric marker list",
            ));
        }
        Ok(())
    }
}

impl Default for LyricMarkers {
    fn default() -> Self {
        Self::new(
            ATTRIBUTION_MARKERS
                .iter()
                .chain(PUNCTUATION_MARKERS)
                .chain(NOTICE_MARKERS)
                .copied(),
        )
    }
}

/// Strips credit headers from raw lyric text.
#[derive(Debug, Clone, Default)]
pub struct LyricCleaner {
    markers: LyricMarkers,
}

impl LyricCleaner {
    /// Create a cleaner with a custom marker list.
    pub const fn new(markers: LyricMarkers) -> Self {
        Self { markers }
    }

    /// The markers this cleaner skips over.
    pub const fn markers(&self) -> &LyricMarkers {
        &self.markers
    }

    /// Clean a raw lyric.
    ///
    /// Lines are split on the escaped `\n` sequence. The body starts at the
    /// first non-blank line free of markers; when there is no such line the
    /// whole text is kept. The result is joined with real newlines.
    pub fn clean(&self, raw: &str) -> String {
        let lines: Vec<&str> = raw.split(ESCAPED_NEWLINE).collect();
        let start = self.body_start(&lines).unwrap_or(0);
        lines[start..].join("\n")
    }

    fn body_start(&self, lines: &[&str]) -> Option<usize> {
        lines
            .iter()
            .position(|line| !line.trim().is_empty() && !self.markers.matches(line))
    }
}

/// Clean a raw lyric with the default marker list.
pub fn clean_lyric(raw: &str) -> String {
    LyricCleaner::default().clean(raw)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn test_skips_attribution_header() {
        let raw = "作词：张三\\n作曲：李四\\n第一句歌词\\n第二句歌词";
        assert_eq!(clean_lyric(raw), "第一句歌词\n第二句歌词");
    }

    #[test]
    fn test_skips_blank_lines_before_body() {
        let raw = "  \\n\\n编曲 王五\\n   \\n天空很蓝\\n\\n海很深";
        assert_eq!(clean_lyric(raw), "天空很蓝\n\n海很深");
    }

    #[test]
    fn test_markers_after_body_are_kept() {
        let raw = "制作人 赵六\\n天空很蓝\\n翻唱：某某";
        assert_eq!(clean_lyric(raw), "天空很蓝\n翻唱：某某");
    }

    #[test]
    fn test_fallback_keeps_everything() {
        let raw = "a:1\\nb:2\\nc:3";
        assert_eq!(clean_lyric(raw), "a:1\nb:2\nc:3");
    }

    #[test]
    fn test_all_blank_falls_back_to_start() {
        assert_eq!(clean_lyric(" \\n \\n "), " \n \n ");
        assert_eq!(clean_lyric(""), "");
    }

    #[test]
    fn test_real_newlines_are_not_split() {
        // Only the escaped form separates lines.
        let raw = "作词：张三\n第一句\\n第二句";
        assert_eq!(clean_lyric(raw), "第二句");
    }

    #[test]
    fn test_hyphen_and_licensing_lines_skipped() {
        let raw = "晴天 - 周杰伦\\n未经授权不得翻唱\\n故事的小黄花";
        assert_eq!(clean_lyric(raw), "故事的小黄花");
    }

    #[test]
    fn test_custom_markers() {
        let cleaner = LyricCleaner::new(LyricMarkers::new(["[intro]"]));
        assert_eq!(cleaner.clean("[intro]\\n作词：张三"), "作词：张三");
    }

    #[test]
    fn test_empty_marker_rejected() {
        let markers = LyricMarkers::new(["作词", ""]);
        assert!(matches!(markers.validate(), Err(Error::Config { .. })));
        assert!(LyricMarkers::default().validate().is_ok());
    }
}
