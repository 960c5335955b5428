//! Song name filtering.
//!
//! Rejects titles that point at alternate versions (bracketed tags), medleys,
//! or titles carrying Latin-script text.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::constants::names::{BRACKETS, MEDLEY_MARKERS};
use crate::error::{Error, Result};

/// Regex matching any ASCII Latin letter.
#[allow(clippy::expect_used)]
static RE_LATIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z]").expect("valid regex: RE_LATIN")
});

/// Why a song name was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRejection {
    /// Contains an opening or closing bracket.
    Bracket(char),
    /// Contains a medley/mashup marker.
    Medley,
    /// Contains an ASCII Latin letter.
    Latin,
}

impl fmt::Display for NameRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bracket(c) => write!(f, "contains bracket '{c}'"),
            Self::Medley => write!(f, "medley"),
            Self::Latin => write!(f, "contains Latin letters"),
        }
    }
}

/// Configurable song name filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameFilter {
    /// Characters that reject a name on their own.
    pub brackets: Vec<char>,
    /// Substrings marking medleys and mashups.
    pub medley_markers: Vec<String>,
}

impl Default for NameFilter {
    fn default() -> Self {
        Self {
            brackets: BRACKETS.to_vec(),
            medley_markers: MEDLEY_MARKERS.iter().map(ToString::to_string).collect(),
        }
    }
}

impl NameFilter {
    /// Return the first reason `name` should be dropped, if any.
    pub fn rejection(&self, name: &str) -> Option<NameRejection> {
        if let Some(c) = name.chars().find(|c| self.brackets.contains(c)) {
            return Some(NameRejection::Bracket(c));
        }

        if RE_LATIN.is_match(name) {
            return Some(NameRejection::Latin);
        }

        if self.medley_markers.iter().any(|m| name.contains(m.as_str())) {
            return Some(NameRejection::Medley);
        }

        None
    }

    /// Whether `name` should be dropped.
    pub fn should_skip(&self, name: &str) -> bool {
        self.rejection(name).is_some()
    }

    /// Reject empty medley markers, which would match every name.
    pub fn validate(&self) -> Result<()> {
        if self.medley_markers.iter().any(String::is_empty) {
            return Err(Error::config(
                "empty medley marker",
                "Remove blank entries from the medley marker list",
            ));
        }
        Ok(())
    }
}

/// Check a song name against the default filter.
pub fn should_skip_song(name: &str) -> bool {
    NameFilter::default().should_skip(name)
}
