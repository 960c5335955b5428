//! `songprep` - song lyric corpus filtering and normalization.
//!
//! Reads scraped song records, drops entries that are not single-artist
//! original songs, strips credit headers from lyrics, and writes the survivors
//! back out with sequential identifiers.

pub mod config;
pub mod constants;
pub mod error;
pub mod lyrics;
pub mod services;
pub mod types;
pub mod utils;
