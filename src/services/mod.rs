//! Batch processing services.
//!
//! Name filtering, record transformation, and the end-to-end run that ties
//! them to the corpus files.

pub mod filter;
pub mod runner;
pub mod transform;
