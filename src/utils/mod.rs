//! Utility modules.

pub mod json_io;
