//! # Tracklore Drills
//!
//! Eleven SQL drill exercises over the record catalog. Each drill issues
//! one fixed SQL statement through the shared query executor and returns
//! the result set as-is; the catalog itself does all the interesting work.

pub mod drills;
pub mod report;
