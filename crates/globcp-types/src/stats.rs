//! Aggregate statistics for a copy batch

use crate::CopiedFile;
use std::time::Duration;

/// Counters describing one completed copy batch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CopyStats {
    /// Number of files copied
    pub files_copied: u64,
    /// Total number of bytes written
    pub bytes_copied: u64,
    /// Wall-clock duration of the batch
    pub duration: Duration,
}

impl CopyStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Summarize a slice of copy results
    pub fn summarize(files: &[CopiedFile], duration: Duration) -> Self {
        Self {
            files_copied: files.len() as u64,
            bytes_copied: files.iter().map(CopiedFile::bytes_copied).sum(),
            duration,
        }
    }

    /// Merge another set of statistics into this one
    pub fn merge(&mut self, other: &Self) {
        self.files_copied += other.files_copied;
        self.bytes_copied += other.bytes_copied;
        self.duration += other.duration;
    }

    /// Transfer rate in bytes per second
    pub fn transfer_rate(&self) -> f64 {
        let secs = self.duration.as_secs_f64();
        if secs > 0.0 {
            self.bytes_copied as f64 / secs
        } else {
            0.0
        }
    }
}
