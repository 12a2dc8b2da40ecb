//! # Report Module
//!
//! Per-file outcomes and the run summary built from them.

use std::time::Duration;

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
  /// The file already started with its marker and was left untouched.
  Present,
  /// The header was written to the file.
  Added,
  /// The header is missing; nothing was written (check-only mode).
  Missing,
}

/// Summary of a processing run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
  /// Total number of files processed
  pub total_files: usize,
  /// Number of files that already had their header
  pub headers_present: usize,
  /// Number of headers written
  pub headers_added: usize,
  /// Number of files missing their header in check-only mode
  pub headers_missing: usize,
  /// Total processing time
  pub processing_time: Duration,
}

impl ProcessingSummary {
  /// Counts one file outcome.
  pub const fn record(&mut self, outcome: FileOutcome) {
    self.total_files += 1;
    match outcome {
      FileOutcome::Present => self.headers_present += 1,
      FileOutcome::Added => self.headers_added += 1,
      FileOutcome::Missing => self.headers_missing += 1,
    }
  }

  /// Whether any file lacks its header after the run.
  pub const fn has_missing(&self) -> bool {
    self.headers_missing > 0
  }
}
