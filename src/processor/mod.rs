//! # Processor Module
//!
//! This module contains the core functionality for adding headers to the
//! files under a path.
//!
//! The module is organized into submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`file_collector`] - Directory traversal and extension filtering
//!
//! The [`Processor`] struct is the main entry point, walking a root path and
//! applying the matching header to every recognized file, one file at a time.

mod file_collector;
mod file_io;

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
pub use file_collector::{EXCLUDED_DIR_MARKERS, FileTarget, collect_targets, is_excluded_dir, traverse_directory};
pub use file_io::{FileIO, WriteMode};
use tracing::{debug, trace};

use crate::diff::DiffManager;
use crate::headers::HeaderSet;
use crate::info_log;
use crate::report::{FileOutcome, ProcessingSummary};

/// Configuration for creating a Processor instance.
pub struct ProcessorConfig {
  pub headers: HeaderSet,

  /// Report missing headers without writing anything
  pub check_only: bool,

  /// How rewritten files reach the disk
  pub write_mode: WriteMode,

  /// Optional diff rendering
  pub diff_manager: Option<DiffManager>,
}

impl ProcessorConfig {
  /// Creates a new ProcessorConfig with sensible defaults.
  ///
  /// Use struct update syntax to override specific fields:
  /// ```ignore
  /// ProcessorConfig {
  ///     check_only: true,
  ///     ..ProcessorConfig::new(headers)
  /// }
  /// ```
  pub const fn new(headers: HeaderSet) -> Self {
    Self {
      headers,
      check_only: false,
      write_mode: WriteMode::InPlace,
      diff_manager: None,
    }
  }
}

/// Processor for adding headers to files.
///
/// The `Processor` is responsible for:
/// - Collecting the `.ts` and `.vue` files under a root path
/// - Checking each file for its category's marker
/// - Prepending the category's header to files lacking it
/// - Showing diffs of the insertions when requested
///
/// Any read or write failure aborts the run; files after the failing one are
/// not processed.
pub struct Processor {
  /// Headers applied per category
  headers: HeaderSet,

  /// Whether to only check for headers without modifying files
  check_only: bool,

  /// How rewritten files reach the disk
  write_mode: WriteMode,

  /// Manager for handling diff creation and rendering
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a new processor with the specified configuration.
  pub fn new(config: ProcessorConfig) -> Self {
    Self {
      headers: config.headers,
      check_only: config.check_only,
      write_mode: config.write_mode,
      diff_manager: config.diff_manager.unwrap_or_default(),
    }
  }

  /// Processes every recognized file under `root`.
  ///
  /// `root` may be a directory, walked recursively, or a single file.
  ///
  /// # Errors
  ///
  /// Returns the first read or write error encountered; processing stops at
  /// that file.
  pub fn process(&self, root: &Path) -> Result<ProcessingSummary> {
    let start_time = Instant::now();

    self.diff_manager.init()?;

    let targets = collect_targets(root)?;
    debug!("Processing {} files under {}", targets.len(), root.display());

    let mut summary = ProcessingSummary::default();
    for target in &targets {
      let outcome = self.process_file(target)?;
      summary.record(outcome);
    }

    summary.processing_time = start_time.elapsed();
    Ok(summary)
  }

  /// Applies the header of the target's category to a single file.
  ///
  /// The file is read in full and left untouched when it already starts with
  /// the marker. Otherwise it is rewritten as header body followed by the
  /// original content, unless the processor is in check-only mode.
  pub fn process_file(&self, target: &FileTarget) -> Result<FileOutcome> {
    let path = target.path.as_path();
    let spec = self.headers.for_category(target.category);

    info_log!("File: {}", path.display());

    let content = FileIO::read_full_content(path)?;

    if spec.is_present_in(&content) {
      trace!("Header present: {} ({})", path.display(), target.category);
      return Ok(FileOutcome::Present);
    }

    let new_content = spec.apply_to(&content);

    if let Err(e) = self.diff_manager.display_diff(path, &content, &new_content) {
      eprintln!("Warning: Failed to display diff for {}: {}", path.display(), e);
    }

    if self.check_only {
      info_log!("Missing header");
      return Ok(FileOutcome::Missing);
    }

    info_log!("Add header");
    FileIO::write(path, &new_content, self.write_mode)?;
    debug!("Header added: {} ({})", path.display(), target.category);

    Ok(FileOutcome::Added)
  }
}
