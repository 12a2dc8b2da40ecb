//! # File Collector Module
//!
//! This module collects the files a run applies headers to: a recursive
//! directory walk filtered by extension, with dependency and version-control
//! directories left out.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;
use tracing::{debug, trace};
use walkdir::WalkDir;

use crate::headers::Category;
use crate::verbose_log;

/// Substrings that exclude a directory, and everything below it, from a walk.
///
/// The match is plain substring containment on the directory path, so names
/// such as `.github` or `old_node_modules` are excluded as well.
pub const EXCLUDED_DIR_MARKERS: [&str; 2] = ["node_modules", ".git"];

/// A file selected for processing together with its category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTarget {
  pub path: PathBuf,
  pub category: Category,
}

impl FileTarget {
  /// Builds a target for `path` if its extension is recognized.
  pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
    let path = path.into();
    let category = Category::from_path(&path)?;
    Some(Self { path, category })
  }
}

/// Checks whether a directory path contains one of the excluded substrings.
pub fn is_excluded_dir(dir: &Path) -> bool {
  let dir = dir.to_string_lossy();
  EXCLUDED_DIR_MARKERS.iter().any(|marker| dir.contains(marker))
}

/// Collects the targets under `root`.
///
/// A file root is tested against the extension filter only; the excluded
/// directory markers apply to directory walks.
pub fn collect_targets(root: &Path) -> Result<Vec<FileTarget>> {
  if root.is_file() {
    debug!("Single file root: {}", root.display());
    return Ok(FileTarget::from_path(root).into_iter().collect());
  }

  traverse_directory(root)
}

/// Traverses a directory recursively and collects all recognized files.
///
/// Entries are visited in file-name order within each directory. Excluded
/// directories are pruned without being descended. Directories that cannot
/// be read are reported and skipped.
pub fn traverse_directory(dir: &Path) -> Result<Vec<FileTarget>> {
  debug!("Scanning directory: {}", dir.display());
  let start_time = Instant::now();

  let mut targets = Vec::new();
  let walker = WalkDir::new(dir)
    .sort_by_file_name()
    .into_iter()
    .filter_entry(|entry| {
      let excluded = entry.file_type().is_dir() && is_excluded_dir(entry.path());
      if excluded {
        verbose_log!("Skipping excluded directory: {}", entry.path().display());
      }
      !excluded
    });

  for entry in walker {
    let entry = match entry {
      Ok(entry) => entry,
      Err(e) => {
        eprintln!("Error reading directory {}: {}", e.path().unwrap_or(dir).display(), e);
        continue;
      }
    };

    let path = entry.path();
    let is_file = entry.file_type().is_file() || (entry.path_is_symlink() && path.is_file());
    if !is_file {
      continue;
    }

    match FileTarget::from_path(path) {
      Some(target) => targets.push(target),
      None => trace!("Skipping unrecognized extension: {}", path.display()),
    }
  }

  debug!(
    "Found {} files in {}ms",
    targets.len(),
    start_time.elapsed().as_millis()
  );

  Ok(targets)
}
