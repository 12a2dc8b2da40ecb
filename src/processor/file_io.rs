//! # File I/O Module
//!
//! This module provides file reading and writing utilities for the processor.
//! It encapsulates synchronous file operations.

use std::io::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;
use tracing::debug;

/// How a header rewrite reaches the disk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WriteMode {
  /// Truncate the file and write the new content in place.
  #[default]
  InPlace,
  /// Write to a temporary file next to the target, then rename it over the
  /// target.
  Atomic,
}

/// File I/O operations for the processor.
///
/// This struct provides static methods for reading and writing files.
pub struct FileIO;

impl FileIO {
  /// Read full file content.
  ///
  /// Fails if the file cannot be read or is not valid UTF-8.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Write file content using the given mode.
  pub fn write(path: &Path, content: &str, mode: WriteMode) -> Result<()> {
    match mode {
      WriteMode::InPlace => Self::write_file(path, content),
      WriteMode::Atomic => Self::write_file_atomic(path, content),
    }
  }

  /// Write file content, truncating the existing file.
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }

  /// Write file content through a temporary file in the same directory.
  ///
  /// The temporary file receives the original file's permissions before it
  /// is renamed over the original, so an interrupted write leaves the
  /// original untouched. A symlink is resolved first and the file it points
  /// to is replaced; the link itself is kept.
  pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let path = &Self::resolve_write_target(path)?;
    let dir = match path.parent() {
      Some(parent) if !parent.as_os_str().is_empty() => parent,
      _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir)
      .with_context(|| format!("Failed to create temporary file in: {}", dir.display()))?;
    temp
      .write_all(content.as_bytes())
      .with_context(|| format!("Failed to write temporary file for: {}", path.display()))?;
    temp
      .as_file()
      .sync_all()
      .with_context(|| format!("Failed to sync temporary file for: {}", path.display()))?;

    let permissions = std::fs::metadata(path)
      .with_context(|| format!("Failed to read metadata: {}", path.display()))?
      .permissions();
    std::fs::set_permissions(temp.path(), permissions)
      .with_context(|| format!("Failed to copy permissions to temporary file for: {}", path.display()))?;

    temp
      .persist(path)
      .with_context(|| format!("Failed to replace file: {}", path.display()))?;
    Ok(())
  }

  /// Returns the file a write to `path` lands in, following symlinks.
  fn resolve_write_target(path: &Path) -> Result<PathBuf> {
    let metadata =
      std::fs::symlink_metadata(path).with_context(|| format!("Failed to read metadata: {}", path.display()))?;
    if !metadata.file_type().is_symlink() {
      return Ok(path.to_path_buf());
    }

    let target =
      std::fs::canonicalize(path).with_context(|| format!("Failed to resolve symlink: {}", path.display()))?;
    debug!("Resolved symlink {} -> {}", path.display(), target.display());
    Ok(target)
  }
}
