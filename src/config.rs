//! # Configuration Module
//!
//! This module loads the header definitions used by headerize.
//!
//! Headers are read from a JSON document (`header.json` by default) with four
//! required arrays of lines:
//!
//! ```json
//! {
//!   "header":      ["// LICENSE", "// Co."],
//!   "isHeader":    ["// LICENSE"],
//!   "vueHeader":   ["<!-- LICENSE -->"],
//!   "isVueHeader": ["<!-- LICENSE -->"]
//! }
//! ```
//!
//! The config file can also be specified with `--config` or via the
//! `HEADERIZE_CONFIG` environment variable.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::headers::{HeaderSet, HeaderSpec};
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = "header.json";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "HEADERIZE_CONFIG";

/// Raw header definitions as they appear in the config file.
///
/// Each field is a list of lines. All four fields are required; unknown
/// fields are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HeaderConfig {
  /// Lines inserted at the top of `.ts` files.
  pub header: Vec<String>,

  /// Lines whose presence at the top of a `.ts` file marks it as done.
  #[serde(rename = "isHeader")]
  pub is_header: Vec<String>,

  /// Lines inserted at the top of `.vue` files.
  #[serde(rename = "vueHeader")]
  pub vue_header: Vec<String>,

  /// Lines whose presence at the top of a `.vue` file marks it as done.
  #[serde(rename = "isVueHeader")]
  pub is_vue_header: Vec<String>,
}

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// No config file exists at the resolved location.
  #[error("Config file not found: '{path}'")]
  NotFound { path: PathBuf },

  /// The config file could not be read.
  #[error("Failed to read config file '{path}'")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file is not valid JSON or lacks a required field.
  #[error("Failed to parse config file '{path}'")]
  ParseError { path: PathBuf, source: serde_json::Error },
}

impl HeaderConfig {
  /// Load header definitions from a file.
  ///
  /// # Arguments
  ///
  /// * `path` - Path to the configuration file
  ///
  /// # Returns
  ///
  /// The loaded configuration, or an error if the file is missing, cannot be
  /// read, or cannot be parsed.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    debug!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| {
      if e.kind() == std::io::ErrorKind::NotFound {
        ConfigError::NotFound {
          path: path.to_path_buf(),
        }
      } else {
        ConfigError::ReadError {
          path: path.to_path_buf(),
          source: e,
        }
      }
    })?;

    let config = serde_json::from_str(&content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;

    Ok(config)
  }

  /// Converts the line lists into the header set used during a run.
  ///
  /// Every line is terminated with `\n`, including the last one.
  pub fn into_header_set(self) -> HeaderSet {
    debug!(
      "Header lines: ts {} (marker {}), vue {} (marker {})",
      self.header.len(),
      self.is_header.len(),
      self.vue_header.len(),
      self.is_vue_header.len()
    );

    HeaderSet::new(
      HeaderSpec::new(join_lines(&self.is_header), join_lines(&self.header)),
      HeaderSpec::new(join_lines(&self.is_vue_header), join_lines(&self.vue_header)),
    )
  }
}

fn join_lines(lines: &[String]) -> String {
  lines.iter().fold(String::new(), |mut joined, line| {
    joined.push_str(line);
    joined.push('\n');
    joined
  })
}

/// Resolve the configuration file path.
///
/// The configuration file is resolved in the following order:
/// 1. Path specified via `--config` flag (passed as `explicit_path`)
/// 2. Path specified via `HEADERIZE_CONFIG` environment variable
/// 3. `header.json` in `current_dir`
///
/// The returned path is not checked for existence; [`HeaderConfig::load`]
/// reports a missing file.
pub fn resolve_config_path(explicit_path: Option<&Path>, current_dir: &Path) -> PathBuf {
  if let Some(path) = explicit_path {
    debug!("Using explicit config path: {}", path.display());
    return path.to_path_buf();
  }

  if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
    let path = PathBuf::from(env_path);
    debug!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
    return path;
  }

  current_dir.join(DEFAULT_CONFIG_FILENAME)
}

/// Resolve, load and convert the header configuration.
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path from CLI flag
/// * `current_dir` - Directory searched for `header.json`
pub fn load_headers(explicit_path: Option<&Path>, current_dir: &Path) -> Result<HeaderSet> {
  let path = resolve_config_path(explicit_path, current_dir);
  verbose_log!("Using headers from {}", path.display());
  let config = HeaderConfig::load(&path).with_context(|| format!("Failed to load headers from {}", path.display()))?;
  Ok(config.into_header_set())
}
