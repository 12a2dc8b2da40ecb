//! # Run Command
//!
//! This module wires the parsed arguments to the header configuration and the
//! processor, then prints the run summary.

use std::process;

use anyhow::{Context, Result};
use tracing::debug;

use super::Cli;
use crate::config::load_headers;
use crate::diff::DiffManager;
use crate::logging::{init_tracing, set_quiet, set_verbose};
use crate::output::{print_blank_line, print_summary};
use crate::processor::{Processor, ProcessorConfig, WriteMode};

/// Run headerize with the given arguments.
///
/// Configuration and I/O errors are returned to the caller. In check mode the
/// process exits with status 1 when any file is missing its header.
pub fn run(cli: Cli) -> Result<()> {
  // Initialize tracing subscriber for structured logging
  init_tracing(cli.quiet, cli.verbose);

  // Set output mode for the info_log! and verbose_log! macros
  if cli.verbose > 0 {
    set_verbose();
  } else if cli.quiet {
    set_quiet();
  }
  cli.colors.apply();

  let current_dir = std::env::current_dir().context("Failed to get current directory")?;
  let headers = load_headers(cli.config.as_deref(), &current_dir)?;

  let write_mode = if cli.atomic {
    debug!("Using atomic writes");
    WriteMode::Atomic
  } else {
    WriteMode::InPlace
  };

  let processor = Processor::new(ProcessorConfig {
    check_only: cli.check,
    write_mode,
    diff_manager: Some(DiffManager::new(cli.show_diff, cli.save_diff)),
    ..ProcessorConfig::new(headers)
  });

  let summary = processor.process(&cli.path)?;

  print_blank_line();
  print_summary(&summary, cli.check);

  // Exit with non-zero code if in check mode and there are missing headers
  if cli.check && summary.has_missing() {
    process::exit(1);
  }

  Ok(())
}
