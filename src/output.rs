//! # Output Module
//!
//! This module centralizes the end-of-run output of headerize. Per-file trace
//! lines are printed by the processor through [`info_log!`].
//!
//! [`info_log!`]: crate::info_log

use owo_colors::{OwoColorize, Stream};

use crate::logging::is_quiet;
use crate::report::ProcessingSummary;

/// Symbols used in output
pub mod symbols {
  /// Success/has header
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  /// Missing header
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

const fn plural(count: usize, one: &'static str, many: &'static str) -> &'static str {
  if count == 1 { one } else { many }
}

/// Formats the summary line without colors.
///
/// - modify mode: `Processed 3 files: 1 header added, 2 already present (0.01s)`
/// - check mode: `Checked 3 files: 1 missing header, 2 already present (0.01s)`
pub fn format_summary(summary: &ProcessingSummary, check_only: bool) -> String {
  let files = format!(
    "{} {}",
    summary.total_files,
    plural(summary.total_files, "file", "files")
  );
  let changed = if check_only {
    format!(
      "{} missing {}",
      summary.headers_missing,
      plural(summary.headers_missing, "header", "headers")
    )
  } else {
    format!(
      "{} {} added",
      summary.headers_added,
      plural(summary.headers_added, "header", "headers")
    )
  };

  format!(
    "{} {}: {}, {} already present ({:.2}s)",
    if check_only { "Checked" } else { "Processed" },
    files,
    changed,
    summary.headers_present,
    summary.processing_time.as_secs_f64()
  )
}

/// Print the summary line (respects quiet mode).
pub fn print_summary(summary: &ProcessingSummary, check_only: bool) {
  if is_quiet() {
    return;
  }

  let symbol = if summary.has_missing() {
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
  } else {
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()).to_string()
  };

  println!("{} {}", symbol, format_summary(summary, check_only));
}
