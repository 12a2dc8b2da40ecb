//! # headerize
//!
//! A tool that prepends license headers to TypeScript (`.ts`) and Vue (`.vue`)
//! source files found by scanning a directory recursively.
//!
//! `headerize` modifies source files in place and leaves alone any file that
//! already starts with its header marker, so running it twice changes nothing
//! the second time. `node_modules` and `.git` directories are never entered.
//!
//! ## Features
//!
//! * Recursively scan a directory, or process a single file
//! * Separate headers for `.ts` and `.vue` files, read from `header.json`
//! * Distinct marker text for the "already present" check
//! * Check-only mode to list files missing their header without modifying them
//! * Diff preview of every insertion
//! * Optional atomic writes through a temporary file
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use headerize::config::load_headers;
//! use headerize::processor::{Processor, ProcessorConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load header.json from the current directory
//!     let headers = load_headers(None, Path::new("."))?;
//!
//!     // Create processor with default settings
//!     let processor = Processor::new(ProcessorConfig::new(headers));
//!
//!     // Process files in the src directory
//!     let summary = processor.process(Path::new("src"))?;
//!     println!("Added {} headers", summary.headers_added);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! * [`processor`] - Core functionality for walking directories and applying headers
//! * [`headers`] - Header text and file categories
//! * [`config`] - Loading `header.json`
//! * [`logging`] - Logging utilities for trace and verbose output
//!
//! [`processor`]: crate::processor
//! [`headers`]: crate::headers
//! [`config`]: crate::config
//! [`logging`]: crate::logging

pub mod cli;
pub mod config;
pub mod diff;
pub mod headers;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
