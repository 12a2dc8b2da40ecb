//! # headerize
//!
//! A tool that prepends license headers to TypeScript and Vue source files.

use anyhow::Result;
use headerize::cli::{Cli, run};

fn main() -> Result<()> {
  let cli = Cli::parse_args();
  run(cli)
}
