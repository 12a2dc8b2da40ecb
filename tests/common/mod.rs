#![allow(dead_code)]

use std::fs;
use std::path::Path;
use std::process::Command;

use anyhow::Result;
use assert_cmd::prelude::*;
use headerize::headers::{HeaderSet, HeaderSpec};

/// Config matching the header scenarios used across the tests.
pub const SAMPLE_CONFIG: &str = r#"{
  "header": ["// LICENSE", "// Co."],
  "isHeader": ["// LICENSE"],
  "vueHeader": ["<!-- LICENSE -->", "<!-- Co. -->"],
  "isVueHeader": ["<!-- LICENSE -->"]
}"#;

/// The header set `SAMPLE_CONFIG` converts to.
pub fn sample_headers() -> HeaderSet {
  HeaderSet::new(
    HeaderSpec::new("// LICENSE\n", "// LICENSE\n// Co.\n"),
    HeaderSpec::new("<!-- LICENSE -->\n", "<!-- LICENSE -->\n<!-- Co. -->\n"),
  )
}

/// Writes `content` to `relative` under `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<()> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(path, content)?;
  Ok(())
}

/// Reads `relative` under `root` as a string.
pub fn read_file(root: &Path, relative: &str) -> Result<String> {
  Ok(fs::read_to_string(root.join(relative))?)
}

/// Writes `SAMPLE_CONFIG` as `header.json` in `dir`.
pub fn write_sample_config(dir: &Path) -> Result<()> {
  write_file(dir, "header.json", SAMPLE_CONFIG)
}

/// Builds a headerize command running in `dir` with a clean environment.
pub fn headerize_cmd(dir: &Path) -> Result<Command> {
  let mut cmd = Command::cargo_bin("headerize")?;
  cmd
    .current_dir(dir)
    .env_remove("HEADERIZE_CONFIG")
    .env_remove("RUST_LOG");
  Ok(cmd)
}
