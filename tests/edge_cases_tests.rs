mod common;

use std::fs;

use anyhow::Result;
use headerize::headers::{HeaderSet, HeaderSpec};
use headerize::processor::{Processor, ProcessorConfig, WriteMode};
use tempfile::tempdir;

use common::{read_file, sample_headers, write_file};

#[test]
fn test_empty_file() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "empty.ts", "")?;

  let processor = Processor::new(ProcessorConfig::new(sample_headers()));
  processor.process(temp_dir.path())?;

  assert_eq!(read_file(temp_dir.path(), "empty.ts")?, "// LICENSE\n// Co.\n");

  Ok(())
}

#[test]
fn test_dependency_and_vcs_directories_are_untouched() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "node_modules/vue/index.ts", "dep;")?;
  write_file(temp_dir.path(), "packages/app/node_modules/x/y.vue", "dep;")?;
  write_file(temp_dir.path(), ".git/hooks/hook.ts", "vcs;")?;
  write_file(temp_dir.path(), ".github/actions/run.ts", "ci;")?;
  write_file(temp_dir.path(), "src/app.ts", "app;")?;

  let processor = Processor::new(ProcessorConfig::new(sample_headers()));
  let summary = processor.process(temp_dir.path())?;

  assert_eq!(summary.total_files, 1);
  assert_eq!(read_file(temp_dir.path(), "node_modules/vue/index.ts")?, "dep;");
  assert_eq!(read_file(temp_dir.path(), "packages/app/node_modules/x/y.vue")?, "dep;");
  assert_eq!(read_file(temp_dir.path(), ".git/hooks/hook.ts")?, "vcs;");
  assert_eq!(read_file(temp_dir.path(), ".github/actions/run.ts")?, "ci;");
  assert_eq!(read_file(temp_dir.path(), "src/app.ts")?, "// LICENSE\n// Co.\napp;");

  Ok(())
}

#[test]
fn test_excluded_directories_are_not_read() -> Result<()> {
  // Invalid UTF-8 would abort the run if the file were read
  let temp_dir = tempdir()?;
  let path = temp_dir.path().join("node_modules/bad.ts");
  fs::create_dir_all(path.parent().expect("parent"))?;
  fs::write(&path, [0xFF, 0xFE, 0xFD])?;

  let processor = Processor::new(ProcessorConfig::new(sample_headers()));
  let summary = processor.process(temp_dir.path())?;

  assert_eq!(summary.total_files, 0);
  assert_eq!(fs::read(&path)?, vec![0xFF, 0xFE, 0xFD]);

  Ok(())
}

#[test]
fn test_other_extensions_are_untouched() -> Result<()> {
  let temp_dir = tempdir()?;
  for name in ["a.js", "b.tsx", "c.TS", "d.vue.orig", "README.md", "Makefile", ".vue"] {
    write_file(temp_dir.path(), name, "content")?;
  }

  let processor = Processor::new(ProcessorConfig::new(sample_headers()));
  let summary = processor.process(temp_dir.path())?;

  assert_eq!(summary.total_files, 0);
  for name in ["a.js", "b.tsx", "c.TS", "d.vue.orig", "README.md", "Makefile", ".vue"] {
    assert_eq!(read_file(temp_dir.path(), name)?, "content", "{name} was modified");
  }

  Ok(())
}

#[test]
fn test_empty_marker_leaves_everything_alone() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "a.ts", "x;")?;

  let headers = HeaderSet::new(HeaderSpec::new("", "// LICENSE\n"), HeaderSpec::new("", ""));
  let processor = Processor::new(ProcessorConfig::new(headers));
  let summary = processor.process(temp_dir.path())?;

  assert_eq!(summary.headers_present, 1);
  assert_eq!(read_file(temp_dir.path(), "a.ts")?, "x;");

  Ok(())
}

#[test]
fn test_marker_check_is_case_sensitive() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "a.ts", "// license\nx;")?;

  let processor = Processor::new(ProcessorConfig::new(sample_headers()));
  processor.process(temp_dir.path())?;

  assert_eq!(
    read_file(temp_dir.path(), "a.ts")?,
    "// LICENSE\n// Co.\n// license\nx;"
  );

  Ok(())
}

#[test]
fn test_crlf_content_is_preserved() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "a.ts", "line1\r\nline2\r\n")?;

  let processor = Processor::new(ProcessorConfig::new(sample_headers()));
  processor.process(temp_dir.path())?;

  assert_eq!(
    read_file(temp_dir.path(), "a.ts")?,
    "// LICENSE\n// Co.\nline1\r\nline2\r\n"
  );

  Ok(())
}

#[test]
fn test_invalid_utf8_aborts_run() -> Result<()> {
  let temp_dir = tempdir()?;
  fs::write(temp_dir.path().join("a.ts"), [0xC3, 0x28])?;
  write_file(temp_dir.path(), "b.ts", "later;")?;

  let processor = Processor::new(ProcessorConfig::new(sample_headers()));
  let err = processor.process(temp_dir.path()).expect_err("invalid utf-8 should abort");

  assert!(err.to_string().contains("a.ts"));
  // Files after the failing one are never reached
  assert_eq!(read_file(temp_dir.path(), "b.ts")?, "later;");

  Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_processed() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "real/a.ts", "x;")?;
  fs::create_dir_all(temp_dir.path().join("src"))?;
  std::os::unix::fs::symlink(temp_dir.path().join("real/a.ts"), temp_dir.path().join("src/link.ts"))?;

  let processor = Processor::new(ProcessorConfig::new(sample_headers()));
  let summary = processor.process(&temp_dir.path().join("src"))?;

  assert_eq!(summary.headers_added, 1);
  assert_eq!(read_file(temp_dir.path(), "real/a.ts")?, "// LICENSE\n// Co.\nx;");

  Ok(())
}

#[cfg(unix)]
#[test]
fn test_symlinked_file_is_processed_with_atomic_writes() -> Result<()> {
  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "real/a.ts", "x;")?;
  fs::create_dir_all(temp_dir.path().join("src"))?;
  let link = temp_dir.path().join("src/link.ts");
  std::os::unix::fs::symlink(temp_dir.path().join("real/a.ts"), &link)?;

  let processor = Processor::new(ProcessorConfig {
    write_mode: WriteMode::Atomic,
    ..ProcessorConfig::new(sample_headers())
  });
  let summary = processor.process(&temp_dir.path().join("src"))?;

  assert_eq!(summary.headers_added, 1);
  assert!(fs::symlink_metadata(&link)?.file_type().is_symlink());
  assert_eq!(read_file(temp_dir.path(), "real/a.ts")?, "// LICENSE\n// Co.\nx;");

  Ok(())
}

#[cfg(unix)]
#[test]
fn test_unreadable_directory_is_skipped() -> Result<()> {
  use std::os::unix::fs::PermissionsExt;

  let temp_dir = tempdir()?;
  write_file(temp_dir.path(), "locked/hidden.ts", "hidden;")?;
  write_file(temp_dir.path(), "open/a.ts", "x;")?;
  let locked = temp_dir.path().join("locked");
  fs::set_permissions(&locked, fs::Permissions::from_mode(0o000))?;

  let processor = Processor::new(ProcessorConfig::new(sample_headers()));
  let result = processor.process(temp_dir.path());

  // Restore access so the temp dir can be cleaned up
  fs::set_permissions(&locked, fs::Permissions::from_mode(0o755))?;

  let summary = result?;
  assert!(summary.headers_added >= 1);
  assert_eq!(read_file(temp_dir.path(), "open/a.ts")?, "// LICENSE\n// Co.\nx;");

  Ok(())
}
