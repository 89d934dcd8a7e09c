/* src/cli/core/src/build/locales.rs */

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polyglot_engine::{is_locale_file, locale_record_from_file, LocaleRecord};

use crate::ui;

fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) -> std::io::Result<()> {
  for entry in std::fs::read_dir(dir)? {
    let path = entry?.path();
    if path.is_dir() {
      collect_files(&path, out)?;
    } else if is_locale_file(&path) {
      out.push(path);
    }
  }
  Ok(())
}

/// Read every `<language>/<namespace>.json` below `dir` into locale records,
/// sorted by path. A missing directory yields no records.
pub fn ingest_locales(dir: &Path, verbose: bool) -> Result<Vec<LocaleRecord>> {
  if !dir.is_dir() {
    ui::warn(&format!("locales directory {} not found, no translations ingested", dir.display()));
    return Ok(Vec::new());
  }

  let mut files = Vec::new();
  collect_files(dir, &mut files)
    .with_context(|| format!("failed to read locales directory {}", dir.display()))?;
  files.sort();

  let mut records = Vec::with_capacity(files.len());
  for path in files {
    let started = Instant::now();
    let relative = path.strip_prefix(dir).unwrap_or(&path);
    let content = std::fs::read_to_string(&path)
      .with_context(|| format!("failed to read {}", path.display()))?;
    records.push(locale_record_from_file(relative, &content)?);
    if verbose {
      ui::detail(&format!("{}  {}ms", relative.display(), started.elapsed().as_millis()));
    }
  }
  Ok(records)
}
