/* src/cli/core/src/output.rs */

// Build artifacts shared by `build`, `resources` and `serve`.

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

pub const PAGES_FILE: &str = "pages.json";
pub const LOCALES_FILE: &str = "locales.json";

/// Pretty-print `value` to `path`, returning the written size in bytes.
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<u64> {
  let bytes = serde_json::to_vec_pretty(value)
    .with_context(|| format!("failed to serialize {}", path.display()))?;
  std::fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
  Ok(bytes.len() as u64)
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
  let content = std::fs::read_to_string(path).with_context(|| {
    format!("failed to read {} (run `polyglot build` first?)", path.display())
  })?;
  serde_json::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
}
