/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::types::PolyglotConfig;

pub const CONFIG_FILE: &str = "polyglot.toml";

/// Walk upward from `start` to find `polyglot.toml`, like Cargo.toml discovery
pub fn find_polyglot_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_polyglot_config(path: &Path) -> Result<PolyglotConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: PolyglotConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.i18n.validate().with_context(|| format!("invalid [i18n] in {}", path.display()))?;
  Ok(config)
}
