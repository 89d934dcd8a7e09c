/* src/cli/core/src/config/types.rs */

use std::collections::BTreeMap;

use polyglot_engine::I18nOptions;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PolyglotConfig {
  pub project: ProjectConfig,
  pub i18n: I18nOptions,
  #[serde(default)]
  pub build: BuildSection,
  #[serde(default)]
  pub serve: ServeSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  /// JSON array of page descriptors produced by the site generator.
  #[serde(default = "default_pages")]
  pub pages: String,
  /// Named content directories; `[i18n].locale_source_name` picks the
  /// one holding `<language>/<namespace>.json` files.
  #[serde(default = "default_sources")]
  pub sources: BTreeMap<String, String>,
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self { pages: default_pages(), sources: default_sources(), out_dir: default_out_dir() }
  }
}

fn default_pages() -> String {
  "pages.json".to_string()
}

fn default_sources() -> BTreeMap<String, String> {
  BTreeMap::from([("locale".to_string(), "locales".to_string())])
}

fn default_out_dir() -> String {
  ".polyglot/output".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServeSection {
  #[serde(default = "default_port")]
  pub port: u16,
  /// Site-wide path prefix, e.g. `/docs`.
  #[serde(default = "default_path_prefix")]
  pub path_prefix: String,
}

impl Default for ServeSection {
  fn default() -> Self {
    Self { port: default_port(), path_prefix: default_path_prefix() }
  }
}

fn default_port() -> u16 {
  3000
}

fn default_path_prefix() -> String {
  "/".to_string()
}

impl PolyglotConfig {
  /// Directory of the configured locale source, relative to the project root.
  pub fn locale_source(&self) -> Option<&str> {
    self.build.sources.get(&self.i18n.locale_source_name).map(String::as_str)
  }
}
