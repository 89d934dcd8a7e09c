/* src/engine/rust/src/page.rs */

use serde::{Deserialize, Serialize};

/// Localization state attached to a page once it has been expanded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizationMetadata {
  pub language: String,
  pub languages: Vec<String>,
  /// The language was taken from the URL.
  pub routed: bool,
  pub original_path: String,
  pub path: String,
}

/// A page as the host build pipeline describes it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageDescriptor {
  pub path: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub match_path: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub component: Option<String>,
  /// Arbitrary page data handed to the page at render time.
  #[serde(default)]
  pub context: serde_json::Map<String, serde_json::Value>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub i18n: Option<LocalizationMetadata>,
}

impl PageDescriptor {
  pub fn new(path: impl Into<String>) -> Self {
    Self {
      path: path.into(),
      match_path: None,
      component: None,
      context: serde_json::Map::new(),
      i18n: None,
    }
  }

  pub fn with_match_path(mut self, match_path: impl Into<String>) -> Self {
    self.match_path = Some(match_path.into());
    self
  }

  /// Pages that already carry localization metadata are never expanded again.
  pub fn is_localized(&self) -> bool {
    self.i18n.is_some()
  }

  pub fn language(&self) -> Option<&str> {
    self.i18n.as_ref().map(|meta| meta.language.as_str())
  }
}
