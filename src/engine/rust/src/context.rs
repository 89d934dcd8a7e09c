/* src/engine/rust/src/context.rs */

use serde::{Deserialize, Serialize};

use crate::options::{I18nOptions, PathTranslations};
use crate::page::LocalizationMetadata;

/// Everything link, navigation and negotiation helpers need to know about the
/// page being rendered. Built once per render and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationContext {
  /// Language statically assigned to the current page.
  pub language: String,
  pub languages: Vec<String>,
  /// The URL itself carried the language.
  pub routed: bool,
  pub default_language: String,
  pub generate_default_language_page: bool,
  /// Page path before localization.
  pub original_path: String,
  pub path: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub site_url: Option<String>,
  #[serde(default)]
  pub path_translations: PathTranslations,
}

impl NegotiationContext {
  pub fn from_page(meta: &LocalizationMetadata, options: &I18nOptions) -> Self {
    Self {
      language: meta.language.clone(),
      languages: meta.languages.clone(),
      routed: meta.routed,
      default_language: options.default_language.clone(),
      generate_default_language_page: options.generate_default_language_page,
      original_path: meta.original_path.clone(),
      path: meta.path.clone(),
      site_url: options.site_url.clone(),
      path_translations: options.path_translations.clone(),
    }
  }

  /// Context for a page that has not been localized, served in `language`.
  pub fn for_language(options: &I18nOptions, language: &str, path: &str) -> Self {
    Self {
      language: language.to_string(),
      languages: options.languages.clone(),
      routed: false,
      default_language: options.default_language.clone(),
      generate_default_language_page: options.generate_default_language_page,
      original_path: path.to_string(),
      path: path.to_string(),
      site_url: options.site_url.clone(),
      path_translations: options.path_translations.clone(),
    }
  }

  pub fn is_language(&self, language: &str) -> bool {
    self.languages.iter().any(|l| l == language)
  }
}
