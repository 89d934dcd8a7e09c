/* src/engine/rust/src/options.rs */

//! Plugin configuration surface. The engine treats these as validated,
//! immutable inputs; `validate` is the schema check run once at load time.

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::pattern::PathPattern;

pub const DEFAULT_SOURCE_NAME: &str = "locale";
pub const DEFAULT_NODE_NAME: &str = "locales";
pub const DEFAULT_NAMESPACE: &str = "translation";

/// language -> (canonical pathname -> translated pathname)
pub type PathTranslations = BTreeMap<String, BTreeMap<String, String>>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrailingSlash {
  #[default]
  Always,
  Never,
  Ignore,
}

/// Per-path overrides, selected by the first `match_path` that matches a page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageOptions {
  pub match_path: String,
  /// Take the language from the `:lang` parameter instead of generating
  /// one page per language.
  #[serde(default)]
  pub get_language_from_path: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub exclude_languages: Option<Vec<String>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub languages: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct I18nOptions {
  pub languages: Vec<String>,
  pub default_language: String,
  /// Also generate `/{default}/page` next to the unprefixed page.
  #[serde(default)]
  pub generate_default_language_page: bool,
  /// Redirect visitors to their preferred language on unrouted pages.
  #[serde(default = "default_true")]
  pub redirect: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub site_url: Option<String>,
  #[serde(default)]
  pub pages: Vec<PageOptions>,
  #[serde(default)]
  pub path_translations: PathTranslations,
  #[serde(default = "default_source_name")]
  pub locale_source_name: String,
  #[serde(default = "default_node_name")]
  pub locale_node_name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub fallback_language: Option<String>,
  #[serde(default)]
  pub trailing_slash: TrailingSlash,
  #[serde(default = "default_namespace")]
  pub default_namespace: String,
  #[serde(default = "default_true")]
  pub verbose: bool,
}

fn default_true() -> bool {
  true
}

fn default_source_name() -> String {
  DEFAULT_SOURCE_NAME.to_string()
}

fn default_node_name() -> String {
  DEFAULT_NODE_NAME.to_string()
}

fn default_namespace() -> String {
  DEFAULT_NAMESPACE.to_string()
}

impl I18nOptions {
  /// Minimal options: every other field takes its default.
  pub fn new(languages: Vec<String>, default_language: impl Into<String>) -> Self {
    Self {
      languages,
      default_language: default_language.into(),
      generate_default_language_page: false,
      redirect: true,
      site_url: None,
      pages: Vec::new(),
      path_translations: PathTranslations::new(),
      locale_source_name: default_source_name(),
      locale_node_name: default_node_name(),
      fallback_language: None,
      trailing_slash: TrailingSlash::default(),
      default_namespace: default_namespace(),
      verbose: true,
    }
  }

  pub fn is_language(&self, language: &str) -> bool {
    self.languages.iter().any(|l| l == language)
  }

  pub fn validate(&self) -> Result<(), ConfigError> {
    if self.languages.is_empty() {
      return Err(ConfigError::EmptyLanguages);
    }
    let mut seen = HashSet::new();
    for language in &self.languages {
      if !seen.insert(language.as_str()) {
        return Err(ConfigError::DuplicateLanguage(language.clone()));
      }
    }

    self.check_language("default_language", &self.default_language)?;
    if let Some(ref fallback) = self.fallback_language {
      self.check_language("fallback_language", fallback)?;
    }
    for language in self.path_translations.keys() {
      self.check_language("path_translations", language)?;
    }

    for (index, page) in self.pages.iter().enumerate() {
      if page.languages.is_some() && page.exclude_languages.is_some() {
        return Err(ConfigError::ConflictingPageLanguages {
          index,
          match_path: page.match_path.clone(),
        });
      }
      let listed = page.languages.iter().chain(page.exclude_languages.iter()).flatten();
      for language in listed {
        self.check_language(&format!("pages[{index}] language"), language)?;
      }
      PathPattern::compile(&page.match_path)
        .map_err(|source| ConfigError::InvalidMatchPath { index, source })?;
    }

    if let Some(ref site_url) = self.site_url {
      let parsed = url::Url::parse(site_url).map_err(|e| ConfigError::InvalidSiteUrl {
        url: site_url.clone(),
        reason: e.to_string(),
      })?;
      if parsed.cannot_be_a_base() {
        return Err(ConfigError::InvalidSiteUrl {
          url: site_url.clone(),
          reason: "not a hierarchical URL".into(),
        });
      }
    }

    Ok(())
  }

  fn check_language(&self, field: &str, language: &str) -> Result<(), ConfigError> {
    if self.is_language(language) {
      return Ok(());
    }
    Err(ConfigError::UnknownLanguage {
      field: field.to_string(),
      language: language.to_string(),
      languages: self.languages.clone(),
    })
  }
}
