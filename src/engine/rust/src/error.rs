/* src/engine/rust/src/error.rs */

use thiserror::Error;

/// Configuration shape errors. Surfaced eagerly; they block the build.
#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("languages must not be empty")]
  EmptyLanguages,

  #[error("language \"{0}\" is listed more than once in languages")]
  DuplicateLanguage(String),

  #[error("{field} \"{language}\" is not in languages {languages:?}")]
  UnknownLanguage { field: String, language: String, languages: Vec<String> },

  #[error("pages[{index}] ({match_path}): languages and exclude_languages are mutually exclusive")]
  ConflictingPageLanguages { index: usize, match_path: String },

  #[error("pages[{index}]: invalid match_path: {source}")]
  InvalidMatchPath {
    index: usize,
    #[source]
    source: PatternError,
  },

  #[error("site_url \"{url}\" is not an absolute URL: {reason}")]
  InvalidSiteUrl { url: String, reason: String },
}

#[derive(Debug, Error)]
pub enum PatternError {
  #[error("pattern \"{0}\" must start with '/'")]
  MissingLeadingSlash(String),

  #[error("pattern \"{pattern}\" has a parameter without a name at offset {offset}")]
  UnnamedParameter { pattern: String, offset: usize },

  #[error("pattern \"{pattern}\" repeats parameter \"{name}\"")]
  DuplicateParameter { pattern: String, name: String },

  #[error("pattern \"{pattern}\" failed to compile: {source}")]
  Regex {
    pattern: String,
    #[source]
    source: regex::Error,
  },
}

/// Content errors. Fatal for the affected file or record.
#[derive(Debug, Error)]
pub enum LocaleError {
  #[error("unable to parse JSON for file {file}: {source}")]
  MalformedFile {
    file: String,
    #[source]
    source: serde_json::Error,
  },

  #[error("unable to parse translation data for {language}/{namespace}: {source}")]
  MalformedResource {
    language: String,
    namespace: String,
    #[source]
    source: serde_json::Error,
  },

  #[error(
    "locale file {0} must sit directly inside a language directory (<language>/<namespace>.json)"
  )]
  MisplacedFile(String),
}

/// The preference store could not persist a value. Never blocks negotiation.
#[derive(Debug, Error)]
#[error("preference store unavailable: {0}")]
pub struct StoreError(pub String);
