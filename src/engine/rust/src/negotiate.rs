/* src/engine/rust/src/negotiate.rs */

//! View-time language negotiation: pick the visitor's language from the
//! stored preference or the browser list and decide whether an unrouted page
//! should redirect to its localized path.

use tracing::debug;

use crate::context::NegotiationContext;
use crate::error::StoreError;
use crate::options::{I18nOptions, TrailingSlash};
use crate::translate::{localize, LocalizedLink};
use crate::urlpath::remove_path_prefix;

/// Storage key (client storage entry or cookie name) of the last resolved language.
pub const PREFERENCE_KEY: &str = "polyglot-language";

/// Persisted visitor language preference.
pub trait PreferenceStore {
  fn get(&self) -> Option<String>;
  fn set(&mut self, language: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
  value: Option<String>,
}

impl MemoryPreferenceStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_value(language: impl Into<String>) -> Self {
    Self { value: Some(language.into()) }
  }

  pub fn value(&self) -> Option<&str> {
    self.value.as_deref()
  }
}

impl PreferenceStore for MemoryPreferenceStore {
  fn get(&self) -> Option<String> {
    self.value.clone()
  }

  fn set(&mut self, language: &str) -> Result<(), StoreError> {
    self.value = Some(language.to_string());
    Ok(())
  }
}

/// The request being viewed.
#[derive(Debug, Clone, Default)]
pub struct Visit {
  /// Pathname as requested, including any site-wide path prefix.
  pub pathname: String,
  pub search: String,
  pub hash: String,
  /// Visitor languages, most preferred first.
  pub browser_languages: Vec<String>,
}

impl Visit {
  pub fn new(pathname: impl Into<String>) -> Self {
    Self { pathname: pathname.into(), ..Self::default() }
  }

  pub fn with_browser_languages(mut self, languages: &[&str]) -> Self {
    self.browser_languages = languages.iter().map(ToString::to_string).collect();
    self
  }
}

fn primary_subtag(tag: &str) -> &str {
  tag.split(['-', '_']).next().unwrap_or(tag)
}

/// First browser language that maps onto a configured language: exact
/// (case-insensitive), then `de-AT` -> `de`, then `de` -> `de-DE`.
pub fn match_browser_language(browser: &[String], languages: &[String]) -> Option<String> {
  for wanted in browser {
    let short = primary_subtag(wanted);
    let hit = languages
      .iter()
      .find(|l| l.eq_ignore_ascii_case(wanted))
      .or_else(|| languages.iter().find(|l| l.eq_ignore_ascii_case(short)))
      .or_else(|| languages.iter().find(|l| primary_subtag(l).eq_ignore_ascii_case(short)));
    if let Some(language) = hit {
      return Some(language.clone());
    }
  }
  None
}

pub struct LocaleNegotiator {
  redirect: bool,
  fallback_language: Option<String>,
  trailing_slash: TrailingSlash,
  path_prefix: String,
}

impl LocaleNegotiator {
  pub fn new(options: &I18nOptions) -> Self {
    Self {
      redirect: options.redirect,
      fallback_language: options.fallback_language.clone(),
      trailing_slash: options.trailing_slash,
      path_prefix: "/".to_string(),
    }
  }

  /// Site-wide prefix to drop from visited pathnames before localizing.
  pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.path_prefix = prefix.into();
    self
  }

  /// Stored preference, else browser match, else fallback (or page) language.
  /// Anything not configured for this page resolves to the page language.
  pub fn requested_language(
    &self,
    ctx: &NegotiationContext,
    visit: &Visit,
    store: &impl PreferenceStore,
  ) -> String {
    let requested = store.get().filter(|stored| !stored.is_empty()).unwrap_or_else(|| {
      match_browser_language(&visit.browser_languages, &ctx.languages).unwrap_or_else(|| {
        self.fallback_language.clone().unwrap_or_else(|| ctx.language.clone())
      })
    });
    if ctx.is_language(&requested) { requested } else { ctx.language.clone() }
  }

  /// Redirect target (site-relative, without path prefix) for an unrouted
  /// page, or `None` to render in place. Records the requested language in
  /// `store` whenever negotiation runs; a failed write is ignored.
  pub fn decide_redirect(
    &self,
    ctx: &NegotiationContext,
    visit: &Visit,
    store: &mut impl PreferenceStore,
  ) -> Option<String> {
    if !self.redirect || ctx.routed {
      return None;
    }

    let requested = self.requested_language(ctx, visit, &*store);
    if let Err(e) = store.set(&requested) {
      debug!(language = %requested, error = %e, "could not persist language preference");
    }

    if requested == ctx.default_language {
      return None;
    }

    let strip_trailing = self.trailing_slash == TrailingSlash::Never;
    let path = remove_path_prefix(&visit.pathname, &self.path_prefix, strip_trailing);
    let target = localize(ctx, &format!("{path}{}{}", visit.search, visit.hash), Some(&requested));
    debug!(from = %visit.pathname, to = %target.to, language = %requested, "locale redirect");
    Some(target.to)
  }
}

/// Link to `to` (default: the current page) in `language`, remembering the
/// choice as the visitor's preference.
pub fn change_language(
  ctx: &NegotiationContext,
  language: &str,
  to: Option<&str>,
  store: &mut impl PreferenceStore,
) -> LocalizedLink {
  let link = localize(ctx, to.unwrap_or(&ctx.original_path), Some(language));
  if let Err(e) = store.set(language) {
    debug!(%language, error = %e, "could not persist language preference");
  }
  link
}

/// Localized target for in-site navigation in the current page language.
pub fn navigate_target(ctx: &NegotiationContext, to: &str) -> String {
  localize(ctx, to, None).to
}
