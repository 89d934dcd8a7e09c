/* src/server/adapter/axum/src/preference.rs */

//! Request-side language hints: the preference cookie and `Accept-Language`.

use axum::http::header::{ACCEPT_LANGUAGE, COOKIE};
use axum::http::{HeaderMap, HeaderValue};
use polyglot_engine::{PreferenceStore, StoreError, PREFERENCE_KEY};

const COOKIE_MAX_AGE: u32 = 60 * 60 * 24 * 365;

/// Preference store backed by the `polyglot-language` cookie. Writes are
/// collected and turned into a `Set-Cookie` header for the response.
#[derive(Debug, Default)]
pub struct CookiePreferenceStore {
  current: Option<String>,
  pending: Option<String>,
}

impl CookiePreferenceStore {
  pub fn from_headers(headers: &HeaderMap) -> Self {
    let current = headers
      .get_all(COOKIE)
      .iter()
      .filter_map(|v| v.to_str().ok())
      .find_map(|header| parse_cookie(header, PREFERENCE_KEY));
    Self { current, pending: None }
  }

  /// `Set-Cookie` value for the last written preference, if any.
  pub fn set_cookie(&self) -> Option<HeaderValue> {
    let language = self.pending.as_deref()?;
    let cookie = format!("{PREFERENCE_KEY}={language}; Path=/; Max-Age={COOKIE_MAX_AGE}; SameSite=Lax");
    HeaderValue::from_str(&cookie).ok()
  }
}

impl PreferenceStore for CookiePreferenceStore {
  fn get(&self) -> Option<String> {
    self.pending.clone().or_else(|| self.current.clone())
  }

  fn set(&mut self, language: &str) -> Result<(), StoreError> {
    let valid = !language.is_empty()
      && language.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_');
    if !valid {
      return Err(StoreError(format!("{language:?} is not a valid cookie value")));
    }
    self.pending = Some(language.to_string());
    Ok(())
  }
}

fn parse_cookie(header: &str, name: &str) -> Option<String> {
  for pair in header.split(';') {
    if let Some((k, v)) = pair.trim().split_once('=') {
      if k.trim() == name {
        let v = v.trim();
        if !v.is_empty() {
          return Some(v.to_string());
        }
      }
    }
  }
  None
}

/// Language tags from `Accept-Language`, highest quality first. Entries with
/// `q=0` and the `*` wildcard are dropped; equal weights keep header order.
/// A weight that is not a number in `[0, 1]` counts as `q=0`.
pub fn browser_languages(headers: &HeaderMap) -> Vec<String> {
  headers
    .get(ACCEPT_LANGUAGE)
    .and_then(|v| v.to_str().ok())
    .map(parse_accept_language)
    .unwrap_or_default()
}

pub fn parse_accept_language(header: &str) -> Vec<String> {
  let mut entries: Vec<(&str, f64)> = Vec::new();
  for part in header.split(',') {
    let part = part.trim();
    if part.is_empty() {
      continue;
    }
    let mut segments = part.split(';');
    let lang = segments.next().unwrap_or("").trim();
    let mut q = 1.0_f64;
    for s in segments {
      if let Some(val) = s.trim().strip_prefix("q=") {
        if let Ok(v) = val.trim().parse::<f64>() {
          q = if v.is_finite() && (0.0..=1.0).contains(&v) { v } else { 0.0 };
        }
      }
    }
    if lang.is_empty() || lang == "*" || q <= 0.0 {
      continue;
    }
    entries.push((lang, q));
  }

  // sort_by is stable, so ties keep header order
  entries.sort_by(|a, b| b.1.total_cmp(&a.1));
  entries.into_iter().map(|(lang, _)| lang.to_string()).collect()
}
