/* src/engine/rust/src/urlpath.rs */

//! Path string helpers: split a path or URL into pathname/query/fragment
//! and toggle or strip trailing slashes.

use url::Url;

// Relative inputs need a base to resolve against; which one is irrelevant.
const PARSE_BASE: &str = "https://example.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
  pub pathname: String,
  /// Query including the leading `?`, or empty.
  pub search: String,
  /// Fragment including the leading `#`, or empty.
  pub hash: String,
}

impl UrlParts {
  /// Join a replacement pathname with this query and fragment.
  pub fn with_pathname(&self, pathname: &str) -> String {
    format!("{pathname}{}{}", self.search, self.hash)
  }
}

/// Split a path or absolute URL into its parts.
///
/// The pathname is normalized the way a URL parser resolves it (dot segments,
/// percent-encoding) and always starts with `/`. Query and fragment are taken
/// verbatim from the input. Returns `None` when the input cannot be parsed.
pub fn parse_url(raw: &str) -> Option<UrlParts> {
  let base = Url::parse(PARSE_BASE).ok()?;
  let parsed = base.join(raw).ok()?;

  let (before_hash, hash) = split_at(raw, '#');
  let (_, search) = split_at(before_hash, '?');

  let mut pathname = parsed.path().to_string();
  if !pathname.starts_with('/') {
    pathname.insert(0, '/');
  }

  Some(UrlParts { pathname, search: non_empty_part(search), hash: non_empty_part(hash) })
}

fn split_at(s: &str, delimiter: char) -> (&str, &str) {
  match s.find(delimiter) {
    Some(idx) => (&s[..idx], &s[idx..]),
    None => (s, ""),
  }
}

// A lone `?` or `#` carries nothing.
fn non_empty_part(part: &str) -> String {
  if part.len() <= 1 { String::new() } else { part.to_string() }
}

/// Append `/` if absent, strip one trailing `/` if present.
/// `""` and `"/"` toggle into each other.
pub fn toggle_trailing_slash(pathname: &str) -> String {
  match pathname.strip_suffix('/') {
    Some(stripped) => stripped.to_string(),
    None => format!("{pathname}/"),
  }
}

/// Remove exactly one trailing `/`, if any.
pub fn strip_trailing_slash(pathname: &str) -> &str {
  pathname.strip_suffix('/').unwrap_or(pathname)
}

/// Remove a site-wide path prefix (e.g. `/docs`) from the front of `pathname`.
///
/// The prefix's own trailing slash is ignored, so `/docs` and `/docs/` behave
/// the same. With `strip_trailing` the result also loses one trailing `/`.
pub fn remove_path_prefix(pathname: &str, prefix: &str, strip_trailing: bool) -> String {
  let prefix = strip_trailing_slash(prefix);
  let mut result = pathname;

  if !prefix.is_empty() {
    if let Some(rest) = pathname.strip_prefix(prefix) {
      if rest.is_empty() || rest.starts_with('/') {
        result = rest;
      }
    }
  }

  if strip_trailing {
    result = strip_trailing_slash(result);
  }
  result.to_string()
}

/// Inverse of [`remove_path_prefix`]: put the site-wide prefix in front of a
/// site-relative path.
pub fn with_path_prefix(prefix: &str, path: &str) -> String {
  format!("{}{path}", strip_trailing_slash(prefix))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn parts(pathname: &str, search: &str, hash: &str) -> UrlParts {
    UrlParts { pathname: pathname.into(), search: search.into(), hash: hash.into() }
  }

  #[test]
  fn parse_path_with_query_and_hash() {
    assert_eq!(parse_url("/path?query=value#hash"), Some(parts("/path", "?query=value", "#hash")));
  }

  #[test]
  fn parse_plain_path() {
    assert_eq!(parse_url("/simple/path"), Some(parts("/simple/path", "", "")));
  }

  #[test]
  fn parse_empty_is_root() {
    assert_eq!(parse_url(""), Some(parts("/", "", "")));
  }

  #[test]
  fn parse_absolute_url() {
    assert_eq!(
      parse_url("https://example.com/path?query=value#hash"),
      Some(parts("/path", "?query=value", "#hash"))
    );
  }

  #[test]
  fn parse_keeps_query_verbatim() {
    let parsed = parse_url("/path?q=a b&x=%20").unwrap();
    assert_eq!(parsed.search, "?q=a b&x=%20");
  }

  #[test]
  fn parse_drops_lone_delimiters() {
    assert_eq!(parse_url("/path?#"), Some(parts("/path", "", "")));
  }

  #[test]
  fn parse_resolves_dot_segments() {
    assert_eq!(parse_url("/a/../b").unwrap().pathname, "/b");
  }

  #[test]
  fn parse_rejects_broken_url() {
    assert_eq!(parse_url("http://[::1"), None);
  }

  #[test]
  fn with_pathname_reattaches() {
    assert_eq!(parts("/a", "?x=1", "#y").with_pathname("/b"), "/b?x=1#y");
  }

  #[test]
  fn toggle_adds_and_removes() {
    assert_eq!(toggle_trailing_slash("/path"), "/path/");
    assert_eq!(toggle_trailing_slash("/path/"), "/path");
  }

  #[test]
  fn toggle_root() {
    assert_eq!(toggle_trailing_slash("/"), "");
    assert_eq!(toggle_trailing_slash(""), "/");
  }

  #[test]
  fn strip_trailing() {
    assert_eq!(strip_trailing_slash("/path/"), "/path");
    assert_eq!(strip_trailing_slash("/path"), "/path");
    assert_eq!(strip_trailing_slash("/path//"), "/path/");
  }

  #[test]
  fn remove_prefix() {
    assert_eq!(remove_path_prefix("/custom/prefix/path/", "/custom/prefix", false), "/path/");
  }

  #[test]
  fn remove_prefix_root_prefix_is_noop() {
    assert_eq!(remove_path_prefix("/nested/path/", "/", false), "/nested/path/");
    assert_eq!(remove_path_prefix("/nested/path/", "", false), "/nested/path/");
  }

  #[test]
  fn remove_prefix_mixed_trailing_slashes() {
    assert_eq!(remove_path_prefix("/with/slash/path/", "/with/slash/", false), "/path/");
    assert_eq!(remove_path_prefix("/without/slash/path/", "/without/slash", false), "/path/");
  }

  #[test]
  fn remove_prefix_for_root() {
    assert_eq!(remove_path_prefix("/with/slash/", "/with/slash/", false), "/");
    assert_eq!(remove_path_prefix("/with/slash", "/with/slash/", false), "");
  }

  #[test]
  fn remove_prefix_only_on_segment_boundary() {
    assert_eq!(remove_path_prefix("/docs-old/page", "/docs", false), "/docs-old/page");
  }

  #[test]
  fn remove_prefix_and_strip() {
    assert_eq!(remove_path_prefix("/with/slash/path/", "/with/slash/", true), "/path");
  }

  #[test]
  fn add_prefix() {
    assert_eq!(with_path_prefix("/docs/", "/de/about"), "/docs/de/about");
    assert_eq!(with_path_prefix("/", "/de/about"), "/de/about");
    assert_eq!(with_path_prefix("", "/de/about"), "/de/about");
  }
}
