/* src/engine/rust/src/translate.rs */

//! Map an internal path to its language-qualified form: an explicit path
//! translation when one is configured, the `/{language}` prefix otherwise.

use serde::Serialize;

use crate::context::NegotiationContext;
use crate::options::PathTranslations;
use crate::urlpath::{parse_url, toggle_trailing_slash, UrlParts};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocalizedLink {
  pub to: String,
  pub language: String,
}

/// Localize `to` for `language`, or for the context's language when `None`.
///
/// Callers pass canonical (unlocalized) paths; localizing an already prefixed
/// path prefixes it again.
pub fn localize(ctx: &NegotiationContext, to: &str, language: Option<&str>) -> LocalizedLink {
  let language = language.unwrap_or(&ctx.language);
  let to = translated_url(&ctx.path_translations, language, to)
    .unwrap_or_else(|| prefix_path(ctx, language, to));
  LocalizedLink { to, language: language.to_string() }
}

/// Explicit translation for a full path or URL, keeping its query and fragment.
fn translated_url(translations: &PathTranslations, language: &str, to: &str) -> Option<String> {
  // Unparseable input is looked up as an opaque pathname.
  let parts = parse_url(to).unwrap_or_else(|| UrlParts {
    pathname: to.to_string(),
    search: String::new(),
    hash: String::new(),
  });
  translate_pathname(translations, language, &parts.pathname)
    .map(|translated| parts.with_pathname(&translated))
}

/// Look up `pathname` in the translation table of `language`.
///
/// Falls back to the slash-toggled pathname. A hit on the toggled key returns
/// the toggled translation, so the output slash follows the input rather than
/// the table entry: with `{"/a/": "/b/"}`, `/a` becomes `/b`; with
/// `{"/a": "/b/"}`, `/a/` becomes `/b`. Empty entries count as missing.
pub fn translate_pathname(
  translations: &PathTranslations,
  language: &str,
  pathname: &str,
) -> Option<String> {
  let table = translations.get(language)?;
  let lookup = |key: &str| table.get(key).map(String::as_str).filter(|t| !t.is_empty());
  if let Some(translated) = lookup(pathname) {
    return Some(translated.to_string());
  }
  lookup(&toggle_trailing_slash(pathname)).map(toggle_trailing_slash)
}

/// Whether paths in `language` carry a `/{language}` prefix.
pub fn has_language_prefix(ctx: &NegotiationContext, language: &str) -> bool {
  ctx.generate_default_language_page || language != ctx.default_language
}

pub fn prefix_path(ctx: &NegotiationContext, language: &str, path: &str) -> String {
  if has_language_prefix(ctx, language) { format!("/{language}{path}") } else { path.to_string() }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlternateLink {
  /// A language code, or `x-default`.
  pub hreflang: String,
  pub href: String,
}

/// Absolute URLs of the current page in every page language, plus an
/// `x-default` entry for the default language. Empty without a site URL.
pub fn alternate_links(ctx: &NegotiationContext) -> Vec<AlternateLink> {
  let Some(ref site_url) = ctx.site_url else {
    return Vec::new();
  };
  let site_url = site_url.trim_end_matches('/');
  let href = |language: &str| {
    let link = localize(ctx, &ctx.original_path, Some(language));
    format!("{site_url}{}", link.to)
  };

  let mut links: Vec<AlternateLink> = ctx
    .languages
    .iter()
    .map(|language| AlternateLink { hreflang: language.clone(), href: href(language) })
    .collect();
  links.push(AlternateLink { hreflang: "x-default".into(), href: href(&ctx.default_language) });
  links
}
