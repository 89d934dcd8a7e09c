/* src/engine/rust/src/expand.rs */

//! Page fan-out: one source page becomes one page per language.
//!
//! Ordering of the produced pages is significant (hosts may resolve
//! overlapping routes first-registered-wins): the default-language or
//! language-from-path page comes first, then the alternatives in configured
//! language order.

use std::fmt::Display;

use tracing::{debug, warn};

use crate::error::PatternError;
use crate::options::{I18nOptions, PageOptions};
use crate::page::{LocalizationMetadata, PageDescriptor};
use crate::pattern::PathPattern;
use crate::translate::translate_pathname;


/// Result of expanding one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Expansion {
  /// The source page must be removed before registering `pages`.
  pub delete: bool,
  pub pages: Vec<PageDescriptor>,
}

impl Expansion {
  pub fn is_noop(&self) -> bool {
    !self.delete && self.pages.is_empty()
  }
}

/// Page registry of the host build pipeline.
pub trait PageActions {
  type Error: Display;

  fn delete_page(&mut self, page: &PageDescriptor) -> Result<(), Self::Error>;
  fn create_page(&mut self, page: PageDescriptor) -> Result<(), Self::Error>;
}

struct PageRule {
  options: PageOptions,
  pattern: PathPattern,
}

struct Variant<'a> {
  language: &'a str,
  path: String,
  original_path: String,
  routed: bool,
  match_path: Option<String>,
  languages: Option<&'a [String]>,
}

pub struct PageExpander {
  options: I18nOptions,
  rules: Vec<PageRule>,
}

impl PageExpander {
  /// Compile every `PageOptions::match_path` once up front.
  pub fn new(options: I18nOptions) -> Result<Self, PatternError> {
    let rules = options
      .pages
      .iter()
      .map(|page| {
        Ok(PageRule { options: page.clone(), pattern: PathPattern::compile(&page.match_path)? })
      })
      .collect::<Result<Vec<_>, PatternError>>()?;
    Ok(Self { options, rules })
  }

  /// First page rule whose pattern matches `path`.
  pub fn page_options(&self, path: &str) -> Option<&PageOptions> {
    self.find_rule(path).map(|rule| &rule.options)
  }

  fn find_rule(&self, path: &str) -> Option<&PageRule> {
    self.rules.iter().find(|rule| rule.pattern.is_match(path))
  }

  pub fn expand(&self, page: &PageDescriptor) -> Expansion {
    if page.is_localized() {
      debug!(path = %page.path, "page already localized, skipping");
      return Expansion::default();
    }

    let opts = &self.options;
    let rule = self.find_rule(&page.path);
    let page_opts = rule.map(|r| &r.options);
    let rule_languages = page_opts.and_then(|o| o.languages.as_deref());

    let mut alternatives = self.alternative_languages(page_opts);
    let mut variants = Vec::with_capacity(alternatives.len() + 1);

    match rule {
      Some(rule) if rule.options.get_language_from_path => {
        let Some(found) = rule.pattern.matches(&page.path) else {
          warn!(
            path = %page.path,
            match_path = %rule.options.match_path,
            "language-from-path pattern does not match its page, page left unlocalized"
          );
          return Expansion::default();
        };
        let captured = found.get("lang").filter(|lang| !lang.is_empty());
        let language = captured
          .and_then(|lang| opts.languages.iter().find(|l| l.as_str() == lang))
          .unwrap_or(&opts.default_language);
        // Only the first `/{language}` occurrence is removed, wherever it is.
        let original_path = page.path.replacen(&format!("/{language}"), "", 1);
        let routed = captured.is_some();

        variants.push(Variant {
          language,
          path: page.path.clone(),
          original_path,
          routed,
          match_path: page.match_path.clone(),
          languages: rule_languages,
        });

        // A captured language makes this the only page for the pattern. Without
        // a capture the alternatives survive only under exclude_languages.
        if routed || rule.options.exclude_languages.is_none() {
          alternatives.clear();
        }
      }
      _ => variants.push(Variant {
        language: &opts.default_language,
        path: page.path.clone(),
        original_path: page.path.clone(),
        routed: false,
        match_path: page.match_path.clone(),
        languages: rule_languages,
      }),
    }

    let is_404 = page.path == "/404" || page.path == "/404/";
    for language in alternatives {
      let (path, mut match_path) =
        match translate_pathname(&opts.path_translations, language, &page.path) {
          Some(translated) => {
            let match_path =
              page.match_path.as_ref().map(|mp| mp.replacen(&page.path, &translated, 1));
            (translated, match_path)
          }
          None => (
            format!("/{language}{}", page.path),
            page.match_path.as_ref().map(|mp| format!("/{language}{mp}")),
          ),
        };
      if is_404 {
        match_path = Some(format!("/{language}/*"));
      }

      variants.push(Variant {
        language,
        path,
        original_path: page.path.clone(),
        routed: true,
        match_path,
        languages: rule_languages,
      });
    }

    let pages = variants.into_iter().map(|v| self.build_page(page, v)).collect();
    Expansion { delete: true, pages }
  }

  /// Languages that get a prefixed copy of the page.
  fn alternative_languages<'a>(&'a self, page_opts: Option<&'a PageOptions>) -> Vec<&'a str> {
    let opts = &self.options;
    let suppress_default = |list: &'a [String]| -> Vec<&'a str> {
      list
        .iter()
        .map(String::as_str)
        .filter(|l| opts.generate_default_language_page || *l != opts.default_language)
        .collect()
    };

    let mut alternatives = suppress_default(&opts.languages);
    if let Some(excluded) = page_opts.and_then(|o| o.exclude_languages.as_ref()) {
      alternatives.retain(|l| !excluded.iter().any(|e| e.as_str() == *l));
    }
    if let Some(only) = page_opts.and_then(|o| o.languages.as_deref()) {
      alternatives = suppress_default(only);
    }
    alternatives
  }

  fn build_page(&self, source: &PageDescriptor, variant: Variant<'_>) -> PageDescriptor {
    let languages = variant.languages.unwrap_or(&self.options.languages).to_vec();
    let mut context = source.context.clone();
    context.insert("language".into(), serde_json::Value::String(variant.language.to_string()));

    PageDescriptor {
      i18n: Some(LocalizationMetadata {
        language: variant.language.to_string(),
        languages,
        routed: variant.routed,
        original_path: variant.original_path,
        path: variant.path.clone(),
      }),
      path: variant.path,
      match_path: variant.match_path,
      component: source.component.clone(),
      context,
    }
  }

  /// Expand `page` and replay the result on the host registry: delete the
  /// source page, then create the new pages in order. A failed delete (page
  /// already gone) is ignored; a failed create is returned.
  pub fn apply<A: PageActions>(
    &self,
    page: &PageDescriptor,
    actions: &mut A,
  ) -> Result<usize, A::Error> {
    let expansion = self.expand(page);
    if expansion.delete {
      if let Err(e) = actions.delete_page(page) {
        debug!(path = %page.path, error = %e, "ignoring failed page delete");
      }
    }
    let created = expansion.pages.len();
    for new_page in expansion.pages {
      actions.create_page(new_page)?;
    }
    Ok(created)
  }
}
