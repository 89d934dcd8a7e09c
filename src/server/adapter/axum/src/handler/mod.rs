/* src/server/adapter/axum/src/handler/mod.rs */

mod page;

use std::collections::HashMap;
use std::sync::Arc;

use axum::routing::get;
use axum::Router;
use polyglot_engine::urlpath::toggle_trailing_slash;
use polyglot_engine::{
  locale_query, I18nOptions, LocaleError, LocaleRecord, PageDescriptor, PathPattern,
  ResourceAssembler, TranslationBundle,
};
use tracing::warn;

pub(crate) struct AppState {
  pub options: I18nOptions,
  /// Registration order, as produced by expansion.
  pub pages: Vec<Arc<PageDescriptor>>,
  pub by_path: HashMap<String, Arc<PageDescriptor>>,
  pub match_paths: Vec<(PathPattern, Arc<PageDescriptor>)>,
  pub records: Vec<LocaleRecord>,
  pub path_prefix: String,
  pub diagnostics: bool,
}

impl AppState {
  /// Exact path first (either slash form), then client-only `matchPath`
  /// routes. Earlier registrations win.
  pub fn find_page(&self, path: &str) -> Option<&Arc<PageDescriptor>> {
    self
      .by_path
      .get(path)
      .or_else(|| self.by_path.get(&toggle_trailing_slash(path)))
      .or_else(|| self.match_paths.iter().find(|(p, _)| p.is_match(path)).map(|(_, page)| page))
  }

  /// Translation bundle for one page language, built the way a page query
  /// filtered to that language would return it.
  pub fn bundle_for(
    &self,
    language: &str,
    page_namespace: Option<&str>,
  ) -> Result<TranslationBundle, LocaleError> {
    let query = locale_query(
      &self.options.locale_node_name,
      self.records.iter().filter(|r| r.language == language),
    );
    ResourceAssembler::new(&self.options)
      .with_diagnostics(self.diagnostics)
      .assemble(&query, page_namespace)
  }
}

pub(crate) fn build_router(
  options: I18nOptions,
  pages: Vec<PageDescriptor>,
  records: Vec<LocaleRecord>,
  path_prefix: String,
  diagnostics: bool,
) -> Router {
  let pages: Vec<Arc<PageDescriptor>> = pages.into_iter().map(Arc::new).collect();

  let mut by_path = HashMap::new();
  let mut match_paths = Vec::new();
  for page in &pages {
    by_path.entry(page.path.clone()).or_insert_with(|| page.clone());
    if let Some(ref match_path) = page.match_path {
      match PathPattern::compile(match_path) {
        Ok(pattern) => match_paths.push((pattern, page.clone())),
        Err(e) => warn!(path = %page.path, error = %e, "ignoring page matchPath"),
      }
    }
  }

  let state = Arc::new(AppState {
    options,
    pages,
    by_path,
    match_paths,
    records,
    path_prefix,
    diagnostics,
  });

  Router::new()
    .route("/_polyglot/pages.json", get(page::handle_pages))
    .fallback(page::handle_page)
    .with_state(state)
}
