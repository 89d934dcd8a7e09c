/* src/server/adapter/axum/src/handler/page.rs */

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::http::{HeaderMap, Uri};
use axum::response::{IntoResponse, Redirect, Response};
use polyglot_engine::{
  alternate_links, remove_path_prefix, with_path_prefix, AlternateLink, LocaleNegotiator,
  NegotiationContext, PageDescriptor, TranslationBundle, Visit,
};
use serde::Serialize;
use tracing::debug;

use super::AppState;
use crate::error::AdapterError;
use crate::preference::{browser_languages, CookiePreferenceStore};

#[derive(Serialize)]
struct PageView<'a> {
  page: &'a PageDescriptor,
  context: &'a NegotiationContext,
  alternates: Vec<AlternateLink>,
  translations: TranslationBundle,
}

fn page_context(state: &AppState, page: &PageDescriptor) -> NegotiationContext {
  match page.i18n {
    Some(ref meta) => NegotiationContext::from_page(meta, &state.options),
    None => NegotiationContext::for_language(&state.options, &state.options.default_language, &page.path),
  }
}

fn page_namespace(page: &PageDescriptor) -> Option<&str> {
  page.context.get("ns").and_then(serde_json::Value::as_str)
}

fn with_cookie(mut response: Response, store: &CookiePreferenceStore) -> Response {
  if let Some(cookie) = store.set_cookie() {
    response.headers_mut().append(SET_COOKIE, cookie);
  }
  response
}

pub(super) async fn handle_pages(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let pages: Vec<&PageDescriptor> = state.pages.iter().map(Arc::as_ref).collect();
  axum::Json(serde_json::json!({ "ok": true, "pages": pages }))
}

pub(super) async fn handle_page(
  State(state): State<Arc<AppState>>,
  uri: Uri,
  headers: HeaderMap,
) -> Result<Response, AdapterError> {
  let mut site_path = remove_path_prefix(uri.path(), &state.path_prefix, false);
  if site_path.is_empty() {
    site_path.push('/');
  }
  let page = state.find_page(&site_path).ok_or_else(|| AdapterError::NotFound(site_path.clone()))?;
  let ctx = page_context(&state, page);

  let visit = Visit {
    pathname: uri.path().to_string(),
    search: uri.query().map(|q| format!("?{q}")).unwrap_or_default(),
    hash: String::new(),
    browser_languages: browser_languages(&headers),
  };
  let mut store = CookiePreferenceStore::from_headers(&headers);
  let negotiator = LocaleNegotiator::new(&state.options).with_path_prefix(state.path_prefix.clone());

  if let Some(target) = negotiator.decide_redirect(&ctx, &visit, &mut store) {
    let location = with_path_prefix(&state.path_prefix, &target);
    debug!(from = %uri, to = %location, "redirecting to localized page");
    return Ok(with_cookie(Redirect::temporary(&location).into_response(), &store));
  }

  let translations = state.bundle_for(&ctx.language, page_namespace(page))?;
  let view = PageView { page, context: &ctx, alternates: alternate_links(&ctx), translations };
  Ok(with_cookie(axum::Json(view).into_response(), &store))
}
