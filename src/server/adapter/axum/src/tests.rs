/* src/server/adapter/axum/src/tests.rs */

use axum::body::Body;
use axum::http::header::{ACCEPT_LANGUAGE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use polyglot_engine::{PageDescriptor, PageExpander};
use serde_json::{json, Value};
use tower::ServiceExt;

use super::*;

fn options() -> I18nOptions {
  let mut options = I18nOptions::new(vec!["en".into(), "de".into()], "en");
  options.fallback_language = Some("en".into());
  options.site_url = Some("https://example.org".into());
  options
}

fn record(language: &str, namespace: &str, data: &str) -> LocaleRecord {
  LocaleRecord { language: language.into(), namespace: namespace.into(), data: json!(data) }
}

fn site_with(options: I18nOptions, records: Vec<LocaleRecord>) -> LocalizedSite {
  let expander = PageExpander::new(options.clone()).unwrap();
  let sources = [PageDescriptor::new("/about"), PageDescriptor::new("/app/").with_match_path("/app/*")];
  let pages = sources.iter().flat_map(|page| expander.expand(page).pages).collect();
  LocalizedSite::new(options, pages, records)
}

fn site() -> LocalizedSite {
  site_with(
    options(),
    vec![
      record("en", "translation", r#"{"title":"About"}"#),
      record("de", "translation", r#"{"title":"Über uns"}"#),
    ],
  )
}

async fn get(site: LocalizedSite, uri: &str, headers: &[(&str, &str)]) -> Response {
  let mut req = Request::builder().uri(uri);
  for (name, value) in headers {
    req = req.header(*name, *value);
  }
  site.into_axum_router().oneshot(req.body(Body::empty()).unwrap()).await.unwrap()
}

async fn body_json(response: Response) -> Value {
  let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
  serde_json::from_slice(&bytes).unwrap()
}

fn header<'a>(response: &'a Response, name: &str) -> &'a str {
  response.headers().get(name).unwrap().to_str().unwrap()
}

#[tokio::test]
async fn browser_language_redirects_unrouted_page() {
  let res = get(site(), "/about?tab=team", &[(ACCEPT_LANGUAGE.as_str(), "fr, de;q=0.8")]).await;
  assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(header(&res, LOCATION.as_str()), "/de/about?tab=team");
  assert!(header(&res, SET_COOKIE.as_str()).starts_with("polyglot-language=de;"));
}

#[tokio::test]
async fn routed_page_renders_its_language() {
  let res = get(site(), "/de/about", &[(COOKIE.as_str(), "polyglot-language=en")]).await;
  assert_eq!(res.status(), StatusCode::OK);
  let body = body_json(res).await;
  assert_eq!(body["context"]["language"], "de");
  assert_eq!(body["context"]["routed"], true);
  assert_eq!(body["translations"]["resources"]["de"]["translation"]["title"], "Über uns");
  assert!(body["translations"]["resources"].get("en").is_none());
}

#[tokio::test]
async fn stored_preference_beats_browser() {
  let res = get(
    site(),
    "/about",
    &[(COOKIE.as_str(), "polyglot-language=en"), (ACCEPT_LANGUAGE.as_str(), "de")],
  )
  .await;
  assert_eq!(res.status(), StatusCode::OK);
  assert!(header(&res, SET_COOKIE.as_str()).starts_with("polyglot-language=en;"));
  let body = body_json(res).await;
  assert_eq!(body["page"]["path"], "/about");
  assert_eq!(body["translations"]["defaultNamespace"], "translation");
  assert_eq!(
    body["alternates"],
    json!([
      {"hreflang": "en", "href": "https://example.org/about"},
      {"hreflang": "de", "href": "https://example.org/de/about"},
      {"hreflang": "x-default", "href": "https://example.org/about"},
    ])
  );
}

#[tokio::test]
async fn redirect_disabled_serves_default_page() {
  let mut opts = options();
  opts.redirect = false;
  let res = get(site_with(opts, Vec::new()), "/about", &[(ACCEPT_LANGUAGE.as_str(), "de")]).await;
  assert_eq!(res.status(), StatusCode::OK);
  assert!(res.headers().get(SET_COOKIE).is_none());
}

#[tokio::test]
async fn match_path_serves_client_routes() {
  let res = get(site(), "/de/app/settings", &[]).await;
  assert_eq!(res.status(), StatusCode::OK);
  let body = body_json(res).await;
  assert_eq!(body["page"]["path"], "/de/app/");
}

#[tokio::test]
async fn unknown_page_is_404() {
  let res = get(site(), "/missing", &[]).await;
  assert_eq!(res.status(), StatusCode::NOT_FOUND);
  let body = body_json(res).await;
  assert_eq!(body["ok"], false);
  assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn malformed_translation_is_500() {
  let res = get(
    site_with(options(), vec![record("de", "translation", "{ not json")]),
    "/de/about",
    &[],
  )
  .await;
  assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
  let body = body_json(res).await;
  assert_eq!(body["error"]["code"], "MALFORMED_CONTENT");
}

#[tokio::test]
async fn path_prefix_is_kept_on_redirect() {
  let res = get(
    site().with_path_prefix("/docs"),
    "/docs/about",
    &[(ACCEPT_LANGUAGE.as_str(), "de-DE")],
  )
  .await;
  assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
  assert_eq!(header(&res, LOCATION.as_str()), "/docs/de/about");
}

#[tokio::test]
async fn pages_listing_keeps_registration_order() {
  let res = get(site(), "/_polyglot/pages.json", &[]).await;
  let body = body_json(res).await;
  let paths: Vec<&str> =
    body["pages"].as_array().unwrap().iter().map(|p| p["path"].as_str().unwrap()).collect();
  assert_eq!(paths, ["/about", "/de/about", "/app/", "/de/app/"]);
}
