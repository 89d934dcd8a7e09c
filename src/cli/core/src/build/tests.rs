/* src/cli/core/src/build/tests.rs */

use std::fs;
use std::path::Path;

use polyglot_engine::{LocaleRecord, PageActions};
use serde_json::{json, Value};

use super::*;

const CONFIG: &str = r#"
[project]
name = "site"

[i18n]
languages = ["en", "de"]
default_language = "en"
verbose = false

[i18n.path_translations.de]
"/about" = "/ueber-uns"
"#;

fn project(pages: Value) -> (tempfile::TempDir, PolyglotConfig) {
  let tmp = tempfile::tempdir().unwrap();
  fs::write(tmp.path().join("pages.json"), pages.to_string()).unwrap();
  write_locale(tmp.path(), "en/translation.json", "{\n  \"title\": \"About\"\n}\n");
  write_locale(tmp.path(), "de/translation.json", "{\"title\": \"Über uns\"}");
  let config: PolyglotConfig = toml::from_str(CONFIG).unwrap();
  (tmp, config)
}

fn write_locale(root: &Path, relative: &str, content: &str) {
  let path = root.join("locales").join(relative);
  fs::create_dir_all(path.parent().unwrap()).unwrap();
  fs::write(path, content).unwrap();
}

#[test]
fn build_writes_expanded_pages_and_locales() {
  let (tmp, config) = project(json!([
    {"path": "/about", "component": "src/pages/about.tsx"},
    {"path": "/404/"},
  ]));

  let summary = run_build(&config, tmp.path()).unwrap();
  assert_eq!(summary.source_pages, 2);
  assert_eq!(summary.pages, 4);
  assert_eq!(summary.records, 2);

  let out = tmp.path().join(".polyglot/output");
  let pages: Vec<PageDescriptor> = read_json(&out.join(PAGES_FILE)).unwrap();
  let paths: Vec<&str> = pages.iter().map(|p| p.path.as_str()).collect();
  assert_eq!(paths, ["/about", "/ueber-uns", "/404/", "/de/404/"]);
  assert_eq!(pages[1].language(), Some("de"));
  assert_eq!(pages[1].component.as_deref(), Some("src/pages/about.tsx"));
  assert_eq!(pages[3].match_path.as_deref(), Some("/de/*"));

  let records: Vec<LocaleRecord> = read_json(&out.join(LOCALES_FILE)).unwrap();
  assert_eq!(records[0].language, "de");
  assert_eq!(records[1].language, "en");
  assert_eq!(records[1].data, json!("{\"title\":\"About\"}"));
}

#[test]
fn build_keeps_already_localized_pages() {
  let (tmp, config) = project(json!([
    {"path": "/de/about", "i18n": {
      "language": "de", "languages": ["en", "de"], "routed": true,
      "originalPath": "/about", "path": "/de/about"
    }},
  ]));

  let summary = run_build(&config, tmp.path()).unwrap();
  assert_eq!(summary.pages, 1);
}

#[test]
fn nested_locale_dir_fails_build() {
  let (tmp, config) = project(json!([{"path": "/"}]));
  write_locale(tmp.path(), "de/extra/common.json", "{}");

  let err = run_build(&config, tmp.path()).unwrap_err();
  assert!(err.to_string().contains("must sit directly inside a language directory"));
}

#[test]
fn malformed_locale_fails_build() {
  let (tmp, config) = project(json!([{"path": "/"}]));
  write_locale(tmp.path(), "de/common.json", "{ \"broken\": ");

  let err = run_build(&config, tmp.path()).unwrap_err();
  assert!(err.to_string().contains("de/common.json"));
}

#[test]
fn missing_locales_dir_is_not_fatal() {
  let (tmp, config) = project(json!([{"path": "/"}]));
  fs::remove_dir_all(tmp.path().join("locales")).unwrap();

  let summary = run_build(&config, tmp.path()).unwrap();
  assert_eq!(summary.records, 0);
  assert_eq!(summary.pages, 2);
}

#[test]
fn unknown_locale_source_fails_build() {
  let (tmp, mut config) = project(json!([]));
  config.i18n.locale_source_name = "i18n".into();

  let err = run_build(&config, tmp.path()).unwrap_err();
  assert_eq!(err.to_string(), "no [build.sources] entry named \"i18n\"");
}

#[test]
fn registry_delete_requires_registered_page() {
  let mut registry = PageRegistry::default();
  assert!(registry.delete_page(&PageDescriptor::new("/gone")).is_err());
}

#[test]
fn registry_replaces_same_path_in_place() {
  let mut registry =
    PageRegistry::new(vec![PageDescriptor::new("/a"), PageDescriptor::new("/b")]);
  registry.create_page(PageDescriptor::new("/a").with_match_path("/a/*")).unwrap();
  assert_eq!(registry.pages().len(), 2);
  assert_eq!(registry.pages()[0].match_path.as_deref(), Some("/a/*"));
  assert!(registry.create_page(PageDescriptor::new("relative")).is_err());
}
