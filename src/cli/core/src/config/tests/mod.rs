/* src/cli/core/src/config/tests/mod.rs */

use super::*;


const MINIMAL: &str = r#"
[project]
name = "site"

[i18n]
languages = ["en", "de"]
default_language = "en"
"#;

#[test]
fn minimal_config_defaults() {
  let config: PolyglotConfig = toml::from_str(MINIMAL).unwrap();
  assert_eq!(config.project.name, "site");
  assert_eq!(config.build.pages, "pages.json");
  assert_eq!(config.build.out_dir, ".polyglot/output");
  assert_eq!(config.locale_source(), Some("locales"));
  assert_eq!(config.serve.port, 3000);
  assert_eq!(config.serve.path_prefix, "/");
  assert!(config.i18n.redirect);
  assert_eq!(config.i18n.default_namespace, "translation");
}

#[test]
fn full_config_parses_page_rules_and_translations() {
  let config: PolyglotConfig = toml::from_str(
    r#"
[project]
name = "docs"

[i18n]
languages = ["en", "de", "es"]
default_language = "en"
fallback_language = "en"
site_url = "https://example.org"
trailing_slash = "never"
locale_source_name = "translations"

[[i18n.pages]]
match_path = "/:lang?/blog/:uid"
get_language_from_path = true
exclude_languages = ["es"]

[[i18n.pages]]
match_path = "/preview"
languages = ["en"]

[i18n.path_translations.de]
"/about" = "/ueber-uns"

[build]
pages = "public/pages.json"
out_dir = "dist"

[build.sources]
translations = "content/i18n"

[serve]
port = 8080
path_prefix = "/docs"
"#,
  )
  .unwrap();

  assert_eq!(config.i18n.pages.len(), 2);
  assert!(config.i18n.pages[0].get_language_from_path);
  assert_eq!(config.i18n.pages[0].exclude_languages.as_deref(), Some(&["es".to_string()][..]));
  assert_eq!(config.i18n.path_translations["de"]["/about"], "/ueber-uns");
  assert_eq!(config.locale_source(), Some("content/i18n"));
  assert_eq!(config.serve.port, 8080);
  assert!(config.i18n.validate().is_ok());
}

#[test]
fn missing_source_entry() {
  let config: PolyglotConfig = toml::from_str(&format!(
    "{MINIMAL}\n[build.sources]\nmarkdown = \"content\"\n"
  ))
  .unwrap();
  assert_eq!(config.locale_source(), None);
}
