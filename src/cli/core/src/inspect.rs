/* src/cli/core/src/inspect.rs */

// Read-only commands: `link` and `resources`.

use std::path::Path;

use anyhow::{bail, Result};
use polyglot_engine::{
  locale_query, localize, LocaleRecord, NegotiationContext, ResourceAssembler, TranslationBundle,
};

use crate::config::PolyglotConfig;
use crate::output::{read_json, LOCALES_FILE};

fn check_language(config: &PolyglotConfig, language: &str) -> Result<()> {
  if !config.i18n.is_language(language) {
    bail!("unknown language \"{language}\" (configured: {})", config.i18n.languages.join(", "));
  }
  Ok(())
}

/// Localized form of `to` in `language` (default language when omitted).
pub fn localized_link(config: &PolyglotConfig, to: &str, language: Option<&str>) -> Result<String> {
  let language = language.unwrap_or(&config.i18n.default_language);
  check_language(config, language)?;
  let ctx = NegotiationContext::for_language(&config.i18n, language, to);
  Ok(localize(&ctx, to, None).to)
}

/// Translation bundle a page in `language` would render with.
pub fn page_resources(
  config: &PolyglotConfig,
  base_dir: &Path,
  language: &str,
  namespace: Option<&str>,
) -> Result<TranslationBundle> {
  check_language(config, language)?;
  let path = base_dir.join(&config.build.out_dir).join(LOCALES_FILE);
  let records: Vec<LocaleRecord> = read_json(&path)?;
  let query =
    locale_query(&config.i18n.locale_node_name, records.iter().filter(|r| r.language == language));
  let bundle = ResourceAssembler::new(&config.i18n)
    .with_diagnostics(config.i18n.verbose)
    .assemble(&query, namespace)?;
  Ok(bundle)
}
