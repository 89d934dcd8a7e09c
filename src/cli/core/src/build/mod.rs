/* src/cli/core/src/build/mod.rs */

mod locales;
mod registry;

#[cfg(test)]
mod tests;

use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use polyglot_engine::{PageDescriptor, PageExpander};

pub use locales::ingest_locales;
pub use registry::PageRegistry;

use crate::config::PolyglotConfig;
use crate::output::{read_json, write_json, LOCALES_FILE, PAGES_FILE};
use crate::ui;

#[derive(Debug)]
pub struct BuildSummary {
  pub source_pages: usize,
  pub pages: usize,
  pub records: usize,
}

/// Run every source page through the expander, replaying deletes and creates
/// on the registry in order.
pub fn expand_pages(config: &PolyglotConfig, sources: Vec<PageDescriptor>) -> Result<PageRegistry> {
  let expander = PageExpander::new(config.i18n.clone()).context("invalid [[i18n.pages]] rule")?;
  let mut registry = PageRegistry::new(sources.clone());
  for page in &sources {
    expander
      .apply(page, &mut registry)
      .with_context(|| format!("failed to register localized pages for {}", page.path))?;
  }
  Ok(registry)
}

pub fn run_build(config: &PolyglotConfig, base_dir: &Path) -> Result<BuildSummary> {
  let started = Instant::now();
  ui::banner("build");

  ui::step(1, 3, "expanding pages");
  let sources: Vec<PageDescriptor> = read_json(&base_dir.join(&config.build.pages))?;
  let source_pages = sources.len();
  let registry = expand_pages(config, sources)?;
  ui::detail_ok(&format!("{source_pages} source pages -> {} pages", registry.pages().len()));

  ui::step(2, 3, "ingesting locales");
  let source = config.locale_source().with_context(|| {
    format!("no [build.sources] entry named \"{}\"", config.i18n.locale_source_name)
  })?;
  let records = ingest_locales(&base_dir.join(source), config.i18n.verbose)?;
  ui::detail_ok(&format!("{} locale records", records.len()));

  ui::step(3, 3, "writing output");
  let out_dir = base_dir.join(&config.build.out_dir);
  std::fs::create_dir_all(&out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;
  let size = write_json(&out_dir.join(PAGES_FILE), registry.pages())?;
  ui::detail_ok(&format!("{PAGES_FILE}  {}", ui::format_size(size)));
  let size = write_json(&out_dir.join(LOCALES_FILE), &records)?;
  ui::detail_ok(&format!("{LOCALES_FILE}  {}", ui::format_size(size)));

  ui::blank();
  ui::ok(&format!("build complete in {:.2}s", started.elapsed().as_secs_f64()));
  ui::blank();

  Ok(BuildSummary { source_pages, pages: registry.pages().len(), records: records.len() })
}
