/* src/cli/core/src/serve.rs */

use std::path::Path;

use anyhow::{anyhow, Result};
use polyglot_engine::{LocaleRecord, PageDescriptor};
use polyglot_server_axum::{IntoAxumRouter, LocalizedSite};

use crate::config::PolyglotConfig;
use crate::output::{read_json, LOCALES_FILE, PAGES_FILE};
use crate::ui;

/// Serve the last build output with locale negotiation.
pub async fn run_serve(config: &PolyglotConfig, base_dir: &Path, port: Option<u16>) -> Result<()> {
  let out_dir = base_dir.join(&config.build.out_dir);
  let pages: Vec<PageDescriptor> = read_json(&out_dir.join(PAGES_FILE))?;
  let records: Vec<LocaleRecord> = read_json(&out_dir.join(LOCALES_FILE))?;

  ui::banner("serve");
  ui::arrow(&format!("{} pages, {} locale records from {}", pages.len(), records.len(), out_dir.display()));

  let port = port.unwrap_or(config.serve.port);
  let site = LocalizedSite::new(config.i18n.clone(), pages, records)
    .with_path_prefix(&config.serve.path_prefix)
    .with_diagnostics(config.i18n.verbose);

  site.serve(&format!("0.0.0.0:{port}")).await.map_err(|e| anyhow!("preview server failed: {e}"))
}
