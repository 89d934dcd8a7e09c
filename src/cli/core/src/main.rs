/* src/cli/core/src/main.rs */

mod build;
mod config;
mod inspect;
mod output;
mod serve;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use config::{find_polyglot_config, load_polyglot_config, PolyglotConfig};

#[derive(Parser)]
#[command(name = "polyglot", about = "Localized routing for statically generated sites")]
struct Cli {
  /// Path to polyglot.toml (auto-detected if omitted)
  #[arg(short, long, global = true)]
  config: Option<PathBuf>,
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Expand pages per language and ingest locale files
  Build,
  /// Print the localized form of a path
  Link {
    /// Canonical (unlocalized) path, optionally with query and fragment
    to: String,
    /// Target language (default language if omitted)
    #[arg(short, long)]
    language: Option<String>,
  },
  /// Print the translation bundle a page would render with
  Resources {
    #[arg(short, long)]
    language: String,
    /// Namespace of the page, promoted to default when present
    #[arg(short, long)]
    namespace: Option<String>,
  },
  /// Preview the build output with locale redirects
  Serve {
    #[arg(short, long)]
    port: Option<u16>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, PolyglotConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_polyglot_config(&cwd)?
    }
  };
  let config = load_polyglot_config(&path)?;
  Ok((path, config))
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::from_default_env().add_directive("polyglot=info".parse()?),
    )
    .init();

  let cli = Cli::parse();
  let (config_path, config) = resolve_config(cli.config)?;
  let base_dir = config_path.parent().unwrap_or_else(|| Path::new("."));

  match cli.command {
    Command::Build => {
      let summary = build::run_build(&config, base_dir)?;
      info!(
        project = %config.project.name,
        source_pages = summary.source_pages,
        pages = summary.pages,
        records = summary.records,
        "build finished"
      );
    }
    Command::Link { to, language } => {
      println!("{}", inspect::localized_link(&config, &to, language.as_deref())?);
    }
    Command::Resources { language, namespace } => {
      let bundle = inspect::page_resources(&config, base_dir, &language, namespace.as_deref())?;
      println!("{}", serde_json::to_string_pretty(&bundle)?);
    }
    Command::Serve { port } => {
      serve::run_serve(&config, base_dir, port).await?;
    }
  }

  Ok(())
}
