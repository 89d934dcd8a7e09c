/* src/server/adapter/axum/src/lib.rs */

mod error;
mod handler;
mod preference;

pub use error::AdapterError;
pub use preference::{browser_languages, parse_accept_language, CookiePreferenceStore};

/// Re-export the engine for convenience
pub use polyglot_engine;

use polyglot_engine::{I18nOptions, LocaleRecord, PageDescriptor};

/// Expanded pages plus the locale records they render with.
pub struct LocalizedSite {
  options: I18nOptions,
  pages: Vec<PageDescriptor>,
  records: Vec<LocaleRecord>,
  path_prefix: String,
  diagnostics: bool,
}

impl LocalizedSite {
  pub fn new(options: I18nOptions, pages: Vec<PageDescriptor>, records: Vec<LocaleRecord>) -> Self {
    Self { options, pages, records, path_prefix: "/".to_string(), diagnostics: false }
  }

  /// Serve the site below a path prefix such as `/docs`.
  pub fn with_path_prefix(mut self, prefix: impl Into<String>) -> Self {
    self.path_prefix = prefix.into();
    self
  }

  /// Log missing-translation hints while serving.
  pub fn with_diagnostics(mut self, enabled: bool) -> Self {
    self.diagnostics = enabled;
    self
  }
}

/// Extension trait that converts a `LocalizedSite` into an Axum router.
pub trait IntoAxumRouter {
  fn into_axum_router(self) -> axum::Router;
  fn serve(
    self,
    addr: &str,
  ) -> impl std::future::Future<Output = Result<(), Box<dyn std::error::Error>>> + Send;
}

impl IntoAxumRouter for LocalizedSite {
  fn into_axum_router(self) -> axum::Router {
    handler::build_router(self.options, self.pages, self.records, self.path_prefix, self.diagnostics)
  }

  async fn serve(self, addr: &str) -> Result<(), Box<dyn std::error::Error>> {
    let router = self.into_axum_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!("polyglot preview running on http://localhost:{}", local_addr.port());
    axum::serve(listener, router).await?;
    Ok(())
  }
}

#[cfg(test)]
mod tests;
