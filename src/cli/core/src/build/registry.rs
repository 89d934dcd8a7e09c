/* src/cli/core/src/build/registry.rs */

use anyhow::{bail, Context, Result};
use polyglot_engine::{PageActions, PageDescriptor};
use tracing::debug;

/// In-memory page list standing in for the site generator's page store.
/// Registration order is preserved.
#[derive(Debug, Default)]
pub struct PageRegistry {
  pages: Vec<PageDescriptor>,
}

impl PageRegistry {
  pub fn new(pages: Vec<PageDescriptor>) -> Self {
    Self { pages }
  }

  pub fn pages(&self) -> &[PageDescriptor] {
    &self.pages
  }

  fn position(&self, path: &str) -> Option<usize> {
    self.pages.iter().position(|p| p.path == path)
  }
}

impl PageActions for PageRegistry {
  type Error = anyhow::Error;

  fn delete_page(&mut self, page: &PageDescriptor) -> Result<()> {
    let idx = self.position(&page.path).with_context(|| format!("page {} is not registered", page.path))?;
    self.pages.remove(idx);
    Ok(())
  }

  /// A page registered again under the same path replaces the earlier one in place.
  fn create_page(&mut self, page: PageDescriptor) -> Result<()> {
    if !page.path.starts_with('/') {
      bail!("page path {:?} must start with /", page.path);
    }
    match self.position(&page.path) {
      Some(idx) => {
        debug!(path = %page.path, "replacing registered page");
        self.pages[idx] = page;
      }
      None => self.pages.push(page),
    }
    Ok(())
  }
}
