/* src/cli/core/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::{find_polyglot_config, load_polyglot_config};
pub use types::PolyglotConfig;
