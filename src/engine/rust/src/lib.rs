/* src/engine/rust/src/lib.rs */

pub mod context;
pub mod error;
pub mod expand;
pub mod locale;
pub mod negotiate;
pub mod options;
pub mod page;
pub mod pattern;
pub mod resources;
pub mod translate;
pub mod urlpath;

// Public API re-exports
pub use context::NegotiationContext;
pub use error::{ConfigError, LocaleError, PatternError, StoreError};
pub use expand::{Expansion, PageActions, PageExpander};
pub use locale::{is_locale_file, locale_record_from_file};
pub use negotiate::{
  change_language, match_browser_language, navigate_target, LocaleNegotiator,
  MemoryPreferenceStore, PreferenceStore, Visit, PREFERENCE_KEY,
};
pub use options::{I18nOptions, PageOptions, PathTranslations, TrailingSlash};
pub use page::{LocalizationMetadata, PageDescriptor};
pub use pattern::{PathMatch, PathPattern};
pub use resources::{
  fold_resources, locale_query, LocaleRecord, ResourceAssembler, Resources, TranslationBundle,
};
pub use translate::{alternate_links, localize, AlternateLink, LocalizedLink};
pub use urlpath::{parse_url, remove_path_prefix, with_path_prefix, UrlParts};
