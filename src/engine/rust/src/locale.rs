/* src/engine/rust/src/locale.rs */

//! Ingestion of translation files laid out as `<language>/<namespace>.json`.

use std::path::{Component, Path};

use serde_json::Value;

use crate::error::LocaleError;
use crate::resources::LocaleRecord;

/// Turn one translation file into a locale record.
///
/// `relative_path` is relative to the locales directory. The parent directory
/// is the language and the file stem is the namespace. The content is stored
/// as compact JSON text, the form the assembler expects.
pub fn locale_record_from_file(relative_path: &Path, content: &str) -> Result<LocaleRecord, LocaleError> {
  let display = relative_path.display().to_string();
  let components: Vec<&str> = relative_path
    .components()
    .filter_map(|c| match c {
      Component::Normal(part) => part.to_str(),
      _ => None,
    })
    .collect();

  let [language, file] = components.as_slice() else {
    return Err(LocaleError::MisplacedFile(display));
  };
  let Some(namespace) = Path::new(file).file_stem().and_then(|s| s.to_str()) else {
    return Err(LocaleError::MisplacedFile(display));
  };

  let parsed: Value = serde_json::from_str(content)
    .map_err(|source| LocaleError::MalformedFile { file: display.clone(), source })?;
  // Serializing a Value cannot fail.
  let data = serde_json::to_string(&parsed).unwrap_or_default();

  Ok(LocaleRecord {
    language: (*language).to_string(),
    namespace: namespace.to_string(),
    data: Value::String(data),
  })
}

/// Whether a directory entry looks like a translation file.
pub fn is_locale_file(path: &Path) -> bool {
  path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}
