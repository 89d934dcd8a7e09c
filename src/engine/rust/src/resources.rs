/* src/engine/rust/src/resources.rs */

//! Fold the locale records attached to a rendered page into the resource
//! map a translation lookup component consumes:
//! `language -> namespace -> parsed JSON object`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::error::LocaleError;
use crate::options::I18nOptions;

pub type Resources = BTreeMap<String, BTreeMap<String, Value>>;

/// One translation namespace of one language.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocaleRecord {
  pub language: String,
  pub namespace: String,
  /// JSON text, or an already parsed object.
  pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationBundle {
  pub resources: Resources,
  pub default_namespace: String,
  pub fallback_namespaces: Vec<String>,
}

impl TranslationBundle {
  fn empty(default_namespace: &str) -> Self {
    Self {
      resources: Resources::new(),
      default_namespace: default_namespace.to_string(),
      fallback_namespaces: Vec::new(),
    }
  }
}

/// Locale nodes under `node_name`: `edges[].node` when present, else `nodes`.
pub fn locale_nodes_from_data(data: &Value, node_name: &str) -> Vec<Value> {
  let Some(query) = data.get(node_name) else {
    return Vec::new();
  };
  if let Some(edges) = query.get("edges").and_then(Value::as_array) {
    return edges.iter().filter_map(|edge| edge.get("node").cloned()).collect();
  }
  query.get("nodes").and_then(Value::as_array).cloned().unwrap_or_default()
}

/// Shape `records` like a page query result: `{node_name: {nodes: [...]}}`.
pub fn locale_query<'a>(node_name: &str, records: impl IntoIterator<Item = &'a LocaleRecord>) -> Value {
  let nodes: Vec<Value> = records
    .into_iter()
    .map(|r| serde_json::json!({"language": r.language, "namespace": r.namespace, "data": r.data}))
    .collect();
  let mut query = serde_json::Map::new();
  query.insert(node_name.to_string(), serde_json::json!({ "nodes": nodes }));
  Value::Object(query)
}

fn node_namespace(node: &Value) -> Option<&str> {
  node
    .get("namespace")
    .and_then(Value::as_str)
    .or_else(|| node.get("ns").and_then(Value::as_str))
}

/// Every node needs a string `language`, a string `data` and a string
/// namespace under either `namespace` or `ns`.
pub fn validate_locale_nodes(nodes: &[Value]) -> bool {
  nodes.iter().all(|node| {
    node.get("language").is_some_and(Value::is_string)
      && node.get("data").is_some_and(Value::is_string)
      && node_namespace(node).is_some()
  })
}

/// Unify the namespace field and drop everything else. Nodes without a
/// namespace get `default_namespace`.
pub fn normalize_locale_nodes(nodes: &[Value], default_namespace: &str) -> Vec<LocaleRecord> {
  nodes
    .iter()
    .map(|node| LocaleRecord {
      language: node.get("language").and_then(Value::as_str).unwrap_or_default().to_string(),
      namespace: node_namespace(node).unwrap_or(default_namespace).to_string(),
      data: node.get("data").cloned().unwrap_or(Value::Null),
    })
    .collect()
}

/// Later records overwrite earlier ones for the same language and namespace.
pub fn fold_resources(records: &[LocaleRecord]) -> Result<Resources, LocaleError> {
  let mut resources = Resources::new();
  for record in records {
    let parsed = match record.data {
      Value::String(ref text) => {
        serde_json::from_str(text).map_err(|source| LocaleError::MalformedResource {
          language: record.language.clone(),
          namespace: record.namespace.clone(),
          source,
        })?
      }
      ref other => other.clone(),
    };
    resources.entry(record.language.clone()).or_default().insert(record.namespace.clone(), parsed);
  }
  Ok(resources)
}

/// Pick the default namespace and the fallback list.
///
/// The configured default stays unless the page names another namespace that
/// was actually collected; fallbacks are the remaining collected namespaces in
/// first-seen order.
pub fn select_namespaces(
  collected: &[String],
  configured_default: &str,
  page_namespace: Option<&str>,
) -> (String, Vec<String>) {
  let default = match page_namespace {
    Some(ns) if ns != configured_default && collected.iter().any(|c| c == ns) => ns,
    _ => configured_default,
  };
  let fallback = collected.iter().filter(|ns| ns.as_str() != default).cloned().collect();
  (default.to_string(), fallback)
}

pub struct ResourceAssembler {
  node_name: String,
  default_namespace: String,
  languages: usize,
  diagnostics: bool,
}

impl ResourceAssembler {
  pub fn new(options: &I18nOptions) -> Self {
    Self {
      node_name: options.locale_node_name.clone(),
      default_namespace: options.default_namespace.clone(),
      languages: options.languages.len(),
      diagnostics: false,
    }
  }

  /// Emit authoring hints (missing or malformed locale query). Development only.
  pub fn with_diagnostics(mut self, enabled: bool) -> Self {
    self.diagnostics = enabled;
    self
  }

  /// Build the bundle for one page from its query result.
  ///
  /// Missing or malformed locale nodes yield an empty bundle; only JSON that
  /// fails to parse is an error.
  pub fn assemble(
    &self,
    data: &Value,
    page_namespace: Option<&str>,
  ) -> Result<TranslationBundle, LocaleError> {
    let nodes = locale_nodes_from_data(data, &self.node_name);

    if nodes.is_empty() {
      if self.languages > 1 {
        self.query_hint("no locale records found");
      }
      return Ok(TranslationBundle::empty(&self.default_namespace));
    }
    if !validate_locale_nodes(&nodes) {
      self.query_hint("locale records are missing language, data or namespace");
      return Ok(TranslationBundle::empty(&self.default_namespace));
    }

    let records = normalize_locale_nodes(&nodes, &self.default_namespace);
    let resources = fold_resources(&records)?;

    let mut collected: Vec<String> = Vec::new();
    for record in &records {
      if !collected.contains(&record.namespace) {
        collected.push(record.namespace.clone());
      }
    }
    let (default_namespace, fallback_namespaces) =
      select_namespaces(&collected, &self.default_namespace, page_namespace);

    Ok(TranslationBundle { resources, default_namespace, fallback_namespaces })
  }

  fn query_hint(&self, problem: &str) {
    if !self.diagnostics {
      return;
    }
    let key = &self.node_name;
    warn!(
      "{problem} under \"{key}\". Every page needs a locale query shaped like:\n\
       {key} {{ edges {{ node {{ namespace data language }} }} }}\n\
       filtered to the page language."
    );
  }
}
