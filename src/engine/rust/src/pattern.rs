/* src/engine/rust/src/pattern.rs */

//! Route templates such as `/:lang?/blog/:uid` or `/:lang/*`, compiled once
//! into a regex and matched against concrete page paths.
//!
//! Supported syntax:
//! - `:name` captures one non-empty segment
//! - `:name?` optional segment; a `/` right before it becomes optional too
//! - `*` captures the rest of the path (exposed as `"0"`, `"1"`, ...)
//!
//! Matching is case-insensitive and tolerates one trailing delimiter.

use std::collections::BTreeMap;

use regex::Regex;

use crate::error::PatternError;

const SEGMENT: &str = r"([^/#?]+?)";

#[derive(Debug, Clone)]
pub struct PathPattern {
  source: String,
  regex: Regex,
  params: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathMatch {
  params: BTreeMap<String, String>,
}

impl PathMatch {
  pub fn get(&self, name: &str) -> Option<&str> {
    self.params.get(name).map(String::as_str)
  }
}

impl PathPattern {
  pub fn compile(pattern: &str) -> Result<Self, PatternError> {
    if !pattern.starts_with('/') {
      return Err(PatternError::MissingLeadingSlash(pattern.to_string()));
    }

    let mut body = String::new();
    let mut literal = String::new();
    let mut params: Vec<String> = Vec::new();
    let mut wildcards = 0usize;
    let mut chars = pattern.char_indices().peekable();

    while let Some((offset, ch)) = chars.next() {
      match ch {
        ':' => {
          let mut name = String::new();
          while let Some(&(_, c)) = chars.peek() {
            if !(c.is_ascii_alphanumeric() || c == '_') {
              break;
            }
            name.push(c);
            chars.next();
          }
          if name.is_empty() {
            return Err(PatternError::UnnamedParameter { pattern: pattern.to_string(), offset });
          }
          if params.contains(&name) {
            return Err(PatternError::DuplicateParameter { pattern: pattern.to_string(), name });
          }

          if chars.next_if(|&(_, c)| c == '?').is_some() {
            let absorbs_slash = literal.ends_with('/');
            if absorbs_slash {
              literal.pop();
            }
            flush_literal(&mut body, &mut literal);
            if absorbs_slash {
              body.push_str(&format!("(?:/{SEGMENT})?"));
            } else {
              body.push_str(&format!("{SEGMENT}?"));
            }
          } else {
            flush_literal(&mut body, &mut literal);
            body.push_str(SEGMENT);
          }
          params.push(name);
        }
        '*' => {
          flush_literal(&mut body, &mut literal);
          body.push_str("(.*)");
          params.push(wildcards.to_string());
          wildcards += 1;
        }
        _ => literal.push(ch),
      }
    }
    flush_literal(&mut body, &mut literal);

    let regex = Regex::new(&format!("(?i)^{body}[/#?]?$"))
      .map_err(|source| PatternError::Regex { pattern: pattern.to_string(), source })?;

    Ok(Self { source: pattern.to_string(), regex, params })
  }

  pub fn as_str(&self) -> &str {
    &self.source
  }

  /// Parameter names in declaration order.
  pub fn param_names(&self) -> &[String] {
    &self.params
  }

  pub fn is_match(&self, path: &str) -> bool {
    self.regex.is_match(path)
  }

  pub fn matches(&self, path: &str) -> Option<PathMatch> {
    let caps = self.regex.captures(path)?;
    let params = self
      .params
      .iter()
      .enumerate()
      .filter_map(|(i, name)| caps.get(i + 1).map(|m| (name.clone(), m.as_str().to_string())))
      .collect();
    Some(PathMatch { params })
  }
}

fn flush_literal(body: &mut String, literal: &mut String) {
  if !literal.is_empty() {
    body.push_str(&regex::escape(literal));
    literal.clear();
  }
}
