/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use polyglot_engine::LocaleError;

#[derive(Debug)]
pub enum AdapterError {
  NotFound(String),
  /// Translation data attached to the page could not be parsed.
  Locale(LocaleError),
}

impl AdapterError {
  fn status(&self) -> StatusCode {
    match self {
      Self::NotFound(_) => StatusCode::NOT_FOUND,
      Self::Locale(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn code(&self) -> &'static str {
    match self {
      Self::NotFound(_) => "NOT_FOUND",
      Self::Locale(_) => "MALFORMED_CONTENT",
    }
  }
}

impl std::fmt::Display for AdapterError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Self::NotFound(path) => write!(f, "no page registered for {path}"),
      Self::Locale(e) => write!(f, "{e}"),
    }
  }
}

impl IntoResponse for AdapterError {
  fn into_response(self) -> Response {
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": self.code(),
        "message": self.to_string(),
      }
    });
    (self.status(), axum::Json(body)).into_response()
  }
}

impl From<LocaleError> for AdapterError {
  fn from(err: LocaleError) -> Self {
    Self::Locale(err)
  }
}
