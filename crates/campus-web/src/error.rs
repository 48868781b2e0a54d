//! Error types and axum `IntoResponse` implementation.

use axum::{
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;

/// A failure the request cannot recover from.
///
/// Lookups that find nothing are not errors; they go through
/// [`campus_core::guard`]. Only the store or the page writer failing ends
/// up here.
#[derive(Debug, Error)]
pub enum Error {
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),

  #[error("render error: {0}")]
  Render(#[from] std::io::Error),
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    match self {
      Error::Store(e) => {
        // Details stay in the log; the client gets a generic message.
        tracing::error!(error = %e, "store failure while handling request");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
      }
      Error::Render(e) => {
        tracing::error!(error = %e, "failed to render page");
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
      }
    }
  }
}
