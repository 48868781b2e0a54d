//! University pages and the failure path for lookups that find nothing.
//!
//! | Method | Path | Key |
//! |--------|------|-----|
//! | `GET`  | `/{university}` | `"random"` or any title, case-insensitive |
//! | `GET`  | `/id/{id}` | decimal id without sign or leading zeros; anything else finds nothing |
//! | `GET`  | `/search?q=` | title typed into the search box |

use axum::{
  extract::{Path, Query, State},
  http::{HeaderMap, StatusCode, Uri, header},
  response::{IntoResponse, Redirect, Response},
};
use campus_core::{
  guard::{FailureOutcome, guard_failure},
  resolve::{LookupKey, resolve},
  store::UniversityStore,
};
use serde::Deserialize;

use crate::{
  AppState, ServerConfig, error::Error, handlers::store_error, header::decorate,
  views::Page,
};

// ─── Routes ──────────────────────────────────────────────────────────────────

/// `GET /{university}`
pub async fn by_name<S>(
  State(state): State<AppState<S>>,
  Path(name): Path<String>,
  headers: HeaderMap,
  uri: Uri,
) -> Result<Response, Error>
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  show(&state, Some(LookupKey::parse(&name)), &headers, &uri).await
}

/// `GET /id/{id}`
pub async fn by_id<S>(
  State(state): State<AppState<S>>,
  Path(id): Path<String>,
  headers: HeaderMap,
  uri: Uri,
) -> Result<Response, Error>
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  show(&state, parse_id(&id).map(LookupKey::Id), &headers, &uri).await
}

/// A plain decimal id: ASCII digits only, no sign, no leading zeros.
fn parse_id(segment: &str) -> Option<i64> {
  let digits = !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit());
  if !digits || (segment.len() > 1 && segment.starts_with('0')) {
    return None;
  }
  segment.parse().ok()
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
  pub q: Option<String>,
}

/// `GET /search?q=<title>`
///
/// A missing or blank `q` finds nothing; it is never taken to mean "random".
pub async fn search<S>(
  State(state): State<AppState<S>>,
  Query(params): Query<SearchParams>,
  headers: HeaderMap,
  uri: Uri,
) -> Result<Response, Error>
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  let key = params
    .q
    .map(|q| q.trim().to_owned())
    .filter(|q| !q.is_empty())
    .map(LookupKey::Alias);
  show(&state, key, &headers, &uri).await
}

// ─── Shared flow ─────────────────────────────────────────────────────────────

async fn show<S>(
  state: &AppState<S>,
  key: Option<LookupKey>,
  headers: &HeaderMap,
  uri: &Uri,
) -> Result<Response, Error>
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  let bag = match &key {
    Some(key) => resolve(&*state.store, key).await.map_err(store_error)?,
    None => None,
  };

  match bag {
    Some(bag) => Ok(decorate(state, Page::University(bag)).await?.into_response()),
    None => {
      tracing::debug!(?key, "lookup found nothing");
      not_resolved(state, headers, uri).await
    }
  }
}

async fn not_resolved<S>(
  state: &AppState<S>,
  headers: &HeaderMap,
  uri: &Uri,
) -> Result<Response, Error>
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  let current  = effective_url(&state.config, headers, uri);
  let referrer = headers.get(header::REFERER).and_then(|v| v.to_str().ok());

  match guard_failure(&current, referrer) {
    FailureOutcome::RedirectToReferrer(to) => Ok(Redirect::to(&to).into_response()),
    FailureOutcome::NotFound { code, reason, description } => {
      tracing::info!(url = %current, "unresolved lookup with no usable referrer");
      let status = StatusCode::from_u16(code).unwrap_or(StatusCode::NOT_FOUND);
      let page   = decorate(state, Page::Error { code, reason, description }).await?;
      Ok((status, page).into_response())
    }
  }
}

/// Reconstruct the absolute URL the client requested.
///
/// The scheme comes from `base_url`; the authority from the `Host` header,
/// falling back to `base_url` when the header is absent. Host names are
/// case-insensitive, so the authority is lower-cased.
pub fn effective_url(config: &ServerConfig, headers: &HeaderMap, uri: &Uri) -> String {
  let (scheme, base_authority) = config
    .base_url
    .split_once("://")
    .unwrap_or(("http", config.base_url.as_str()));
  let base_authority = base_authority.split('/').next().unwrap_or_default();

  let authority = headers
    .get(header::HOST)
    .and_then(|v| v.to_str().ok())
    .unwrap_or(base_authority)
    .to_ascii_lowercase();
  let path = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

  format!("{scheme}://{authority}{path}")
}

#[cfg(test)]
mod tests {
  use std::path::PathBuf;

  use axum::http::HeaderValue;

  use super::*;

  fn config(base_url: &str) -> ServerConfig {
    ServerConfig {
      host:       "127.0.0.1".into(),
      port:       8080,
      base_url:   base_url.into(),
      store_path: PathBuf::from(":memory:"),
    }
  }

  #[test]
  fn effective_url_prefers_host_header() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("example.org"));
    let uri: Uri = "/search?q=x".parse().unwrap();

    assert_eq!(
      effective_url(&config("https://campus.test/"), &headers, &uri),
      "https://example.org/search?q=x",
    );
  }

  #[test]
  fn effective_url_lowercases_authority() {
    let mut headers = HeaderMap::new();
    headers.insert(header::HOST, HeaderValue::from_static("LOCALHOST:8080"));
    let uri: Uri = "/Unknown?q=X".parse().unwrap();

    assert_eq!(
      effective_url(&config("http://127.0.0.1:8080"), &headers, &uri),
      "http://localhost:8080/Unknown?q=X",
    );
    assert_eq!(
      effective_url(&config("http://Campus.Test"), &HeaderMap::new(), &uri),
      "http://campus.test/Unknown?q=X",
    );
  }

  #[test]
  fn ids_are_plain_decimal() {
    assert_eq!(parse_id("1"), Some(1));
    assert_eq!(parse_id("0"), Some(0));
    assert_eq!(parse_id("120"), Some(120));
    for bad in ["", "+1", "-1", "01", "00", " 1", "1.0", "abc", "99999999999999999999"] {
      assert_eq!(parse_id(bad), None, "{bad:?}");
    }
  }

  #[test]
  fn effective_url_falls_back_to_base_url() {
    let uri: Uri = "/unknown".parse().unwrap();
    assert_eq!(
      effective_url(&config("http://127.0.0.1:8080"), &HeaderMap::new(), &uri),
      "http://127.0.0.1:8080/unknown",
    );
  }
}
