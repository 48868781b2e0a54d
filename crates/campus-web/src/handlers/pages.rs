//! Static pages and the alphabetical index.

use axum::{
  extract::State,
  http::StatusCode,
  response::{Html, IntoResponse, Response},
};
use campus_core::{
  guard::{NOT_FOUND_DESCRIPTION, NOT_FOUND_REASON},
  store::UniversityStore,
};

use crate::{AppState, error::Error, handlers::store_error, header::decorate, views::Page};

/// `GET /`
pub async fn home<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  decorate(&state, Page::Home).await
}

/// `GET /about`
pub async fn about<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  decorate(&state, Page::About).await
}

/// `GET /universities` — every main title, alphabetically.
pub async fn index<S>(State(state): State<AppState<S>>) -> Result<Html<String>, Error>
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  let titles = state
    .store
    .all_main_titles_sorted()
    .await
    .map_err(store_error)?;
  decorate(&state, Page::Index(titles)).await
}

/// Fallback for paths no route matches.
pub async fn fallback<S>(State(state): State<AppState<S>>) -> Result<Response, Error>
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  let page = Page::Error {
    code:        StatusCode::NOT_FOUND.as_u16(),
    reason:      NOT_FOUND_REASON,
    description: NOT_FOUND_DESCRIPTION,
  };
  Ok((StatusCode::NOT_FOUND, decorate(&state, page).await?).into_response())
}
