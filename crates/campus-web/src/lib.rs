//! HTTP layer for the campus site.
//!
//! Exposes an axum [`Router`] serving university pages backed by any
//! [`UniversityStore`].

pub mod error;
pub mod handlers;
pub mod header;
pub mod seed;
pub mod views;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{Router, routing::get};
use campus_core::store::UniversityStore;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use handlers::{pages, university};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml`.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  /// Public origin of the site, e.g. `http://127.0.0.1:8080`. Supplies the
  /// scheme (and the authority when a request has no `Host` header) of the
  /// URL compared against the referrer on failed lookups.
  pub base_url:   String,
  pub store_path: PathBuf,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: UniversityStore> {
  pub store:  Arc<S>,
  pub config: Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the site [`Router`].
pub fn router<S>(state: AppState<S>) -> Router
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  Router::new()
    .route("/",              get(pages::home::<S>))
    .route("/about",         get(pages::about::<S>))
    .route("/universities",  get(pages::index::<S>))
    .route("/search",        get(university::search::<S>))
    .route("/id/{id}",       get(university::by_id::<S>))
    .route("/{university}",  get(university::by_name::<S>))
    .fallback(pages::fallback::<S>)
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Integration tests ────────────────────────────────────────────────────────
