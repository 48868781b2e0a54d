//! Administrative seeding from a JSON manifest.
//!
//! ```json
//! {
//!   "universities": [{
//!     "about": "…",
//!     "link_to_wikipedia": "https://…",
//!     "titles": [{ "title": "МГУ", "is_main": true }, { "title": "MSU" }],
//!     "photos": [{ "path": "msu/main.jpg", "preview": true }]
//!   }]
//! }
//! ```
//!
//! Photo paths are relative to the manifest. When `format` is omitted it is
//! taken from the file extension.

use std::path::{Path, PathBuf};

use campus_core::{
  store::UniversityStore,
  university::{NewPhoto, NewTitle, NewUniversity},
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SeedError {
  #[error("cannot read {path:?}: {source}")]
  Io {
    path:   PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("invalid seed manifest: {0}")]
  Json(#[from] serde_json::Error),

  #[error("cannot infer image format of {0:?}; set \"format\" explicitly")]
  UnknownFormat(PathBuf),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

// ─── Manifest ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct Manifest {
  pub universities: Vec<SeedUniversity>,
}

#[derive(Debug, Deserialize)]
pub struct SeedUniversity {
  pub about:             Option<String>,
  pub link_to_wikipedia: Option<String>,
  pub titles:            Vec<NewTitle>,
  #[serde(default)]
  pub photos:            Vec<SeedPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct SeedPhoto {
  pub path:    PathBuf,
  pub format:  Option<String>,
  #[serde(default)]
  pub preview: bool,
}

// ─── Loading ─────────────────────────────────────────────────────────────────

/// Read a manifest and every photo it references.
pub async fn load(manifest_path: &Path) -> Result<Vec<NewUniversity>, SeedError> {
  let raw = tokio::fs::read(manifest_path)
    .await
    .map_err(|source| SeedError::Io { path: manifest_path.to_path_buf(), source })?;
  let manifest: Manifest = serde_json::from_slice(&raw)?;
  let base = manifest_path.parent().unwrap_or_else(|| Path::new("."));

  let mut out = Vec::with_capacity(manifest.universities.len());
  for u in manifest.universities {
    let mut photos = Vec::with_capacity(u.photos.len());
    for p in u.photos {
      let path = base.join(&p.path);
      let format = match p.format {
        Some(f) => f,
        None => infer_format(&path)?,
      };
      let photo = tokio::fs::read(&path)
        .await
        .map_err(|source| SeedError::Io { path: path.clone(), source })?;
      photos.push(NewPhoto { photo, format, preview: p.preview });
    }
    out.push(NewUniversity {
      about: u.about,
      link_to_wikipedia: u.link_to_wikipedia,
      titles: u.titles,
      photos,
    });
  }
  Ok(out)
}

/// Write every university to `store`, returning how many were stored.
pub async fn apply<S>(store: &S, universities: Vec<NewUniversity>) -> Result<usize, SeedError>
where
  S: UniversityStore,
{
  let mut stored = 0;
  for u in universities {
    let created = store
      .add_university(u)
      .await
      .map_err(|e| SeedError::Store(Box::new(e)))?;
    tracing::info!(id = created.id, "seeded university");
    stored += 1;
  }
  Ok(stored)
}

fn infer_format(path: &Path) -> Result<String, SeedError> {
  path
    .extension()
    .and_then(|e| e.to_str())
    .filter(|e| !e.is_empty())
    .map(str::to_lowercase)
    .ok_or_else(|| SeedError::UnknownFormat(path.to_path_buf()))
}
