//! The header carousel: three random preview photos on every page.

use axum::response::Html;
use campus_core::{media, store::UniversityStore};

use crate::{
  AppState,
  error::Error,
  views::{self, Page},
};

/// Inline image references for the three header slots.
///
/// Each slot is drawn independently, so the same photo may fill more than
/// one slot when the preview pool is small.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderPreviews {
  pub first:  String,
  pub second: String,
  pub third:  String,
}

impl HeaderPreviews {
  /// Draw three preview photos from `store`.
  ///
  /// Returns `None` when no photo is flagged as a preview.
  pub async fn select<S>(store: &S) -> Result<Option<Self>, S::Error>
  where
    S: UniversityStore,
  {
    let (Some(first), Some(second), Some(third)) =
      (draw(store).await?, draw(store).await?, draw(store).await?)
    else {
      return Ok(None);
    };
    Ok(Some(Self { first, second, third }))
  }
}

async fn draw<S>(store: &S) -> Result<Option<String>, S::Error>
where
  S: UniversityStore,
{
  Ok(store.random_preview_photo().await?.as_ref().map(media::encode))
}

/// Render `page` with freshly drawn header previews.
pub async fn decorate<S>(state: &AppState<S>, page: Page) -> Result<Html<String>, Error>
where
  S: UniversityStore + Clone + Send + Sync + 'static,
{
  let previews = HeaderPreviews::select(&*state.store)
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  if previews.is_none() {
    tracing::debug!("no preview photos stored; header rendered without images");
  }
  Ok(Html(views::render(&page, previews.as_ref())?))
}
