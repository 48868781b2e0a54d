//! The `UniversityStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `campus-store-sqlite`).
//! The resolver and the web layer depend on this abstraction, not on any
//! concrete backend.

use std::future::Future;

use crate::university::{NewUniversity, Photo, University};

/// Abstraction over a campus store backend.
///
/// "Not found" is never an error: lookups that match nothing return
/// `Ok(None)` (or an empty `Vec`). `Err` is reserved for the backend itself
/// failing.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait UniversityStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Seeding ───────────────────────────────────────────────────────────

  /// Validate and persist a university together with its titles and photos.
  /// Either everything is written or nothing is.
  fn add_university(
    &self,
    input: NewUniversity,
  ) -> impl Future<Output = Result<University, Self::Error>> + Send + '_;

  // ── Lookups ───────────────────────────────────────────────────────────

  /// Retrieve a university by id.
  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<University>, Self::Error>> + Send + '_;

  /// Retrieve the university owning the first title (in storage order) whose
  /// lower-case projection equals `normalized`.
  ///
  /// The caller lower-cases the input; the backend performs an exact match.
  fn find_by_alias<'a>(
    &'a self,
    normalized: &'a str,
  ) -> impl Future<Output = Result<Option<University>, Self::Error>> + Send + 'a;

  /// A uniformly random university, or `None` when the store is empty.
  fn find_random(
    &self,
  ) -> impl Future<Output = Result<Option<University>, Self::Error>> + Send + '_;

  // ── Joins ─────────────────────────────────────────────────────────────

  /// The display string of the university's main title.
  fn main_title_of(
    &self,
    university_id: i64,
  ) -> impl Future<Output = Result<String, Self::Error>> + Send + '_;

  /// All photos of a university, in storage order.
  fn photos_of(
    &self,
    university_id: i64,
  ) -> impl Future<Output = Result<Vec<Photo>, Self::Error>> + Send + '_;

  /// Every main title, alphabetically ordered.
  fn all_main_titles_sorted(
    &self,
  ) -> impl Future<Output = Result<Vec<String>, Self::Error>> + Send + '_;

  /// A uniformly random preview-flagged photo from any university.
  fn random_preview_photo(
    &self,
  ) -> impl Future<Output = Result<Option<Photo>, Self::Error>> + Send + '_;
}
