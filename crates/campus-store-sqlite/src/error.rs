//! Error type for `campus-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] campus_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The stored data breaks the one-main-title invariant.
  #[error("university {0} has no main title")]
  MissingMainTitle(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
