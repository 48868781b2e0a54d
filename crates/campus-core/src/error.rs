//! Error types for `campus-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("a university needs exactly one main title, found {0}")]
  MainTitleCount(usize),

  #[error("title strings must not be empty")]
  EmptyTitle,

  #[error("photo format tag must not be empty")]
  EmptyFormat,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
