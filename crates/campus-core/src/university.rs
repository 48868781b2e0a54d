//! Entity records: universities, their titles and their photos.
//!
//! These are plain value holders. Persisting them is the job of a
//! [`UniversityStore`](crate::store::UniversityStore) backend; nothing here
//! touches storage.

use serde::Deserialize;

use crate::{Error, Result};

// ─── Stored records ──────────────────────────────────────────────────────────

/// The canonical record for one university.
///
/// Its titles and photos are owned by it and live in their own tables; see
/// [`NewTitle`] and [`Photo`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct University {
  pub id:                i64,
  pub about:             Option<String>,
  pub link_to_wikipedia: Option<String>,
}

/// A stored image belonging to a university.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Photo {
  pub id:            i64,
  pub university_id: i64,
  pub photo:         Vec<u8>,
  /// File extension, e.g. `"jpg"` or `"png"`.
  pub format:        String,
  /// Eligible for the site-wide header carousel.
  pub preview:       bool,
}

/// Lower-case a title for alias matching.
///
/// Uses Unicode case folding so that Cyrillic and other non-ASCII titles
/// normalize the same way on write and on lookup.
pub fn normalize(title: &str) -> String { title.to_lowercase() }

// ─── Seeding input ───────────────────────────────────────────────────────────

/// A title to be written alongside a new university.
///
/// Exactly one title per university has `is_main` set; that one is the
/// display name. The others are aliases. The lower-case projection used for
/// alias lookup is derived from `title`, never set on its own.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTitle {
  pub title:   String,
  #[serde(default)]
  pub is_main: bool,
}

impl NewTitle {
  pub fn main(title: impl Into<String>) -> Self {
    Self { title: title.into(), is_main: true }
  }

  pub fn alias(title: impl Into<String>) -> Self {
    Self { title: title.into(), is_main: false }
  }

  /// The lower-case projection stored next to the title.
  pub fn title_lower(&self) -> String { normalize(&self.title) }
}

/// A photo to be written alongside a new university.
#[derive(Debug, Clone)]
pub struct NewPhoto {
  pub photo:   Vec<u8>,
  pub format:  String,
  pub preview: bool,
}

/// Everything needed to create one university in a single write.
#[derive(Debug, Clone, Default)]
pub struct NewUniversity {
  pub about:             Option<String>,
  pub link_to_wikipedia: Option<String>,
  pub titles:            Vec<NewTitle>,
  pub photos:            Vec<NewPhoto>,
}

impl NewUniversity {
  /// Check the invariants a store relies on before anything is written.
  pub fn validate(&self) -> Result<()> {
    if self.titles.iter().any(|t| t.title.trim().is_empty()) {
      return Err(Error::EmptyTitle);
    }
    if self.photos.iter().any(|p| p.format.trim().is_empty()) {
      return Err(Error::EmptyFormat);
    }
    let mains = self.titles.iter().filter(|t| t.is_main).count();
    if mains != 1 {
      return Err(Error::MainTitleCount(mains));
    }
    Ok(())
  }
}
