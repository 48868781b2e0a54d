//! Content resolution: turn a lookup key into a render-ready attribute bag.

use crate::{media, store::UniversityStore, university::normalize};

/// The literal path segment that asks for a random university.
pub const RANDOM_SENTINEL: &str = "random";

// ─── Lookup key ──────────────────────────────────────────────────────────────

/// How a request identifies the university it wants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupKey {
  Id(i64),
  /// Any title string, in any casing.
  Alias(String),
  Random,
}

impl LookupKey {
  /// Interpret a free-form path segment or search term.
  ///
  /// Only the exact string `"random"` selects [`LookupKey::Random`];
  /// everything else is an alias.
  pub fn parse(raw: &str) -> Self {
    if raw == RANDOM_SENTINEL {
      Self::Random
    } else {
      Self::Alias(raw.to_owned())
    }
  }
}

// ─── Attribute bag ───────────────────────────────────────────────────────────

/// The display fields of one university, ready to hand to a page template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeBag {
  /// The main title, whichever key found the university.
  pub university:        String,
  pub about:             String,
  /// Inline image references in storage order.
  pub photos:            Vec<String>,
  pub link_to_wikipedia: String,
}

// ─── Resolver ────────────────────────────────────────────────────────────────

/// Resolve `key` against `store`.
///
/// Returns `Ok(None)` when nothing matches. An unknown id and an unknown
/// alias are indistinguishable to the caller.
pub async fn resolve<S>(
  store: &S,
  key: &LookupKey,
) -> Result<Option<AttributeBag>, S::Error>
where
  S: UniversityStore,
{
  let found = match key {
    LookupKey::Random => store.find_random().await?,
    LookupKey::Alias(alias) if alias.is_empty() => None,
    LookupKey::Alias(alias) => store.find_by_alias(&normalize(alias)).await?,
    LookupKey::Id(id) => store.find_by_id(*id).await?,
  };

  let Some(university) = found else {
    return Ok(None);
  };

  let title  = store.main_title_of(university.id).await?;
  let photos = store.photos_of(university.id).await?;

  Ok(Some(AttributeBag {
    university:        title,
    about:             university.about.unwrap_or_default(),
    photos:            photos.iter().map(media::encode).collect(),
    link_to_wikipedia: university.link_to_wikipedia.unwrap_or_default(),
  }))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_exact_sentinel_is_random() {
    assert_eq!(LookupKey::parse("random"), LookupKey::Random);
    assert_eq!(LookupKey::parse("Random"), LookupKey::Alias("Random".into()));
    assert_eq!(LookupKey::parse("МГУ"), LookupKey::Alias("МГУ".into()));
  }

  #[test]
  fn empty_segment_is_an_alias_not_random() {
    assert_eq!(LookupKey::parse(""), LookupKey::Alias(String::new()));
  }
}
