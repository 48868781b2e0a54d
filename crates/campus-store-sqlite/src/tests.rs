//! Integration tests for `SqliteStore` and the resolver against an in-memory
//! database.

use campus_core::{
  media,
  resolve::{LookupKey, resolve},
  store::UniversityStore,
  university::{NewPhoto, NewTitle, NewUniversity},
};

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn photo(format: &str, data: &[u8], preview: bool) -> NewPhoto {
  NewPhoto { photo: data.to_vec(), format: format.into(), preview }
}

fn msu() -> NewUniversity {
  NewUniversity {
    about:             Some("Main building on Sparrow Hills.".into()),
    link_to_wikipedia: Some("https://ru.wikipedia.org/wiki/МГУ".into()),
    titles:            vec![
      NewTitle::main("МГУ"),
      NewTitle::alias("Moscow State University"),
    ],
    photos:            vec![
      photo("jpg", b"preview-bytes", true),
      photo("png", b"plain-bytes", false),
    ],
  }
}

fn bare(main: &str) -> NewUniversity {
  NewUniversity { titles: vec![NewTitle::main(main)], ..Default::default() }
}

// ─── Repository ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn add_and_find_by_id() {
  let s = store().await;
  let u = s.add_university(msu()).await.unwrap();

  let fetched = s.find_by_id(u.id).await.unwrap().unwrap();
  assert_eq!(fetched, u);
  assert_eq!(fetched.about.as_deref(), Some("Main building on Sparrow Hills."));
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
  let s = store().await;
  s.add_university(msu()).await.unwrap();
  assert!(s.find_by_id(9999).await.unwrap().is_none());
}

#[tokio::test]
async fn find_by_alias_matches_lower_case_projection() {
  let s = store().await;
  let u = s.add_university(msu()).await.unwrap();

  let by_main = s.find_by_alias("мгу").await.unwrap().unwrap();
  let by_alias = s.find_by_alias("moscow state university").await.unwrap().unwrap();
  assert_eq!(by_main.id, u.id);
  assert_eq!(by_alias.id, u.id);

  // The store does not fold case itself.
  assert!(s.find_by_alias("МГУ").await.unwrap().is_none());
}

#[tokio::test]
async fn shared_alias_resolves_to_first_stored() {
  let s = store().await;
  let mut first = bare("Alpha");
  first.titles.push(NewTitle::alias("Tech"));
  let mut second = bare("Beta");
  second.titles.push(NewTitle::alias("TECH"));

  let a = s.add_university(first).await.unwrap();
  s.add_university(second).await.unwrap();

  let found = s.find_by_alias("tech").await.unwrap().unwrap();
  assert_eq!(found.id, a.id);
}

#[tokio::test]
async fn find_random_on_empty_store_is_none() {
  let s = store().await;
  assert!(s.find_random().await.unwrap().is_none());
}

#[tokio::test]
async fn find_random_returns_a_stored_row() {
  let s = store().await;
  let a = s.add_university(bare("Alpha")).await.unwrap();
  let b = s.add_university(bare("Beta")).await.unwrap();

  for _ in 0..10 {
    let r = s.find_random().await.unwrap().unwrap();
    assert!(r.id == a.id || r.id == b.id);
  }
}

#[tokio::test]
async fn main_title_and_photos_join() {
  let s = store().await;
  let u = s.add_university(msu()).await.unwrap();

  assert_eq!(s.main_title_of(u.id).await.unwrap(), "МГУ");

  let photos = s.photos_of(u.id).await.unwrap();
  assert_eq!(photos.len(), 2);
  assert_eq!(photos[0].format, "jpg");
  assert!(photos[0].preview);
  assert_eq!(photos[1].photo, b"plain-bytes");
  assert!(!photos[1].preview);
}

#[tokio::test]
async fn main_title_of_unknown_university_is_an_error() {
  let s = store().await;
  assert!(matches!(
    s.main_title_of(42).await,
    Err(Error::MissingMainTitle(42)),
  ));
}

#[tokio::test]
async fn all_main_titles_sorted_excludes_aliases() {
  let s = store().await;
  s.add_university(bare("Gamma")).await.unwrap();
  s.add_university(msu()).await.unwrap();
  s.add_university(bare("Alpha")).await.unwrap();

  let titles = s.all_main_titles_sorted().await.unwrap();
  assert_eq!(titles, vec!["Alpha", "Gamma", "МГУ"]);
}

#[tokio::test]
async fn random_preview_photo_only_picks_previews() {
  let s = store().await;
  s.add_university(msu()).await.unwrap();

  for _ in 0..10 {
    let p = s.random_preview_photo().await.unwrap().unwrap();
    assert!(p.preview);
    assert_eq!(p.format, "jpg");
  }
}

#[tokio::test]
async fn random_preview_photo_without_previews_is_none() {
  let s = store().await;
  let mut u = bare("Alpha");
  u.photos.push(photo("png", b"x", false));
  s.add_university(u).await.unwrap();

  assert!(s.random_preview_photo().await.unwrap().is_none());
}

#[tokio::test]
async fn invalid_university_is_not_written() {
  let s = store().await;
  let no_main = NewUniversity {
    titles: vec![NewTitle::alias("Nameless")],
    ..Default::default()
  };

  let err = s.add_university(no_main).await.unwrap_err();
  assert!(matches!(err, Error::Core(campus_core::Error::MainTitleCount(0))));
  assert!(s.find_random().await.unwrap().is_none());
}

// ─── Resolver ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn resolves_msu_by_id_and_any_alias_casing() {
  let s = store().await;
  let u = s.add_university(msu()).await.unwrap();

  for key in [
    LookupKey::Id(u.id),
    LookupKey::Alias("мгу".into()),
    LookupKey::Alias("МГУ".into()),
    LookupKey::Alias("moscow state university".into()),
    LookupKey::Alias("Moscow STATE University".into()),
  ] {
    let bag = resolve(&s, &key).await.unwrap().unwrap();
    assert_eq!(bag.university, "МГУ", "key {key:?}");
    assert_eq!(bag.photos.len(), 2, "key {key:?}");
  }
}

#[tokio::test]
async fn bag_carries_encoded_photos_in_storage_order() {
  let s = store().await;
  let u = s.add_university(msu()).await.unwrap();
  let stored = s.photos_of(u.id).await.unwrap();

  let bag = resolve(&s, &LookupKey::Id(u.id)).await.unwrap().unwrap();
  let expected: Vec<String> = stored.iter().map(media::encode).collect();
  assert_eq!(bag.photos, expected);
  assert!(bag.photos[0].starts_with("data:image/jpg;base64,"));
  assert!(bag.photos[1].starts_with("data:image/png;base64,"));
  assert_eq!(bag.about, "Main building on Sparrow Hills.");
  assert_eq!(bag.link_to_wikipedia, "https://ru.wikipedia.org/wiki/МГУ");
}

#[tokio::test]
async fn missing_optional_fields_become_empty_strings() {
  let s = store().await;
  let u = s.add_university(bare("Alpha")).await.unwrap();

  let bag = resolve(&s, &LookupKey::Id(u.id)).await.unwrap().unwrap();
  assert_eq!(bag.about, "");
  assert_eq!(bag.link_to_wikipedia, "");
  assert!(bag.photos.is_empty());
}

#[tokio::test]
async fn unknown_keys_resolve_to_nothing() {
  let s = store().await;
  s.add_university(msu()).await.unwrap();

  for key in [
    LookupKey::Id(0),
    LookupKey::Id(-1),
    LookupKey::Id(1234),
    LookupKey::Alias("unknown".into()),
    LookupKey::Alias(String::new()),
    LookupKey::Alias("мг".into()),
  ] {
    assert!(resolve(&s, &key).await.unwrap().is_none(), "key {key:?}");
  }
}

#[tokio::test]
async fn random_resolves_the_only_university() {
  let s = store().await;
  let u = s.add_university(msu()).await.unwrap();

  let random = resolve(&s, &LookupKey::Random).await.unwrap().unwrap();
  let by_id = resolve(&s, &LookupKey::Id(u.id)).await.unwrap().unwrap();
  assert_eq!(random, by_id);
}

#[tokio::test]
async fn random_on_empty_store_resolves_to_nothing() {
  let s = store().await;
  assert!(resolve(&s, &LookupKey::Random).await.unwrap().is_none());
}

#[tokio::test]
async fn resolution_is_idempotent() {
  let s = store().await;
  s.add_university(msu()).await.unwrap();

  let key = LookupKey::parse("Moscow State University");
  let first = resolve(&s, &key).await.unwrap();
  let second = resolve(&s, &key).await.unwrap();
  assert!(first.is_some());
  assert_eq!(first, second);
}
