//! [`SqliteStore`] — the SQLite implementation of [`UniversityStore`].

use std::path::Path;

use campus_core::{
  store::UniversityStore,
  university::{NewUniversity, Photo, University},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  rows::{self, PHOTO_COLUMNS, UNIVERSITY_COLUMNS},
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A campus store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. The handle
/// is created once at startup and passed to whoever needs it.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Run a single-row university query with one bound parameter.
  async fn query_university<P>(&self, sql: String, param: P) -> Result<Option<University>>
  where
    P: rusqlite::ToSql + Send + 'static,
  {
    let found = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(&sql, rusqlite::params![param], rows::university)
            .optional()?,
        )
      })
      .await?;
    Ok(found)
  }
}

// ─── UniversityStore impl ────────────────────────────────────────────────────

impl UniversityStore for SqliteStore {
  type Error = Error;

  // ── Seeding ───────────────────────────────────────────────────────────────

  async fn add_university(&self, input: NewUniversity) -> Result<University> {
    input.validate()?;

    let titles: Vec<(String, String, bool)> = input
      .titles
      .iter()
      .map(|t| (t.title.clone(), t.title_lower(), t.is_main))
      .collect();
    let photos        = input.photos;
    let about         = input.about;
    let link          = input.link_to_wikipedia;
    let title_count   = titles.len();
    let photo_count   = photos.len();

    let university = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        tx.execute(
          "INSERT INTO universities (about, link_to_wikipedia) VALUES (?1, ?2)",
          rusqlite::params![about, link],
        )?;
        let id = tx.last_insert_rowid();

        {
          let mut stmt = tx.prepare(
            "INSERT INTO titles (university_id, title, title_lower, is_main)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for (title, lower, is_main) in &titles {
            stmt.execute(rusqlite::params![id, title, lower, is_main])?;
          }

          let mut stmt = tx.prepare(
            "INSERT INTO photos (university_id, preview, photo, format)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for p in &photos {
            stmt.execute(rusqlite::params![id, p.preview, p.photo, p.format])?;
          }
        }

        tx.commit()?;
        Ok(University { id, about, link_to_wikipedia: link })
      })
      .await?;

    tracing::debug!(
      id = university.id,
      titles = title_count,
      photos = photo_count,
      "stored university"
    );
    Ok(university)
  }

  // ── Lookups ───────────────────────────────────────────────────────────────

  async fn find_by_id(&self, id: i64) -> Result<Option<University>> {
    self
      .query_university(
        format!("SELECT {UNIVERSITY_COLUMNS} FROM universities u WHERE u.id = ?1"),
        id,
      )
      .await
  }

  async fn find_by_alias(&self, normalized: &str) -> Result<Option<University>> {
    // Earliest title wins when two universities share an alias.
    self
      .query_university(
        format!(
          "SELECT {UNIVERSITY_COLUMNS}
           FROM titles t
           JOIN universities u ON u.id = t.university_id
           WHERE t.title_lower = ?1
           ORDER BY t.id
           LIMIT 1"
        ),
        normalized.to_owned(),
      )
      .await
  }

  async fn find_random(&self) -> Result<Option<University>> {
    let found = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {UNIVERSITY_COLUMNS} FROM universities u ORDER BY RANDOM() LIMIT 1"
              ),
              [],
              rows::university,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(found)
  }

  // ── Joins ─────────────────────────────────────────────────────────────────

  async fn main_title_of(&self, university_id: i64) -> Result<String> {
    let title: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT title FROM titles WHERE university_id = ?1 AND is_main = 1",
              rusqlite::params![university_id],
              |r| r.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    title.ok_or(Error::MissingMainTitle(university_id))
  }

  async fn photos_of(&self, university_id: i64) -> Result<Vec<Photo>> {
    let photos = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PHOTO_COLUMNS} FROM photos p WHERE p.university_id = ?1 ORDER BY p.id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![university_id], rows::photo)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(photos)
  }

  async fn all_main_titles_sorted(&self) -> Result<Vec<String>> {
    let titles = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare("SELECT title FROM titles WHERE is_main = 1 ORDER BY title, id")?;
        let rows = stmt
          .query_map([], |r| r.get(0))?
          .collect::<rusqlite::Result<Vec<String>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(titles)
  }

  async fn random_preview_photo(&self) -> Result<Option<Photo>> {
    let photo = self
      .conn
      .call(|conn| {
        Ok(
          conn
            .query_row(
              &format!(
                "SELECT {PHOTO_COLUMNS} FROM photos p
                 WHERE p.preview = 1
                 ORDER BY RANDOM()
                 LIMIT 1"
              ),
              [],
              rows::photo,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(photo)
  }
}
