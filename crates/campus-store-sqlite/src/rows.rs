//! Row mappers between SQLite result rows and the core records.
//!
//! Each mapper expects the columns in the order of the matching `*_COLUMNS`
//! constant, so queries and mappers stay in step.

use campus_core::university::{Photo, University};
use rusqlite::Row;

pub const UNIVERSITY_COLUMNS: &str = "u.id, u.about, u.link_to_wikipedia";

pub const PHOTO_COLUMNS: &str = "p.id, p.university_id, p.photo, p.format, p.preview";

pub fn university(row: &Row<'_>) -> rusqlite::Result<University> {
  Ok(University {
    id:                row.get(0)?,
    about:             row.get(1)?,
    link_to_wikipedia: row.get(2)?,
  })
}

pub fn photo(row: &Row<'_>) -> rusqlite::Result<Photo> {
  Ok(Photo {
    id:            row.get(0)?,
    university_id: row.get(1)?,
    photo:         row.get(2)?,
    format:        row.get(3)?,
    preview:       row.get(4)?,
  })
}
