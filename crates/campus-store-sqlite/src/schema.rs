//! SQL schema for the campus SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS universities (
    id                INTEGER PRIMARY KEY,
    about             TEXT,
    link_to_wikipedia TEXT
);

-- title_lower is written by the application (Unicode-aware), never by
-- SQLite's LOWER(), which only folds ASCII.
CREATE TABLE IF NOT EXISTS titles (
    id            INTEGER PRIMARY KEY,
    university_id INTEGER NOT NULL REFERENCES universities(id),
    title         TEXT    NOT NULL,
    title_lower   TEXT    NOT NULL,
    is_main       INTEGER NOT NULL DEFAULT 0
);

CREATE TABLE IF NOT EXISTS photos (
    id            INTEGER PRIMARY KEY,
    university_id INTEGER NOT NULL REFERENCES universities(id),
    preview       INTEGER NOT NULL DEFAULT 0,
    photo         BLOB    NOT NULL,
    format        TEXT    NOT NULL   -- file extension, e.g. 'jpg'
);

CREATE INDEX IF NOT EXISTS titles_lower_idx      ON titles(title_lower);
CREATE INDEX IF NOT EXISTS titles_university_idx ON titles(university_id);
CREATE INDEX IF NOT EXISTS photos_university_idx ON photos(university_id);
CREATE INDEX IF NOT EXISTS photos_preview_idx    ON photos(preview);

-- At most one main title per university; seeding guarantees at least one.
CREATE UNIQUE INDEX IF NOT EXISTS titles_one_main_idx
    ON titles(university_id) WHERE is_main = 1;

PRAGMA user_version = 1;
";
