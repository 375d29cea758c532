//! SQL schema for the Palette SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

-- name_key is the case-folded name; uniqueness is enforced on it so that
-- names collide ignoring case, including non-ASCII letters.
CREATE TABLE IF NOT EXISTS colors (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    name_key  TEXT NOT NULL UNIQUE
);

-- A color cannot be deleted while a person still references it. The default
-- NO ACTION clause reports SQLITE_CONSTRAINT_FOREIGNKEY; RESTRICT would report
-- SQLITE_CONSTRAINT_TRIGGER instead.
CREATE TABLE IF NOT EXISTS persons (
    id        INTEGER PRIMARY KEY AUTOINCREMENT,
    name      TEXT NOT NULL,
    lastname  TEXT NOT NULL,
    zipcode   TEXT NOT NULL,
    city      TEXT NOT NULL,
    color_id  INTEGER NOT NULL REFERENCES colors(id)
);

CREATE INDEX IF NOT EXISTS persons_color_idx ON persons(color_id);

PRAGMA user_version = 1;
";
