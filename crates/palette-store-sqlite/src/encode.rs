//! Row mapping between SQLite result rows and domain types.
//!
//! Persons are always read joined with their color, so every person query
//! selects [`PERSON_COLUMNS`] in that exact order.

use palette_core::{color::Color, person::Person};
use rusqlite::Row;

pub const COLOR_COLUMNS: &str = "id, name";

pub const PERSON_COLUMNS: &str =
  "p.id, p.name, p.lastname, p.zipcode, p.city, c.id, c.name";

pub const PERSON_FROM: &str =
  "FROM persons p JOIN colors c ON c.id = p.color_id";

pub fn color_from_row(row: &Row<'_>) -> rusqlite::Result<Color> {
  Ok(Color { id: row.get(0)?, name: row.get(1)? })
}

pub fn person_from_row(row: &Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    id:       row.get(0)?,
    name:     row.get(1)?,
    lastname: row.get(2)?,
    zipcode:  row.get(3)?,
    city:     row.get(4)?,
    color:    Color { id: row.get(5)?, name: row.get(6)? },
  })
}
