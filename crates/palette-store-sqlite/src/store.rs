//! [`SqliteStore`] — the SQLite implementation of [`ColorStore`] and
//! [`PersonStore`].

use std::path::Path;

use palette_core::{
  color::{Color, ColorId, NewColor, name_key},
  person::{NewPerson, Person, PersonId},
  store::{ColorStore, PersonStore},
};
use rusqlite::OptionalExtension as _;

use crate::{
  Error, Result,
  encode::{
    COLOR_COLUMNS, PERSON_COLUMNS, PERSON_FROM, color_from_row, person_from_row,
  },
  schema::SCHEMA,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A Palette store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
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
}

/// Read one person, joined with its color.
fn select_person(
  conn: &rusqlite::Connection,
  id: PersonId,
) -> rusqlite::Result<Option<Person>> {
  conn
    .query_row(
      &format!("SELECT {PERSON_COLUMNS} {PERSON_FROM} WHERE p.id = ?1"),
      rusqlite::params![id],
      person_from_row,
    )
    .optional()
}

// ─── ColorStore impl ─────────────────────────────────────────────────────────

impl ColorStore for SqliteStore {
  type Error = Error;

  async fn list_colors(&self) -> Result<Vec<Color>> {
    let colors = self
      .conn
      .call(|conn| {
        let mut stmt = conn
          .prepare(&format!("SELECT {COLOR_COLUMNS} FROM colors ORDER BY id"))?;
        let rows = stmt
          .query_map([], color_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(colors)
  }

  async fn get_color(&self, id: ColorId) -> Result<Option<Color>> {
    let color = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLOR_COLUMNS} FROM colors WHERE id = ?1"),
              rusqlite::params![id],
              color_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(color)
  }

  async fn find_color_by_name(&self, name: &str) -> Result<Option<Color>> {
    let key = name_key(name);

    let color = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              &format!("SELECT {COLOR_COLUMNS} FROM colors WHERE name_key = ?1"),
              rusqlite::params![key],
              color_from_row,
            )
            .optional()?,
        )
      })
      .await?;
    Ok(color)
  }

  async fn insert_color(&self, color: NewColor) -> Result<Color> {
    let key = name_key(&color.name);
    let name = color.name;

    let id = self
      .conn
      .call({
        let name = name.clone();
        move |conn| {
          conn.execute(
            "INSERT INTO colors (name, name_key) VALUES (?1, ?2)",
            rusqlite::params![name, key],
          )?;
          Ok(conn.last_insert_rowid())
        }
      })
      .await?;

    Ok(Color { id, name })
  }

  async fn replace_color(
    &self,
    id: ColorId,
    color: NewColor,
  ) -> Result<Option<Color>> {
    let key = name_key(&color.name);
    let name = color.name;

    let changed = self
      .conn
      .call({
        let name = name.clone();
        move |conn| {
          Ok(conn.execute(
            "UPDATE colors SET name = ?2, name_key = ?3 WHERE id = ?1",
            rusqlite::params![id, name, key],
          )?)
        }
      })
      .await?;

    Ok((changed > 0).then_some(Color { id, name }))
  }

  async fn delete_color(&self, id: ColorId) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM colors WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(changed > 0)
  }
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  async fn list_persons(&self) -> Result<Vec<Person>> {
    let persons = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PERSON_COLUMNS} {PERSON_FROM} ORDER BY p.id"
        ))?;
        let rows = stmt
          .query_map([], person_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(persons)
  }

  async fn get_person(&self, id: PersonId) -> Result<Option<Person>> {
    let person = self
      .conn
      .call(move |conn| Ok(select_person(conn, id)?))
      .await?;
    Ok(person)
  }

  async fn find_persons_by_color_name(
    &self,
    color_name: &str,
  ) -> Result<Vec<Person>> {
    let key = name_key(color_name);

    let persons = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(&format!(
          "SELECT {PERSON_COLUMNS} {PERSON_FROM}
           WHERE c.name_key = ?1
           ORDER BY p.id"
        ))?;
        let rows = stmt
          .query_map(rusqlite::params![key], person_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(persons)
  }

  async fn insert_person(&self, person: NewPerson) -> Result<Person> {
    let saved = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "INSERT INTO persons (name, lastname, zipcode, city, color_id)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            person.name,
            person.lastname,
            person.zipcode,
            person.city,
            person.color_id,
          ],
        )?;
        let id = tx.last_insert_rowid();
        let saved = select_person(&tx, id)?.ok_or(rusqlite::Error::QueryReturnedNoRows)?;
        tx.commit()?;
        Ok(saved)
      })
      .await?;
    Ok(saved)
  }

  async fn replace_person(
    &self,
    id: PersonId,
    person: NewPerson,
  ) -> Result<Option<Person>> {
    let saved = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        let changed = tx.execute(
          "UPDATE persons
           SET name = ?2, lastname = ?3, zipcode = ?4, city = ?5, color_id = ?6
           WHERE id = ?1",
          rusqlite::params![
            id,
            person.name,
            person.lastname,
            person.zipcode,
            person.city,
            person.color_id,
          ],
        )?;
        if changed == 0 {
          return Ok(None);
        }
        let saved = select_person(&tx, id)?;
        tx.commit()?;
        Ok(saved)
      })
      .await?;
    Ok(saved)
  }

  async fn delete_person(&self, id: PersonId) -> Result<bool> {
    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute("DELETE FROM persons WHERE id = ?1", rusqlite::params![id])?)
      })
      .await?;
    Ok(changed > 0)
  }
}
