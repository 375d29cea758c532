//! The `ColorStore` / `PersonStore` traits.
//!
//! The traits are implemented by storage backends (e.g.
//! `palette-store-sqlite`). The services in this crate depend on these
//! abstractions, not on any concrete backend.

use std::future::Future;

use crate::{
  color::{Color, ColorId, NewColor},
  person::{NewPerson, Person, PersonId},
};

// ─── Error classification ────────────────────────────────────────────────────

/// A storage-level constraint that rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
  /// Another color already owns the case-folded name.
  UniqueName,
  /// A person row references a missing color, or a color is still
  /// referenced by a person.
  ForeignKey,
}

/// Backend errors must say whether they were caused by a constraint, so the
/// services can turn the store's backstop into a typed outcome.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  fn violation(&self) -> Option<Violation>;
}

// ─── Colors ──────────────────────────────────────────────────────────────────

/// Persistence for colors.
///
/// Implementations must enforce name uniqueness under [`crate::color::name_key`]
/// and report a breach as [`Violation::UniqueName`].
pub trait ColorStore: Send + Sync {
  type Error: StoreError;

  /// All colors, ordered by id.
  fn list_colors(
    &self,
  ) -> impl Future<Output = Result<Vec<Color>, Self::Error>> + Send + '_;

  /// Retrieve a color by id. Returns `None` if not found.
  fn get_color(
    &self,
    id: ColorId,
  ) -> impl Future<Output = Result<Option<Color>, Self::Error>> + Send + '_;

  /// Find the color whose name matches `name` ignoring case.
  fn find_color_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<Color>, Self::Error>> + Send + 'a;

  /// Persist a new color and return it with its assigned id.
  fn insert_color(
    &self,
    color: NewColor,
  ) -> impl Future<Output = Result<Color, Self::Error>> + Send + '_;

  /// Overwrite the color at `id`. Returns `None` if no row exists there.
  fn replace_color(
    &self,
    id: ColorId,
    color: NewColor,
  ) -> impl Future<Output = Result<Option<Color>, Self::Error>> + Send + '_;

  /// Delete the color at `id`; `false` if there was nothing to delete.
  fn delete_color(
    &self,
    id: ColorId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}

// ─── Persons ─────────────────────────────────────────────────────────────────

/// Persistence for persons. Every read returns the person with its current
/// color joined in.
pub trait PersonStore: Send + Sync {
  type Error: StoreError;

  /// All persons, ordered by id.
  fn list_persons(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;

  /// Retrieve a person by id. Returns `None` if not found.
  fn get_person(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Persons whose associated color's name matches `color_name` ignoring
  /// case. The match is evaluated by the store against the current color.
  fn find_persons_by_color_name<'a>(
    &'a self,
    color_name: &'a str,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + 'a;

  /// Persist a new person and return it with its assigned id.
  ///
  /// A `color_id` with no matching color is reported as
  /// [`Violation::ForeignKey`].
  fn insert_person(
    &self,
    person: NewPerson,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Overwrite every field of the person at `id`. Returns `None` if no row
  /// exists there.
  fn replace_person(
    &self,
    id: PersonId,
    person: NewPerson,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  /// Delete the person at `id`; `false` if there was nothing to delete.
  fn delete_person(
    &self,
    id: PersonId,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;
}
