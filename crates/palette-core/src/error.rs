//! Error types for `palette-core`.

use std::fmt;

use thiserror::Error;

use crate::{
  color::ColorId,
  person::{ColorRef, PersonId},
  store::StoreError,
};

/// Identifies the record an operation targeted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
  Color(ColorId),
  Person(PersonId),
}

impl fmt::Display for Entity {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Color(id) => write!(f, "color {id}"),
      Self::Person(id) => write!(f, "person {id}"),
    }
  }
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("{0} not found")]
  NotFound(Entity),

  /// A new color's name is already taken, ignoring case.
  #[error("color with name '{0}' already exists")]
  DuplicateName(String),

  /// A rename would collide with a *different* color.
  #[error("another color with name '{name}' already exists")]
  NameConflict { id: ColorId, name: String },

  /// A person references a color that is not persisted.
  #[error("color {0} not found")]
  ColorNotFound(ColorRef),

  /// The store refused to delete a color that persons still reference.
  #[error("color {0} is still referenced by at least one person")]
  ColorInUse(ColorId),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
  pub(crate) fn store<E: StoreError>(e: E) -> Self { Self::Store(Box::new(e)) }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
