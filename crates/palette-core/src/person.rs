//! Person records and the color reference carried by person input.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::color::{Color, ColorId};

/// Surrogate key assigned by the store.
pub type PersonId = i64;

/// How a person candidate names its color before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorRef {
  /// A color name, matched case-insensitively.
  Name(String),
  /// An already-known color id; still checked for existence before writing.
  Id(ColorId),
}

impl fmt::Display for ColorRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::Name(name) => write!(f, "'{name}'"),
      Self::Id(id) => write!(f, "#{id}"),
    }
  }
}

/// A persisted person with its color joined in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
  pub id:       PersonId,
  pub name:     String,
  pub lastname: String,
  pub zipcode:  String,
  pub city:     String,
  pub color:    Color,
}

/// A person candidate as submitted by the request layer. Create and update
/// both take a full draft; there is no partial update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonDraft {
  pub name:     String,
  pub lastname: String,
  pub zipcode:  String,
  pub city:     String,
  pub color:    ColorRef,
}

impl PersonDraft {
  /// Bind the draft to a resolved color, returning the store input and the
  /// reference the caller originally asked for.
  pub fn resolve(self, color_id: ColorId) -> (NewPerson, ColorRef) {
    let Self { name, lastname, zipcode, city, color } = self;
    (NewPerson { name, lastname, zipcode, city, color_id }, color)
  }
}

/// Store input for a person whose color has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
  pub name:     String,
  pub lastname: String,
  pub zipcode:  String,
  pub city:     String,
  pub color_id: ColorId,
}
