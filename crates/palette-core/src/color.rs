//! Color records.

use serde::{Deserialize, Serialize};

/// Surrogate key assigned by the store.
pub type ColorId = i64;

/// A persisted color. Names are unique across all colors, ignoring case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
  pub id:   ColorId,
  pub name: String,
}

/// Input to color creation and full-replace updates. Carries no id; the store
/// assigns one on insert and the caller supplies one on replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewColor {
  pub name: String,
}

impl NewColor {
  pub fn new(name: impl Into<String>) -> Self { Self { name: name.into() } }
}

/// The comparison key under which color names must be unique.
///
/// Folds each character on its own (upper-case, then lower-case), so
/// `"grün"` and `"GRÜN"` share a key, and so do `"ΟΔΟΣ"` and `"οδοσ"`.
/// `str::to_lowercase` is context-sensitive for a final sigma and would keep
/// those apart. Stores must compare names through this function rather than
/// byte equality.
pub fn name_key(name: &str) -> String {
  name
    .chars()
    .flat_map(char::to_uppercase)
    .flat_map(char::to_lowercase)
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn name_key_folds_non_ascii() {
    assert_eq!(name_key("GRÜN"), name_key("grün"));
    assert_eq!(name_key("Rot"), "rot");
    assert_ne!(name_key("blau"), name_key("blue"));
  }

  #[test]
  fn name_key_ignores_final_sigma_form() {
    assert_eq!(name_key("ΟΔΟΣ"), name_key("οδοσ"));
    assert_eq!(name_key("οδος"), name_key("οδοσ"));
    assert_eq!(name_key("ΟΔΟΣ"), "οδοσ");
  }
}
