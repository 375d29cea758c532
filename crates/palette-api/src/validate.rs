//! Field checks applied to request bodies before they reach the services.

use crate::ApiError;

/// Reject blank values and values whose character count falls outside
/// `min..=max`.
pub(crate) fn text(
  field: &str,
  value: &str,
  min: usize,
  max: usize,
) -> Result<(), ApiError> {
  if value.trim().is_empty() {
    return Err(ApiError::BadRequest(format!("{field} is required")));
  }
  let len = value.chars().count();
  if len < min || len > max {
    return Err(ApiError::BadRequest(format!(
      "{field} must be between {min} and {max} characters"
    )));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn blank_is_required() {
    let err = text("city", "   ", 1, 100).unwrap_err();
    assert!(matches!(err, ApiError::BadRequest(m) if m == "city is required"));
  }

  #[test]
  fn length_counts_characters_not_bytes() {
    assert!(text("name", &"ü".repeat(50), 1, 50).is_ok());
    assert!(text("name", &"ü".repeat(51), 1, 50).is_err());
  }

  #[test]
  fn zipcode_bounds() {
    assert!(text("zipcode", "1234", 5, 10).is_err());
    assert!(text("zipcode", "12345", 5, 10).is_ok());
    assert!(text("zipcode", "12345-6789", 5, 10).is_ok());
    assert!(text("zipcode", "12345-67890", 5, 10).is_err());
  }
}
