//! Error type for `palette-store-sqlite`.

use palette_core::store::{StoreError, Violation};
use rusqlite::{ErrorCode, ffi};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),
}

impl StoreError for Error {
  fn violation(&self) -> Option<Violation> {
    let Error::Database(tokio_rusqlite::Error::Rusqlite(
      rusqlite::Error::SqliteFailure(failure, _),
    )) = self
    else {
      return None;
    };
    if failure.code != ErrorCode::ConstraintViolation {
      return None;
    }
    match failure.extended_code {
      ffi::SQLITE_CONSTRAINT_UNIQUE => Some(Violation::UniqueName),
      ffi::SQLITE_CONSTRAINT_FOREIGNKEY => Some(Violation::ForeignKey),
      _ => None,
    }
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
