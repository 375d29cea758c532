//! Color resolution service.
//!
//! Keeps color names unique ignoring case. The lookup before each write is a
//! fast path; the store's unique constraint is the authority, and a breach it
//! reports is mapped onto the same outcome the lookup would have produced.
//!
//! Reads are counted on every call; color writes are counted only once they
//! have been applied.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
  Entity, Error, Result,
  color::{Color, ColorId, NewColor},
  metrics::{Metrics, Operation},
  store::{ColorStore, StoreError, Violation},
};

pub struct ColorService<S> {
  store:   Arc<S>,
  metrics: Arc<dyn Metrics>,
}

impl<S> Clone for ColorService<S> {
  fn clone(&self) -> Self {
    Self { store: self.store.clone(), metrics: self.metrics.clone() }
  }
}

impl<S: ColorStore> ColorService<S> {
  pub fn new(store: Arc<S>, metrics: Arc<dyn Metrics>) -> Self {
    Self { store, metrics }
  }

  pub async fn list_colors(&self) -> Result<Vec<Color>> {
    self.metrics.record(Operation::ColorRetrieval);
    let colors = self.store.list_colors().await.map_err(Error::store)?;
    debug!("found {} colors", colors.len());
    Ok(colors)
  }

  /// Absence is a normal outcome, not an error.
  pub async fn get_color(&self, id: ColorId) -> Result<Option<Color>> {
    self.metrics.record(Operation::ColorRetrieval);
    let color = self.store.get_color(id).await.map_err(Error::store)?;
    if color.is_none() {
      debug!("color {id} not found");
    }
    Ok(color)
  }

  /// Persist `candidate` unless a color with the same name (ignoring case)
  /// already exists.
  pub async fn create_color(&self, candidate: NewColor) -> Result<Color> {
    if self
      .store
      .find_color_by_name(&candidate.name)
      .await
      .map_err(Error::store)?
      .is_some()
    {
      warn!("color with name '{}' already exists", candidate.name);
      return Err(Error::DuplicateName(candidate.name));
    }

    let name = candidate.name.clone();
    let saved = self.store.insert_color(candidate).await.map_err(|e| {
      match e.violation() {
        Some(Violation::UniqueName) => Error::DuplicateName(name),
        _ => Error::store(e),
      }
    })?;

    self.metrics.record(Operation::ColorCreation);
    info!("created color {} ({})", saved.id, saved.name);
    Ok(saved)
  }

  /// Replace the color at `id`. Renaming a color to its own current name in
  /// any casing is allowed.
  pub async fn update_color(
    &self,
    id: ColorId,
    candidate: NewColor,
  ) -> Result<Color> {
    if self.store.get_color(id).await.map_err(Error::store)?.is_none() {
      warn!("color {id} not found for update");
      return Err(Error::NotFound(Entity::Color(id)));
    }

    let holder = self
      .store
      .find_color_by_name(&candidate.name)
      .await
      .map_err(Error::store)?;
    if let Some(other) = holder
      && other.id != id
    {
      warn!(
        "cannot rename color {id} to '{}': taken by color {}",
        candidate.name, other.id
      );
      return Err(Error::NameConflict { id, name: candidate.name });
    }

    let name = candidate.name.clone();
    let updated = self
      .store
      .replace_color(id, candidate)
      .await
      .map_err(|e| match e.violation() {
        Some(Violation::UniqueName) => Error::NameConflict { id, name },
        _ => Error::store(e),
      })?
      .ok_or(Error::NotFound(Entity::Color(id)))?;

    self.metrics.record(Operation::ColorUpdate);
    info!("updated color {id} ({})", updated.name);
    Ok(updated)
  }

  /// Delete the color at `id`. Persons are not consulted here; a store that
  /// still sees references rejects the delete with a foreign-key violation.
  pub async fn delete_color(&self, id: ColorId) -> Result<()> {
    if self.store.get_color(id).await.map_err(Error::store)?.is_none() {
      warn!("color {id} not found for deletion");
      return Err(Error::NotFound(Entity::Color(id)));
    }

    match self.store.delete_color(id).await {
      Ok(true) => {
        self.metrics.record(Operation::ColorDeletion);
        info!("deleted color {id}");
        Ok(())
      }
      Ok(false) => Err(Error::NotFound(Entity::Color(id))),
      Err(e) if e.violation() == Some(Violation::ForeignKey) => {
        warn!("color {id} is still referenced; not deleted");
        Err(Error::ColorInUse(id))
      }
      Err(e) => Err(Error::store(e)),
    }
  }
}
