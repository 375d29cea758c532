//! Person consistency service.
//!
//! Resolves a person's submitted color to a persisted color before every
//! write and checks that the target person exists before update and delete.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::{
  Entity, Error, Result,
  color::Color,
  metrics::{Metrics, Operation},
  person::{ColorRef, Person, PersonDraft, PersonId},
  store::{ColorStore, PersonStore, StoreError, Violation},
};

pub struct PersonService<P, C> {
  persons: Arc<P>,
  colors:  Arc<C>,
  metrics: Arc<dyn Metrics>,
}

impl<P, C> Clone for PersonService<P, C> {
  fn clone(&self) -> Self {
    Self {
      persons: self.persons.clone(),
      colors:  self.colors.clone(),
      metrics: self.metrics.clone(),
    }
  }
}

impl<P: PersonStore, C: ColorStore> PersonService<P, C> {
  pub fn new(persons: Arc<P>, colors: Arc<C>, metrics: Arc<dyn Metrics>) -> Self {
    Self { persons, colors, metrics }
  }

  pub async fn list_persons(&self) -> Result<Vec<Person>> {
    self.metrics.record(Operation::PersonRetrieval);
    let persons = self.persons.list_persons().await.map_err(Error::store)?;
    debug!("found {} persons", persons.len());
    Ok(persons)
  }

  /// Absence is a normal outcome, not an error.
  pub async fn get_person(&self, id: PersonId) -> Result<Option<Person>> {
    self.metrics.record(Operation::PersonRetrieval);
    let person = self.persons.get_person(id).await.map_err(Error::store)?;
    if person.is_none() {
      debug!("person {id} not found");
    }
    Ok(person)
  }

  /// Persons whose color is named `color_name`, ignoring case. An empty
  /// result is valid.
  pub async fn list_persons_by_color(
    &self,
    color_name: &str,
  ) -> Result<Vec<Person>> {
    self.metrics.record(Operation::PersonColorSearch);
    let persons = self
      .persons
      .find_persons_by_color_name(color_name)
      .await
      .map_err(Error::store)?;
    debug!("found {} persons with color '{color_name}'", persons.len());
    Ok(persons)
  }

  pub async fn create_person(&self, candidate: PersonDraft) -> Result<Person> {
    self.metrics.record(Operation::PersonCreation);

    let color = self.resolve_color(&candidate.color).await?;
    let (input, requested) = candidate.resolve(color.id);

    let saved = self
      .persons
      .insert_person(input)
      .await
      .map_err(|e| color_write_error(e, requested))?;

    info!("created person {} with color {}", saved.id, saved.color.id);
    Ok(saved)
  }

  /// Fully replace the person at `id`; the id is preserved.
  pub async fn update_person(
    &self,
    id: PersonId,
    candidate: PersonDraft,
  ) -> Result<Person> {
    self.metrics.record(Operation::PersonUpdate);

    if self.persons.get_person(id).await.map_err(Error::store)?.is_none() {
      warn!("person {id} not found for update");
      return Err(Error::NotFound(Entity::Person(id)));
    }

    let color = self.resolve_color(&candidate.color).await?;
    let (input, requested) = candidate.resolve(color.id);

    let updated = self
      .persons
      .replace_person(id, input)
      .await
      .map_err(|e| color_write_error(e, requested))?
      .ok_or(Error::NotFound(Entity::Person(id)))?;

    info!("updated person {id}");
    Ok(updated)
  }

  pub async fn delete_person(&self, id: PersonId) -> Result<()> {
    self.metrics.record(Operation::PersonDeletion);

    if self.persons.get_person(id).await.map_err(Error::store)?.is_none() {
      warn!("person {id} not found for deletion");
      return Err(Error::NotFound(Entity::Person(id)));
    }

    if !self.persons.delete_person(id).await.map_err(Error::store)? {
      return Err(Error::NotFound(Entity::Person(id)));
    }

    info!("deleted person {id}");
    Ok(())
  }

  /// Translate a submitted color reference into a persisted color.
  async fn resolve_color(&self, color: &ColorRef) -> Result<Color> {
    let found = match color {
      ColorRef::Name(name) => self.colors.find_color_by_name(name).await,
      ColorRef::Id(id) => self.colors.get_color(*id).await,
    }
    .map_err(Error::store)?;

    found.ok_or_else(|| {
      warn!("color {color} not found");
      Error::ColorNotFound(color.clone())
    })
  }
}

/// The color was resolved but vanished before the person row was written.
fn color_write_error<E: StoreError>(e: E, requested: ColorRef) -> Error {
  match e.violation() {
    Some(Violation::ForeignKey) => Error::ColorNotFound(requested),
    _ => Error::store(e),
  }
}
