//! JSON REST API for Palette.
//!
//! Exposes an axum [`Router`] backed by any store implementing both
//! [`ColorStore`] and [`PersonStore`]. Field validation happens here, before
//! the core services are invoked. Transport concerns (tracing, timeouts) are
//! the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .merge(palette_api::api_router(store.clone(), counters.clone()))
//! ```

pub mod colors;
pub mod error;
pub mod metrics;
pub mod persons;
mod validate;

use std::sync::Arc;

use axum::{Router, routing::get};
use palette_core::{
  colors::ColorService,
  metrics::{Counters, Metrics},
  persons::PersonService,
  store::{ColorStore, PersonStore},
};

pub use error::ApiError;

/// Shared state threaded through all handlers.
pub struct ApiState<S> {
  pub colors:   ColorService<S>,
  pub persons:  PersonService<S, S>,
  pub counters: Arc<Counters>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      colors:   self.colors.clone(),
      persons:  self.persons.clone(),
      counters: self.counters.clone(),
    }
  }
}

impl<S: ColorStore + PersonStore> ApiState<S> {
  /// Wire both services to `store`, counting operations into `counters`.
  pub fn new(store: Arc<S>, counters: Arc<Counters>) -> Self {
    let metrics: Arc<dyn Metrics> = counters.clone();
    Self {
      colors: ColorService::new(store.clone(), metrics.clone()),
      persons: PersonService::new(store.clone(), store, metrics),
      counters,
    }
  }
}

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>, counters: Arc<Counters>) -> Router<()>
where
  S: ColorStore + PersonStore + 'static,
{
  Router::new()
    // Colors
    .route("/colors", get(colors::list::<S>).post(colors::create::<S>))
    .route(
      "/colors/{id}",
      get(colors::get_one::<S>)
        .put(colors::update::<S>)
        .delete(colors::delete::<S>),
    )
    // Persons
    .route("/persons", get(persons::list::<S>).post(persons::create::<S>))
    .route(
      "/persons/{id}",
      get(persons::get_one::<S>)
        .put(persons::update::<S>)
        .delete(persons::delete::<S>),
    )
    .route("/persons/color/{color}", get(persons::by_color::<S>))
    // Metrics
    .route("/metrics", get(metrics::snapshot::<S>))
    .with_state(ApiState::new(store, counters))
}
