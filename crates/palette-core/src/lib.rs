//! Core types, store traits, and services for the Palette person/color
//! registry.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! Storage backends implement [`store::ColorStore`] and
//! [`store::PersonStore`]; the services in [`colors`] and [`persons`] hold the
//! consistency rules (color-name uniqueness, color resolution, existence
//! checks) that sit between the request layer and the store.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod color;
pub mod colors;
pub mod error;
pub mod metrics;
pub mod person;
pub mod persons;
pub mod store;

pub use error::{Entity, Error, Result};
