//! Handler for `GET /metrics`.

use std::collections::BTreeMap;

use axum::{Json, extract::State};
use palette_core::store::{ColorStore, PersonStore};

use crate::ApiState;

/// `GET /metrics` — current operation counters keyed by name, e.g.
/// `{"color.creation.total": 3, ...}`.
pub async fn snapshot<S>(
  State(state): State<ApiState<S>>,
) -> Json<BTreeMap<&'static str, u64>>
where
  S: ColorStore + PersonStore,
{
  Json(state.counters.snapshot())
}
