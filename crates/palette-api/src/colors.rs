//! Handlers for `/colors` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/colors` | All colors |
//! | `GET`    | `/colors/:id` | 404 if not found |
//! | `POST`   | `/colors` | Body: `{"name":"rot"}`; 201, or 409 if the name is taken |
//! | `PUT`    | `/colors/:id` | Full replace; 404, or 409 on a name clash |
//! | `DELETE` | `/colors/:id` | 204; 404, or 409 while persons use it |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use palette_core::{
  color::{Color, ColorId, NewColor},
  store::{ColorStore, PersonStore},
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError, validate};

/// JSON body accepted by `POST /colors` and `PUT /colors/:id`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ColorBody {
  pub name: String,
}

impl ColorBody {
  fn validate(self) -> Result<NewColor, ApiError> {
    validate::text("name", &self.name, 1, 50)?;
    Ok(NewColor::new(self.name))
  }
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /colors`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Color>>, ApiError>
where
  S: ColorStore + PersonStore,
{
  Ok(Json(state.colors.list_colors().await?))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /colors/:id`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<ColorId>,
) -> Result<Json<Color>, ApiError>
where
  S: ColorStore + PersonStore,
{
  let color = state
    .colors
    .get_color(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("color {id} not found")))?;
  Ok(Json(color))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /colors` — returns 201 + the stored [`Color`].
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<ColorBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ColorStore + PersonStore,
{
  let color = state.colors.create_color(body.validate()?).await?;
  Ok((StatusCode::CREATED, Json(color)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /colors/:id`
pub async fn update<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<ColorId>,
  Json(body): Json<ColorBody>,
) -> Result<Json<Color>, ApiError>
where
  S: ColorStore + PersonStore,
{
  let color = state.colors.update_color(id, body.validate()?).await?;
  Ok(Json(color))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /colors/:id`
pub async fn delete<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<ColorId>,
) -> Result<StatusCode, ApiError>
where
  S: ColorStore + PersonStore,
{
  state.colors.delete_color(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
