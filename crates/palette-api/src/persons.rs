//! Handlers for `/persons` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/persons` | All persons with their colors |
//! | `GET`    | `/persons/:id` | 404 if not found |
//! | `GET`    | `/persons/color/:color` | Case-insensitive color name match |
//! | `POST`   | `/persons` | Body: [`PersonBody`]; 201, or 400 for an unknown color |
//! | `PUT`    | `/persons/:id` | Full replace; 404, or 400 for an unknown color |
//! | `DELETE` | `/persons/:id` | 204, or 404 |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use palette_core::{
  person::{ColorRef, Person, PersonDraft, PersonId},
  store::{ColorStore, PersonStore},
};
use serde::Deserialize;

use crate::{ApiState, error::ApiError, validate};

/// JSON body accepted by `POST /persons` and `PUT /persons/:id`. The color is
/// given by name.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PersonBody {
  pub name:     String,
  pub lastname: String,
  pub zipcode:  String,
  pub city:     String,
  pub color:    String,
}

impl PersonBody {
  fn validate(self) -> Result<PersonDraft, ApiError> {
    validate::text("name", &self.name, 1, 100)?;
    validate::text("lastname", &self.lastname, 1, 100)?;
    validate::text("zipcode", &self.zipcode, 5, 10)?;
    validate::text("city", &self.city, 1, 100)?;
    if self.color.trim().is_empty() {
      return Err(ApiError::BadRequest("color is required".into()));
    }

    Ok(PersonDraft {
      name:     self.name,
      lastname: self.lastname,
      zipcode:  self.zipcode,
      city:     self.city,
      color:    ColorRef::Name(self.color),
    })
  }
}

// ─── Reads ────────────────────────────────────────────────────────────────────

/// `GET /persons`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: ColorStore + PersonStore,
{
  Ok(Json(state.persons.list_persons().await?))
}

/// `GET /persons/:id`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<PersonId>,
) -> Result<Json<Person>, ApiError>
where
  S: ColorStore + PersonStore,
{
  let person = state
    .persons
    .get_person(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("person {id} not found")))?;
  Ok(Json(person))
}

/// `GET /persons/color/:color`
pub async fn by_color<S>(
  State(state): State<ApiState<S>>,
  Path(color): Path<String>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: ColorStore + PersonStore,
{
  Ok(Json(state.persons.list_persons_by_color(&color).await?))
}

// ─── Writes ───────────────────────────────────────────────────────────────────

/// `POST /persons` — returns 201 + the stored [`Person`].
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<PersonBody>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ColorStore + PersonStore,
{
  let person = state.persons.create_person(body.validate()?).await?;
  Ok((StatusCode::CREATED, Json(person)))
}

/// `PUT /persons/:id`
pub async fn update<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<PersonId>,
  Json(body): Json<PersonBody>,
) -> Result<Json<Person>, ApiError>
where
  S: ColorStore + PersonStore,
{
  let person = state.persons.update_person(id, body.validate()?).await?;
  Ok(Json(person))
}

/// `DELETE /persons/:id`
pub async fn delete<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<PersonId>,
) -> Result<StatusCode, ApiError>
where
  S: ColorStore + PersonStore,
{
  state.persons.delete_person(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
