//! REST handlers for squirrels.

use axum::extract::{FromRequest, Path, Request, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::Deserialize;

use scurry_app::ports::SquirrelRepository;
use scurry_domain::error::{NotFoundError, ScurryError};
use scurry_domain::id::SquirrelId;
use scurry_domain::squirrel::{Squirrel, SquirrelAttributes};

use crate::error::ApiError;
use crate::state::AppState;

/// Request body for creating or updating a squirrel.
///
/// Fields are optional at the wire level so a missing field surfaces as a
/// validation failure (400) instead of a body-parse rejection. Accepted as
/// JSON when the Content-Type says so, form-encoded otherwise.
#[derive(Debug, Deserialize)]
pub struct SquirrelPayload {
    pub name: Option<String>,
    pub size: Option<String>,
}

impl SquirrelPayload {
    /// Validate into domain attributes.
    ///
    /// # Errors
    ///
    /// Returns [`ScurryError::Validation`] when either field is missing or
    /// empty.
    fn into_attributes(self) -> Result<SquirrelAttributes, ScurryError> {
        SquirrelAttributes::builder()
            .name(self.name.unwrap_or_default())
            .size(self.size.unwrap_or_default())
            .build()
    }
}

impl<S> FromRequest<S> for SquirrelPayload
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/json"));

        if is_json {
            let Json(payload) = Json::<Self>::from_request(req, state)
                .await
                .map_err(|_| StatusCode::BAD_REQUEST)?;
            Ok(payload)
        } else {
            let Form(payload) = Form::<Self>::from_request(req, state)
                .await
                .map_err(|_| StatusCode::BAD_REQUEST)?;
            Ok(payload)
        }
    }
}

/// Parse a path segment into a [`SquirrelId`].
///
/// A segment that is not an integer cannot address any record, so it maps
/// to not-found rather than bad-request.
fn parse_id(raw: &str) -> Result<SquirrelId, ApiError> {
    raw.parse().map_err(|_| {
        ApiError::from(ScurryError::from(NotFoundError {
            entity: "Squirrel",
            id: raw.to_string(),
        }))
    })
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<Squirrel>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Json<Squirrel>),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(Json<Squirrel>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(json) => (StatusCode::CREATED, json).into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    NoContent,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    NoContent,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::NoContent => StatusCode::NO_CONTENT.into_response(),
        }
    }
}

/// `GET /squirrels`
pub async fn list<SR>(State(state): State<AppState<SR>>) -> Result<ListResponse, ApiError>
where
    SR: SquirrelRepository + Send + Sync + 'static,
{
    let squirrels = state.squirrel_service.list_squirrels().await?;
    Ok(ListResponse::Ok(Json(squirrels)))
}

/// `GET /squirrels/{id}`
pub async fn get<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<String>,
) -> Result<GetResponse, ApiError>
where
    SR: SquirrelRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let squirrel = state.squirrel_service.get_squirrel(id).await?;
    Ok(GetResponse::Ok(Json(squirrel)))
}

/// `POST /squirrels`
pub async fn create<SR>(
    State(state): State<AppState<SR>>,
    payload: SquirrelPayload,
) -> Result<CreateResponse, ApiError>
where
    SR: SquirrelRepository + Send + Sync + 'static,
{
    let attrs = payload.into_attributes()?;
    let created = state.squirrel_service.create_squirrel(attrs).await?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /squirrels/{id}`
pub async fn update<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<String>,
    payload: SquirrelPayload,
) -> Result<UpdateResponse, ApiError>
where
    SR: SquirrelRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    let attrs = payload.into_attributes()?;
    state.squirrel_service.update_squirrel(id, attrs).await?;
    Ok(UpdateResponse::NoContent)
}

/// `DELETE /squirrels/{id}`
pub async fn delete<SR>(
    State(state): State<AppState<SR>>,
    Path(id): Path<String>,
) -> Result<DeleteResponse, ApiError>
where
    SR: SquirrelRepository + Send + Sync + 'static,
{
    let id = parse_id(&id)?;
    state.squirrel_service.delete_squirrel(id).await?;
    Ok(DeleteResponse::NoContent)
}
