//! HTTP endpoint handlers. These are thin wrappers over the catalog and the generator.
//! Each handler is instrumented and logs parameters and basic result info.

use std::sync::Arc;
use axum::{
  extract::{
    rejection::{JsonRejection, PathRejection},
    FromRequest, FromRequestParts, Path, Query, State,
  },
  http::{header, StatusCode},
  response::{IntoResponse, Response},
  Json,
};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::catalog::{filter_options, FILTER_ALL};
use crate::domain::{Design, Tutorial};
use crate::generator::{random_prompt, GenerateError, GeneratedDesign, GenerationParams};
use crate::player::PlayerError;
use crate::protocol::*;
use crate::state::AppState;

/// Errors surfaced to HTTP clients as `{ "error": "..." }`.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error(transparent)]
  Player(#[from] PlayerError),
  #[error("unknown design id {0}")]
  UnknownDesign(u32),
  #[error("unknown tutorial index {0}")]
  UnknownTutorial(String),
  #[error(transparent)]
  Generate(#[from] GenerateError),
  #[error("{}", .0.body_text())]
  BadPath(#[from] PathRejection),
  #[error("{}", .0.body_text())]
  BadBody(#[from] JsonRejection),
}

impl ApiError {
  fn status(&self) -> StatusCode {
    match self {
      ApiError::Player(_) | ApiError::UnknownDesign(_) | ApiError::UnknownTutorial(_) => StatusCode::NOT_FOUND,
      ApiError::Generate(GenerateError::EmptyPrompt) => StatusCode::BAD_REQUEST,
      ApiError::Generate(_) => StatusCode::INTERNAL_SERVER_ERROR,
      ApiError::BadPath(r) => r.status(),
      ApiError::BadBody(r) => r.status(),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    warn!(target: "rangoli_studio", %status, error = %self, "HTTP request failed");
    (status, Json(ErrorOut { error: self.to_string() })).into_response()
  }
}

/// `Path` whose rejection is reported as an `ApiError`.
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);

/// `Json` body whose rejection is reported as an `ApiError`.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

#[instrument(level = "info")]
pub async fn http_health() -> impl IntoResponse { Json(HealthOut { ok: true }) }

#[instrument(level = "info", skip(state))]
pub async fn http_list_tutorials(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let out: Vec<TutorialSummary> = state
    .catalog
    .tutorials()
    .iter()
    .enumerate()
    .map(|(i, t)| to_summary(i, t))
    .collect();
  Json(out)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_tutorial(
  State(state): State<Arc<AppState>>,
  ApiPath(raw): ApiPath<String>,
) -> Result<Json<Tutorial>, ApiError> {
  let index: usize = raw.parse().map_err(|_| ApiError::UnknownTutorial(raw.clone()))?;
  let len = state.catalog.tutorials().len();
  let t = state
    .catalog
    .tutorial(index)
    .ok_or(PlayerError::OutOfRange { index, len })?;
  info!(target: "tutorial", index, difficulty = %t.difficulty, "HTTP tutorial served");
  Ok(Json(t.clone()))
}

#[instrument(level = "info", skip(state), fields(filter = %q.filter.clone().unwrap_or_else(|| FILTER_ALL.into())))]
pub async fn http_list_designs(
  State(state): State<Arc<AppState>>,
  Query(q): Query<DesignsQuery>,
) -> impl IntoResponse {
  let filter = q.filter.unwrap_or_else(|| FILTER_ALL.into());
  let designs: Vec<Design> = state.catalog.filter_designs(&filter).into_iter().cloned().collect();
  info!(target: "gallery", %filter, count = designs.len(), "HTTP designs served");
  Json(designs)
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_design(
  State(state): State<Arc<AppState>>,
  ApiPath(id): ApiPath<u32>,
) -> Result<Json<Design>, ApiError> {
  let d = state.catalog.design(id).ok_or(ApiError::UnknownDesign(id))?;
  Ok(Json(d.clone()))
}

#[instrument(level = "info", skip(state))]
pub async fn http_get_design_svg(
  State(state): State<Arc<AppState>>,
  ApiPath(id): ApiPath<u32>,
) -> Result<impl IntoResponse, ApiError> {
  let d = state.catalog.design(id).ok_or(ApiError::UnknownDesign(id))?;
  info!(target: "gallery", id, primitives = d.illustration.primitive_count(), "HTTP design SVG served");
  Ok(([(header::CONTENT_TYPE, "image/svg+xml")], d.illustration.to_svg()))
}

#[instrument(level = "info")]
pub async fn http_filters() -> impl IntoResponse { Json(filter_options()) }

#[instrument(level = "info", skip(state))]
pub async fn http_random_prompt(State(state): State<Arc<AppState>>) -> impl IntoResponse {
  let prompt = random_prompt(&state.prompt_suggestions).unwrap_or_default();
  Json(PromptOut { prompt })
}

#[instrument(level = "info", skip(state, body), fields(prompt_len = body.prompt.len(), style = ?body.style))]
pub async fn http_post_generate(
  State(state): State<Arc<AppState>>,
  ApiJson(body): ApiJson<GenerationParams>,
) -> Result<Json<GeneratedDesign>, ApiError> {
  let design = state.generator.generate(&body).await?;
  info!(target: "generator", id = %design.id, generator = state.generator.name(), "HTTP design generated");
  Ok(Json(design))
}
