//! Handlers for the `/api/leads` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use leadtracker_core::error::CoreError;
use leadtracker_core::lead::{self, LeadInput, LeadStatus};
use leadtracker_core::query::LeadQuery;
use leadtracker_core::types::LeadId;
use leadtracker_db::models::lead::{CreateLead, Lead, LeadStats, UpdateLead, UpdateLeadStatus};
use leadtracker_db::repositories::LeadRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::ApiResponse;
use crate::state::AppState;

/// Query parameters accepted by the list endpoint.
#[derive(Debug, Deserialize)]
pub struct ListLeadsParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
}

/// Parse a path id, mapping malformed input to a 400 instead of a 404.
fn parse_lead_id(raw: &str) -> Result<LeadId, AppError> {
    raw.parse::<LeadId>().map_err(|_| AppError::BadId)
}

fn lead_not_found() -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Lead" })
}

/// POST /api/leads
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateLead>,
) -> AppResult<(StatusCode, Json<ApiResponse<Lead>>)> {
    let input = LeadInput::from(input);
    let new_lead = lead::validate_new(&input).map_err(CoreError::Validation)?;
    let created = LeadRepo::create(&state.pool, &new_lead).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success_with_message(
            "Lead created successfully",
            created,
        )),
    ))
}

/// GET /api/leads?status=&search=&sort=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListLeadsParams>,
) -> AppResult<Json<ApiResponse<Vec<Lead>>>> {
    let query = LeadQuery::from_params(
        params.status.as_deref(),
        params.search.as_deref(),
        params.sort.as_deref(),
    );
    let leads = LeadRepo::list(&state.pool, &query).await?;
    let count = leads.len();
    Ok(Json(ApiResponse::success(leads).with_count(count)))
}

/// GET /api/leads/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<Lead>>> {
    let id = parse_lead_id(&id)?;
    let lead = LeadRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(lead_not_found)?;
    Ok(Json(ApiResponse::success(lead)))
}

/// PUT /api/leads/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateLead>,
) -> AppResult<Json<ApiResponse<Lead>>> {
    let id = parse_lead_id(&id)?;
    let input = LeadInput::from(input);
    let patch = lead::validate_patch(&input).map_err(CoreError::Validation)?;
    let updated = LeadRepo::update(&state.pool, id, &patch)
        .await?
        .ok_or_else(lead_not_found)?;
    Ok(Json(ApiResponse::success_with_message(
        "Lead updated successfully",
        updated,
    )))
}

/// DELETE /api/leads/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let id = parse_lead_id(&id)?;
    if !LeadRepo::delete(&state.pool, id).await? {
        return Err(lead_not_found());
    }
    Ok(Json(ApiResponse::success_with_message(
        "Lead deleted successfully",
        serde_json::json!({}),
    )))
}

/// PATCH /api/leads/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateLeadStatus>,
) -> AppResult<Json<ApiResponse<Lead>>> {
    // The status is checked before the id, so a bad status answers 400
    // even when the id is malformed.
    let status = input
        .status
        .as_deref()
        .and_then(LeadStatus::from_str)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "Invalid status. Must be one of: {}",
                LeadStatus::ALL.join(", ")
            ))
        })?;
    let id = parse_lead_id(&id)?;
    let updated = LeadRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or_else(lead_not_found)?;
    Ok(Json(ApiResponse::success_with_message(
        "Lead status updated successfully",
        updated,
    )))
}

/// GET /api/leads/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<ApiResponse<LeadStats>>> {
    let stats = LeadRepo::stats(&state.pool).await?;
    Ok(Json(ApiResponse::success(stats)))
}
