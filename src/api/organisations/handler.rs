//! Organisation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::api::ListQuery;
use crate::core::ServerState;
use crate::db::models::{Organisation, OrganisationCreate, OrganisationUpdate};
use crate::db::repository::{OrganisationRepository, Repository};
use crate::utils::{AppError, AppResult};

/// POST /api/organisations
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrganisationCreate>,
) -> AppResult<(StatusCode, Json<Organisation>)> {
    let repo = OrganisationRepository::new(state.db.clone());
    let organisation = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(organisation)))
}

/// GET /api/organisations
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Organisation>>> {
    let repo = OrganisationRepository::new(state.db.clone());
    let organisations = repo.get_multi(query.skip, query.limit).await?;
    Ok(Json(organisations))
}

/// GET /api/organisations/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Organisation>> {
    let repo = OrganisationRepository::new(state.db.clone());
    let organisation = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Organisation {id}")))?;
    Ok(Json(organisation))
}

/// PUT /api/organisations/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrganisationUpdate>,
) -> AppResult<Json<Organisation>> {
    let repo = OrganisationRepository::new(state.db.clone());
    let organisation = repo.update(id, payload).await?;
    Ok(Json(organisation))
}

/// DELETE /api/organisations/{id} - returns the removed organisation
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Organisation>> {
    let repo = OrganisationRepository::new(state.db.clone());
    let organisation = repo.remove(id).await?;
    Ok(Json(organisation))
}
