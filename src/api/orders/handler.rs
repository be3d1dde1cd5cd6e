//! Order API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Serialize;

use crate::api::ListQuery;
use crate::core::ServerState;
use crate::db::models::{Order, OrderCreate, OrderUpdate};
use crate::db::repository::{OrderRepository, Repository};
use crate::utils::{AppError, AppResult};

/// Creation response: the stored order plus the ids of the catalog
/// products registered from its payload
#[derive(Debug, Serialize)]
pub struct OrderCreated {
    #[serde(flatten)]
    pub order: Order,
    #[serde(rename = "Product_ids")]
    pub product_ids: Vec<i64>,
}

/// POST /api/orders - runs the order creation workflow
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OrderCreate>,
) -> AppResult<(StatusCode, Json<OrderCreated>)> {
    let repo = OrderRepository::new(state.db.clone());
    let (order, product_ids) = repo.create_new_order(payload).await?;
    Ok((StatusCode::CREATED, Json(OrderCreated { order, product_ids })))
}

/// GET /api/orders
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let repo = OrderRepository::new(state.db.clone());
    let orders = repo.get_multi(query.skip, query.limit).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo
        .get(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Order {id}")))?;
    Ok(Json(order))
}

/// PUT /api/orders/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<OrderUpdate>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.update(id, payload).await?;
    Ok(Json(order))
}

/// DELETE /api/orders/{id} - returns the removed order
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Order>> {
    let repo = OrderRepository::new(state.db.clone());
    let order = repo.remove(id).await?;
    Ok(Json(order))
}
