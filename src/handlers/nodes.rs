use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use super::{check_id, PageQuery};
use crate::api::dto::{parse_body, CreateNodeRequest, UpdateNodeRequest};
use crate::database::models::{Node, Paginate};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>, Query(query): Query<PageQuery>) -> ApiResult<Paginate<Node>> {
    let page = state.nodes.list(query.page(), query.size()).await?;
    Ok(ApiResponse::success(page))
}

pub async fn create(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<Node> {
    let request: CreateNodeRequest = parse_body(payload)?;
    Ok(ApiResponse::created(state.nodes.create(&request).await?))
}

pub async fn update(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<Node> {
    let request: UpdateNodeRequest = parse_body(payload)?;
    Ok(ApiResponse::success(state.nodes.update(&request).await?))
}

/// DELETE /api/nodes/:id - marks the node removed
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    state.nodes.delete(check_id(id)?).await?;
    Ok(ApiResponse::success(json!({ "id": id })))
}
