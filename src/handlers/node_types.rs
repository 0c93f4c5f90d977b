use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use super::{check_id, PageQuery};
use crate::api::dto::{parse_body, CreateNodeTypeRequest, UpdateNodeTypeRequest};
use crate::database::models::{NodeType, Paginate};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Paginate<NodeType>> {
    let page = state.node_types.list(query.page(), query.size()).await?;
    Ok(ApiResponse::success(page))
}

pub async fn create(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<NodeType> {
    let request: CreateNodeTypeRequest = parse_body(payload)?;
    Ok(ApiResponse::created(state.node_types.create(&request).await?))
}

pub async fn update(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<NodeType> {
    let request: UpdateNodeTypeRequest = parse_body(payload)?;
    Ok(ApiResponse::success(state.node_types.update(&request).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    state.node_types.delete(check_id(id)?).await?;
    Ok(ApiResponse::success(json!({ "id": id })))
}
