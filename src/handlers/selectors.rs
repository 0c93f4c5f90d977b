use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use super::{check_id, PageQuery};
use crate::api::dto::{parse_body, CreateCharDefaultValueRequest, UpdateCharDefaultValueRequest};
use crate::database::models::{CharDefaultValue, Paginate};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Paginate<CharDefaultValue>> {
    let page = state.selectors.list(query.page(), query.size()).await?;
    Ok(ApiResponse::success(page))
}

pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<CharDefaultValue> {
    Ok(ApiResponse::success(state.selectors.get_by_id(check_id(id)?).await?))
}

pub async fn create(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<CharDefaultValue> {
    let request: CreateCharDefaultValueRequest = parse_body(payload)?;
    Ok(ApiResponse::created(state.selectors.create(&request).await?))
}

pub async fn update(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<CharDefaultValue> {
    let request: UpdateCharDefaultValueRequest = parse_body(payload)?;
    Ok(ApiResponse::success(state.selectors.update(&request).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    state.selectors.delete(check_id(id)?).await?;
    Ok(ApiResponse::success(json!({ "id": id })))
}
