use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use super::{check_id, PageQuery};
use crate::api::dto::{parse_body, CreateSizeRequest, UpdateSizeRequest};
use crate::database::models::{Paginate, Size};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>, Query(query): Query<PageQuery>) -> ApiResult<Paginate<Size>> {
    let page = state.sizes.list(query.page(), query.size()).await?;
    Ok(ApiResponse::success(page))
}

pub async fn create(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<Size> {
    let request: CreateSizeRequest = parse_body(payload)?;
    Ok(ApiResponse::created(state.sizes.create(&request).await?))
}

pub async fn update(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<Size> {
    let request: UpdateSizeRequest = parse_body(payload)?;
    Ok(ApiResponse::success(state.sizes.update(&request).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    state.sizes.delete(check_id(id)?).await?;
    Ok(ApiResponse::success(json!({ "id": id })))
}
