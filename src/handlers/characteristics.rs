use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::{json, Value};

use super::{check_id, PageQuery};
use crate::api::dto::{parse_body, CreateCharacteristicRequest, UpdateCharacteristicRequest};
use crate::database::models::{Characteristic, CharacteristicFilter, Paginate};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> ApiResult<Paginate<Characteristic>> {
    let page = state.characteristics.list(query.page(), query.size()).await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/characteristics/filters - visible characteristics with their default values
pub async fn filters(State(state): State<AppState>) -> ApiResult<Vec<CharacteristicFilter>> {
    Ok(ApiResponse::success(state.characteristics.filters().await?))
}

pub async fn create(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<Characteristic> {
    let request: CreateCharacteristicRequest = parse_body(payload)?;
    Ok(ApiResponse::created(state.characteristics.create(&request).await?))
}

pub async fn update(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<Characteristic> {
    let request: UpdateCharacteristicRequest = parse_body(payload)?;
    Ok(ApiResponse::success(state.characteristics.update(&request).await?))
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Value> {
    state.characteristics.delete(check_id(id)?).await?;
    Ok(ApiResponse::success(json!({ "id": id })))
}
