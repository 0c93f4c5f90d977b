use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::dto::{parse_body, OrderLine};
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::OrderReceipt;
use crate::state::AppState;

/// POST /api/orders - body is a non-empty array of order lines
pub async fn create(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<OrderReceipt> {
    let lines: Vec<OrderLine> = parse_body(payload)?;
    Ok(ApiResponse::success(state.orders.place(&lines)))
}
