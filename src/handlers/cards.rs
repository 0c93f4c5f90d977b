use axum::extract::{Path, Query, State};
use axum::Json;
use serde_json::Value;

use super::check_id;
use crate::api::dto::{parse_body, CreateCardRequest, SearchCardsRequest};
use crate::database::models::{Card, Paginate};
use crate::filter::filters_from_query;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

fn query_number(pairs: &[(String, String)], key: &str) -> Option<i64> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .and_then(|(_, v)| v.trim().parse().ok())
}

/// GET /api/cards - paginated cards filtered by query parameters
pub async fn list(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Paginate<Card>> {
    let page_number = query_number(&pairs, "pageNumber");
    let page_size = query_number(&pairs, "pageSize");
    let filters = filters_from_query(&pairs);

    tracing::info!(?filters, "Fetching cards with filters");

    let page = state.cards.list(page_number, page_size, &filters).await?;
    Ok(ApiResponse::success(page))
}

/// GET /api/cards/:id
pub async fn get(State(state): State<AppState>, Path(id): Path<i32>) -> ApiResult<Card> {
    let card = state.cards.get_by_id(check_id(id)?).await?;
    Ok(ApiResponse::success(card))
}

/// POST /api/cards
pub async fn create(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<Card> {
    let request: CreateCardRequest = parse_body(payload)?;
    let card = state.cards.create(&request).await?;
    Ok(ApiResponse::created(card))
}

/// POST /api/cards/search - full-text search over titles and descriptions
pub async fn search(State(state): State<AppState>, Json(payload): Json<Value>) -> ApiResult<Vec<Card>> {
    let request: SearchCardsRequest = parse_body(payload)?;
    let cards = state.cards.search_by_text(&request.text, request.limit).await?;
    Ok(ApiResponse::success(cards))
}
