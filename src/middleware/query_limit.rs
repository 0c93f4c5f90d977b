use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;
use crate::state::AppState;

/// Number of `key=value` pairs in a raw query string
pub fn count_query_params(query: Option<&str>) -> usize {
    query
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).count())
        .unwrap_or(0)
}

/// Reject requests carrying more query parameters than configured
pub async fn limit_query_params(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let count = count_query_params(request.uri().query());
    if count > state.max_query_params {
        tracing::warn!(
            count,
            max = state.max_query_params,
            path = %request.uri().path(),
            "Rejected request with too many query parameters"
        );
        return ApiError::bad_request(format!(
            "Too many query parameters (maximum is {})",
            state.max_query_params
        ))
        .into_response();
    }

    next.run(request).await
}
