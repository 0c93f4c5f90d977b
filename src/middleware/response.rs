use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;

/// Successful catalog payload, sent as `{ "success": true, "data": ... }`.
///
/// Handlers return this for every 2xx answer; failures travel as [`ApiError`]
/// and never carry the `success` flag.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub status: StatusCode,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            data,
            status: StatusCode::OK,
        }
    }

    /// 201, used by the POST endpoints that insert a row
    pub fn created(data: T) -> Self {
        Self {
            data,
            status: StatusCode::CREATED,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match serde_json::to_value(&self.data) {
            Ok(data) => (self.status, Json(json!({ "success": true, "data": data }))).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                ApiError::internal_server_error("Failed to serialize response data").into_response()
            }
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use std::collections::HashMap;

    async fn into_parts<T: Serialize>(response: ApiResponse<T>) -> (StatusCode, Value) {
        let response = response.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn wraps_data_in_success_envelope() {
        let (status, body) = into_parts(ApiResponse::success(json!({ "id": 7 }))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "success": true, "data": { "id": 7 } }));
    }

    #[tokio::test]
    async fn created_uses_201() {
        let (status, body) = into_parts(ApiResponse::created(vec!["M", "XL"])).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["data"], json!(["M", "XL"]));
    }

    #[tokio::test]
    async fn unserializable_data_becomes_internal_error() {
        // JSON object keys must be strings
        let mut data = HashMap::new();
        data.insert((1, 2), "pair");

        let (status, body) = into_parts(ApiResponse::success(data)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["code"], "INTERNAL_SERVER_ERROR");
        assert_eq!(body["message"], "Failed to serialize response data");
        assert!(body.get("success").is_none());
    }
}
