use serde::{Deserialize, Serialize};

use super::{FieldErrors, Validate};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCharDefaultValueRequest {
    pub characteristic_id: i32,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateCharDefaultValueRequest {
    pub id: i32,
    pub value: String,
}

impl Validate for CreateCharDefaultValueRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.id("characteristicId", self.characteristic_id);
        errors.required("value", &self.value);
        errors.into_result()
    }
}

impl Validate for UpdateCharDefaultValueRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.id("id", self.id);
        errors.required("value", &self.value);
        errors.into_result()
    }
}
