use serde::{Deserialize, Serialize};

use super::{FieldErrors, Validate};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCharacteristicRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCharacteristicRequest {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub is_visible: bool,
}

impl Validate for CreateCharacteristicRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.required("title", &self.title);
        errors.optional_text("description", self.description.as_deref());
        errors.into_result()
    }
}

impl Validate for UpdateCharacteristicRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.id("id", self.id);
        errors.required("title", &self.title);
        errors.optional_text("description", self.description.as_deref());
        errors.into_result()
    }
}
