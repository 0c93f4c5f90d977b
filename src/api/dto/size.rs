use serde::{Deserialize, Serialize};

use super::{FieldErrors, Validate};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSizeRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSizeRequest {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for CreateSizeRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.required("title", &self.title);
        errors.optional_text("description", self.description.as_deref());
        errors.into_result()
    }
}

impl Validate for UpdateSizeRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.id("id", self.id);
        errors.required("title", &self.title);
        errors.optional_text("description", self.description.as_deref());
        errors.into_result()
    }
}
