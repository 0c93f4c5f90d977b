use serde::{Deserialize, Serialize};

use super::{FieldErrors, Validate};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateNodeTypeRequest {
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateNodeTypeRequest {
    pub id: i32,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for CreateNodeTypeRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.required("type", &self.type_name);
        errors.optional_text("description", self.description.as_deref());
        errors.into_result()
    }
}

impl Validate for UpdateNodeTypeRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.id("id", self.id);
        errors.required("type", &self.type_name);
        errors.optional_text("description", self.description.as_deref());
        errors.into_result()
    }
}
