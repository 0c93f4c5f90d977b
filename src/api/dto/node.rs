use serde::{Deserialize, Serialize};

use super::{FieldErrors, Validate};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNodeRequest {
    pub title: String,
    pub node_type_id: i32,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNodeRequest {
    pub id: i32,
    pub title: String,
    pub node_type_id: i32,
    #[serde(default)]
    pub description: Option<String>,
}

impl Validate for CreateNodeRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.required("title", &self.title);
        errors.id("nodeTypeId", self.node_type_id);
        errors.optional_text("description", self.description.as_deref());
        errors.into_result()
    }
}

impl Validate for UpdateNodeRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.id("id", self.id);
        errors.required("title", &self.title);
        errors.id("nodeTypeId", self.node_type_id);
        errors.optional_text("description", self.description.as_deref());
        errors.into_result()
    }
}
