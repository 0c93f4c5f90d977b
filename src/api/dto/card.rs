use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{FieldErrors, Validate};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCardRequest {
    pub title: String,
    #[serde(default)]
    pub node_description: Option<String>,
    pub node_type_id: i32,
    pub images: Vec<String>,
    pub characteristics: Vec<CardCharacteristicInput>,
}

/// One characteristic value attached to a new card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCharacteristicInput {
    pub id: i32,
    pub value: String,
    #[serde(default)]
    pub additional_params: Option<Value>,
}

impl CreateCardRequest {
    pub fn characteristic_ids(&self) -> Vec<i32> {
        self.characteristics.iter().map(|c| c.id).collect()
    }
}

impl Validate for CreateCardRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.required("title", &self.title);
        errors.optional_text("nodeDescription", self.node_description.as_deref());
        errors.id("nodeTypeId", self.node_type_id);
        errors.non_empty("images", &self.images);
        // Images are stored comma-joined, so a name must be non-blank and comma-free
        for (i, image) in self.images.iter().enumerate() {
            if image.trim().is_empty() || image.contains(',') {
                errors.add(
                    format!("images[{}]", i),
                    "Must be a non-empty image name without commas",
                );
            }
        }
        errors.non_empty("characteristics", &self.characteristics);

        for (i, ch) in self.characteristics.iter().enumerate() {
            errors.id(&format!("characteristics[{}].id", i), ch.id);
            errors.required(&format!("characteristics[{}].value", i), &ch.value);
            if let Some(params) = &ch.additional_params {
                if !params.is_object() && !params.is_null() {
                    errors.add(
                        format!("characteristics[{}].additionalParams", i),
                        "Must be a JSON object",
                    );
                }
            }
        }

        errors.into_result()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCardsRequest {
    pub text: String,
    /// Out-of-range limits fall back to the default search limit
    #[serde(default)]
    pub limit: i64,
}

impl Validate for SearchCardsRequest {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors.required("text", self.text.trim());
        errors.into_result()
    }
}
