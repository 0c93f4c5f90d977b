//! Request bodies accepted by the HTTP API and their field validation.

pub mod card;
pub mod char_default_value;
pub mod characteristic;
pub mod node;
pub mod node_type;
pub mod order;
pub mod size;

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::ApiError;

pub use card::{CardCharacteristicInput, CreateCardRequest, SearchCardsRequest};
pub use char_default_value::{CreateCharDefaultValueRequest, UpdateCharDefaultValueRequest};
pub use characteristic::{CreateCharacteristicRequest, UpdateCharacteristicRequest};
pub use node::{CreateNodeRequest, UpdateNodeRequest};
pub use node_type::{CreateNodeTypeRequest, UpdateNodeTypeRequest};
pub use order::OrderLine;
pub use size::{CreateSizeRequest, UpdateSizeRequest};

const DESCRIPTION_MIN_CHARS: usize = 3;
const DESCRIPTION_MAX_CHARS: usize = 1000;

pub trait Validate {
    fn validate(&self) -> Result<(), ApiError>;
}

/// Deserialize a JSON body into `T` and run its field validation
pub fn parse_body<T>(payload: Value) -> Result<T, ApiError>
where
    T: DeserializeOwned + Validate,
{
    let body: T = serde_json::from_value(payload)
        .map_err(|e| ApiError::invalid_json(format!("Invalid request body: {}", e)))?;
    body.validate()?;
    Ok(body)
}

/// Collects per-field messages; the first message recorded for a field wins
#[derive(Debug, Default)]
pub struct FieldErrors {
    errors: HashMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn required(&mut self, field: &str, value: &str) {
        if value.is_empty() {
            self.add(field, "This field is required");
        }
    }

    pub fn id(&mut self, field: &str, id: i32) {
        if id < 1 {
            self.add(field, "Must be a positive integer");
        }
    }

    pub fn optional_text(&mut self, field: &str, value: Option<&str>) {
        if let Some(text) = value {
            let len = text.chars().count();
            if !(DESCRIPTION_MIN_CHARS..=DESCRIPTION_MAX_CHARS).contains(&len) {
                self.add(
                    field,
                    format!(
                        "Must be between {} and {} characters",
                        DESCRIPTION_MIN_CHARS, DESCRIPTION_MAX_CHARS
                    ),
                );
            }
        }
    }

    pub fn non_empty<T>(&mut self, field: &str, items: &[T]) {
        if items.is_empty() {
            self.add(field, "Must contain at least one item");
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_result(self) -> Result<(), ApiError> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ApiError::validation_error("Validation error", Some(self.errors)))
        }
    }
}
