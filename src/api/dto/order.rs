use serde::{Deserialize, Serialize};

use super::{FieldErrors, Validate};
use crate::error::ApiError;

/// One line of an order submission
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub node_id: i32,
    #[serde(default)]
    pub size: Option<String>,
    pub amount: i32,
}

impl Validate for Vec<OrderLine> {
    fn validate(&self) -> Result<(), ApiError> {
        if self.is_empty() {
            return Err(ApiError::bad_request("Order array cannot be empty"));
        }

        let mut errors = FieldErrors::new();
        for (i, line) in self.iter().enumerate() {
            errors.id(&format!("[{}].nodeId", i), line.node_id);
            if let Some(size) = &line.size {
                errors.required(&format!("[{}].size", i), size.trim());
            }
            if line.amount < 1 {
                errors.add(format!("[{}].amount", i), "Must be at least 1");
            }
        }
        errors.into_result()
    }
}
