use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Suggested value for a characteristic, read joined with the characteristic title
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct CharDefaultValue {
    pub id: i32,
    pub characteristic_id: i32,
    pub title: String,
    pub value: String,
}
