use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Characteristic {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub is_visible: bool,
}

/// A visible characteristic joined with one of its default values (if any)
#[derive(Debug, Clone, FromRow)]
pub struct CharacteristicFilterRow {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub value: Option<String>,
}

/// Visible characteristic together with every default value offered for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicFilter {
    pub characteristic_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub values: Vec<String>,
}
