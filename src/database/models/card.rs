use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::FromRow;

/// One node x characteristic-value row of the catalog join
#[derive(Debug, Clone, FromRow)]
pub struct CardRow {
    pub node_id: i32,
    pub title: String,
    pub node_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
    pub images: Vec<String>,
    /// Type label on the by-id and search paths, type id as text on the listing path
    pub node_type: String,
    pub node_type_description: Option<String>,
    pub characteristic: Option<String>,
    pub characteristic_value: Option<String>,
    /// Raw JSON text of `add_params`
    pub additional_params: Option<String>,
    pub characteristic_description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub node_id: i32,
    pub title: String,
    pub node_description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
    pub images: Vec<String>,
    pub node_type: String,
    pub node_type_description: Option<String>,
    /// Characteristic entries grouped by title
    pub characteristics: Vec<Vec<CharacteristicEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacteristicEntry {
    pub title: String,
    pub value: String,
    pub additional_params: Option<Map<String, Value>>,
    pub description: Option<String>,
}
