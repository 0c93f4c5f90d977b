use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Size {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
}
