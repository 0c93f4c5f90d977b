use crate::database::DatabaseError;
use crate::services::card_mapper::MapError;

#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    /// Request referenced ids that do not exist
    #[error("{field}: {message}")]
    InvalidReference { field: String, message: String },

    #[error("Card mapping failed: {0}")]
    Mapping(MapError),

    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),
}

impl From<MapError> for ServiceError {
    fn from(err: MapError) -> Self {
        match err {
            MapError::NotFound => ServiceError::NotFound("Card not found".to_string()),
            other => ServiceError::Mapping(other),
        }
    }
}
