pub mod bind;
pub mod manager;
pub mod models;
pub mod repository;

use async_trait::async_trait;
use std::sync::Arc;

pub use manager::{DatabaseError, DatabaseManager};
use repository::{
    CardRepository, CharDefaultValueRepository, CharacteristicRepository, NodeRepository,
    NodeTypeRepository, PgCardRepository, PgCharDefaultValueRepository,
    PgCharacteristicRepository, PgNodeRepository, PgNodeTypeRepository, PgSizeRepository,
    SizeRepository,
};

/// Liveness check used by the `/health` endpoint
#[async_trait]
pub trait HealthCheck: Send + Sync {
    async fn ping(&self) -> Result<(), DatabaseError>;
}

#[async_trait]
impl HealthCheck for DatabaseManager {
    async fn ping(&self) -> Result<(), DatabaseError> {
        self.health_check().await
    }
}

/// Every repository the services depend on
#[derive(Clone)]
pub struct Repositories {
    pub cards: Arc<dyn CardRepository>,
    pub nodes: Arc<dyn NodeRepository>,
    pub node_types: Arc<dyn NodeTypeRepository>,
    pub characteristics: Arc<dyn CharacteristicRepository>,
    pub char_default_values: Arc<dyn CharDefaultValueRepository>,
    pub sizes: Arc<dyn SizeRepository>,
}

impl Repositories {
    /// Postgres-backed repositories sharing one store client
    pub fn postgres(db: &DatabaseManager) -> Self {
        Self {
            cards: Arc::new(PgCardRepository::new(db.clone())),
            nodes: Arc::new(PgNodeRepository::new(db.clone())),
            node_types: Arc::new(PgNodeTypeRepository::new(db.clone())),
            characteristics: Arc::new(PgCharacteristicRepository::new(db.clone())),
            char_default_values: Arc::new(PgCharDefaultValueRepository::new(db.clone())),
            sizes: Arc::new(PgSizeRepository::new(db.clone())),
        }
    }
}
