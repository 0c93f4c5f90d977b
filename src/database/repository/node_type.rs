use async_trait::async_trait;

use crate::api::dto::{CreateNodeTypeRequest, UpdateNodeTypeRequest};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::NodeType;

#[async_trait]
pub trait NodeTypeRepository: Send + Sync {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<NodeType>, DatabaseError>;
    async fn count(&self) -> Result<i64, DatabaseError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<NodeType>, DatabaseError>;
    async fn create(&self, input: &CreateNodeTypeRequest) -> Result<i32, DatabaseError>;
    /// Returns the number of rows updated
    async fn update(&self, input: &UpdateNodeTypeRequest) -> Result<u64, DatabaseError>;
    /// Returns the number of rows deleted
    async fn delete(&self, id: i32) -> Result<u64, DatabaseError>;
}

pub struct PgNodeTypeRepository {
    db: DatabaseManager,
}

impl PgNodeTypeRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NodeTypeRepository for PgNodeTypeRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<NodeType>, DatabaseError> {
        let pool = self.db.pool().await;
        let rows = sqlx::query_as::<_, NodeType>(
            "SELECT id, type, description FROM shop.node_types ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&pool)
        .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        let pool = self.db.pool().await;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shop.node_types")
            .fetch_one(&pool)
            .await?;
        Ok(count)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<NodeType>, DatabaseError> {
        let pool = self.db.pool().await;
        let row = sqlx::query_as::<_, NodeType>(
            "SELECT id, type, description FROM shop.node_types WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, input: &CreateNodeTypeRequest) -> Result<i32, DatabaseError> {
        let pool = self.db.pool().await;
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO shop.node_types (type, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&input.type_name)
        .bind(&input.description)
        .fetch_one(&pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, input: &UpdateNodeTypeRequest) -> Result<u64, DatabaseError> {
        let pool = self.db.pool().await;
        let result = sqlx::query("UPDATE shop.node_types SET type = $1, description = $2 WHERE id = $3")
            .bind(&input.type_name)
            .bind(&input.description)
            .bind(input.id)
            .execute(&pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let pool = self.db.pool().await;
        let result = sqlx::query("DELETE FROM shop.node_types WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await?;
        Ok(result.rows_affected())
    }
}
