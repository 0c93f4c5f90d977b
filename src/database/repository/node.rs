use async_trait::async_trait;

use crate::api::dto::{CreateNodeRequest, UpdateNodeRequest};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::Node;

const NODE_COLUMNS: &str =
    "id, title, description, node_type_id, created_at, updated_at, removed_at";

#[async_trait]
pub trait NodeRepository: Send + Sync {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Node>, DatabaseError>;
    async fn count(&self) -> Result<i64, DatabaseError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Node>, DatabaseError>;
    async fn create(&self, input: &CreateNodeRequest) -> Result<i32, DatabaseError>;
    async fn update(&self, input: &UpdateNodeRequest) -> Result<u64, DatabaseError>;
    /// Stamp `removed_at`; the row stays in place
    async fn soft_delete(&self, id: i32) -> Result<u64, DatabaseError>;
}

pub struct PgNodeRepository {
    db: DatabaseManager,
}

impl PgNodeRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NodeRepository for PgNodeRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Node>, DatabaseError> {
        let pool = self.db.pool().await;
        let sql = format!(
            "SELECT {} FROM shop.nodes ORDER BY id ASC LIMIT $1 OFFSET $2",
            NODE_COLUMNS
        );
        let rows = sqlx::query_as::<_, Node>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&pool)
            .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        let pool = self.db.pool().await;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shop.nodes")
            .fetch_one(&pool)
            .await?;
        Ok(count)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Node>, DatabaseError> {
        let pool = self.db.pool().await;
        let sql = format!("SELECT {} FROM shop.nodes WHERE id = $1", NODE_COLUMNS);
        let row = sqlx::query_as::<_, Node>(&sql)
            .bind(id)
            .fetch_optional(&pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: &CreateNodeRequest) -> Result<i32, DatabaseError> {
        let pool = self.db.pool().await;
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO shop.nodes (title, node_type_id, description) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.title)
        .bind(input.node_type_id)
        .bind(&input.description)
        .fetch_one(&pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, input: &UpdateNodeRequest) -> Result<u64, DatabaseError> {
        let pool = self.db.pool().await;
        let result = sqlx::query(
            "UPDATE shop.nodes SET title = $1, node_type_id = $2, description = $3, updated_at = now() \
             WHERE id = $4",
        )
        .bind(&input.title)
        .bind(input.node_type_id)
        .bind(&input.description)
        .bind(input.id)
        .execute(&pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn soft_delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let pool = self.db.pool().await;
        let result = sqlx::query("UPDATE shop.nodes SET removed_at = now() WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await
            .map_err(|e| {
                tracing::error!(id, error = %e, "Failed to delete node");
                e
            })?;
        Ok(result.rows_affected())
    }
}
