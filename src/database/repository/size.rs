use async_trait::async_trait;

use crate::api::dto::{CreateSizeRequest, UpdateSizeRequest};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::Size;

#[async_trait]
pub trait SizeRepository: Send + Sync {
    /// Sizes ordered by title descending
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Size>, DatabaseError>;
    async fn count(&self) -> Result<i64, DatabaseError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Size>, DatabaseError>;
    async fn create(&self, input: &CreateSizeRequest) -> Result<i32, DatabaseError>;
    async fn update(&self, input: &UpdateSizeRequest) -> Result<u64, DatabaseError>;
    async fn delete(&self, id: i32) -> Result<u64, DatabaseError>;
}

pub struct PgSizeRepository {
    db: DatabaseManager,
}

impl PgSizeRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SizeRepository for PgSizeRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Size>, DatabaseError> {
        let pool = self.db.pool().await;
        let rows = sqlx::query_as::<_, Size>(
            "SELECT id, title, description FROM shop.sizes ORDER BY title DESC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&pool)
        .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        let pool = self.db.pool().await;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shop.sizes")
            .fetch_one(&pool)
            .await?;
        Ok(count)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Size>, DatabaseError> {
        let pool = self.db.pool().await;
        let row = sqlx::query_as::<_, Size>("SELECT id, title, description FROM shop.sizes WHERE id = $1")
            .bind(id)
            .fetch_optional(&pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: &CreateSizeRequest) -> Result<i32, DatabaseError> {
        let pool = self.db.pool().await;
        let (id,): (i32,) =
            sqlx::query_as("INSERT INTO shop.sizes (title, description) VALUES ($1, $2) RETURNING id")
                .bind(&input.title)
                .bind(&input.description)
                .fetch_one(&pool)
                .await?;
        Ok(id)
    }

    async fn update(&self, input: &UpdateSizeRequest) -> Result<u64, DatabaseError> {
        let pool = self.db.pool().await;
        let result = sqlx::query("UPDATE shop.sizes SET title = $1, description = $2 WHERE id = $3")
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.id)
            .execute(&pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let pool = self.db.pool().await;
        let result = sqlx::query("DELETE FROM shop.sizes WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await?;
        Ok(result.rows_affected())
    }
}
