use async_trait::async_trait;

use crate::api::dto::{CreateCharDefaultValueRequest, UpdateCharDefaultValueRequest};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::CharDefaultValue;

const SELECT_WITH_TITLE: &str = "SELECT cdv.id, cdv.characteristic_id, c.title, cdv.value \
     FROM shop.char_default_value cdv \
     JOIN shop.characteristics c ON c.id = cdv.characteristic_id";

#[async_trait]
pub trait CharDefaultValueRepository: Send + Sync {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<CharDefaultValue>, DatabaseError>;
    async fn count(&self) -> Result<i64, DatabaseError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<CharDefaultValue>, DatabaseError>;
    async fn create(&self, input: &CreateCharDefaultValueRequest) -> Result<i32, DatabaseError>;
    async fn update(&self, input: &UpdateCharDefaultValueRequest) -> Result<u64, DatabaseError>;
    async fn delete(&self, id: i32) -> Result<u64, DatabaseError>;
}

pub struct PgCharDefaultValueRepository {
    db: DatabaseManager,
}

impl PgCharDefaultValueRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CharDefaultValueRepository for PgCharDefaultValueRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<CharDefaultValue>, DatabaseError> {
        let pool = self.db.pool().await;
        let sql = format!("{} ORDER BY cdv.id ASC LIMIT $1 OFFSET $2", SELECT_WITH_TITLE);
        let rows = sqlx::query_as::<_, CharDefaultValue>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(&pool)
            .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        let pool = self.db.pool().await;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shop.char_default_value")
            .fetch_one(&pool)
            .await?;
        Ok(count)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<CharDefaultValue>, DatabaseError> {
        let pool = self.db.pool().await;
        let sql = format!("{} WHERE cdv.id = $1", SELECT_WITH_TITLE);
        let row = sqlx::query_as::<_, CharDefaultValue>(&sql)
            .bind(id)
            .fetch_optional(&pool)
            .await?;
        Ok(row)
    }

    async fn create(&self, input: &CreateCharDefaultValueRequest) -> Result<i32, DatabaseError> {
        let pool = self.db.pool().await;
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO shop.char_default_value (characteristic_id, value) VALUES ($1, $2) RETURNING id",
        )
        .bind(input.characteristic_id)
        .bind(&input.value)
        .fetch_one(&pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, input: &UpdateCharDefaultValueRequest) -> Result<u64, DatabaseError> {
        let pool = self.db.pool().await;
        let result = sqlx::query("UPDATE shop.char_default_value SET value = $1 WHERE id = $2")
            .bind(&input.value)
            .bind(input.id)
            .execute(&pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let pool = self.db.pool().await;
        let result = sqlx::query("DELETE FROM shop.char_default_value WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await?;
        Ok(result.rows_affected())
    }
}
