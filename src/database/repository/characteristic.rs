use async_trait::async_trait;

use crate::api::dto::{CreateCharacteristicRequest, UpdateCharacteristicRequest};
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Characteristic, CharacteristicFilterRow};

#[async_trait]
pub trait CharacteristicRepository: Send + Sync {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Characteristic>, DatabaseError>;
    async fn count(&self) -> Result<i64, DatabaseError>;
    async fn get_by_id(&self, id: i32) -> Result<Option<Characteristic>, DatabaseError>;
    async fn create(&self, input: &CreateCharacteristicRequest) -> Result<i32, DatabaseError>;
    async fn update(&self, input: &UpdateCharacteristicRequest) -> Result<u64, DatabaseError>;
    async fn delete(&self, id: i32) -> Result<u64, DatabaseError>;

    /// Ids from `ids` with no matching characteristic, in input order
    async fn find_missing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DatabaseError>;

    /// Visible characteristics left-joined with their default values
    async fn filter_rows(&self) -> Result<Vec<CharacteristicFilterRow>, DatabaseError>;
}

pub struct PgCharacteristicRepository {
    db: DatabaseManager,
}

impl PgCharacteristicRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CharacteristicRepository for PgCharacteristicRepository {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Characteristic>, DatabaseError> {
        let pool = self.db.pool().await;
        let rows = sqlx::query_as::<_, Characteristic>(
            "SELECT id, title, description, is_visible FROM shop.characteristics \
             ORDER BY id ASC LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&pool)
        .await?;
        Ok(rows)
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        let pool = self.db.pool().await;
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shop.characteristics")
            .fetch_one(&pool)
            .await?;
        Ok(count)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Characteristic>, DatabaseError> {
        let pool = self.db.pool().await;
        let row = sqlx::query_as::<_, Characteristic>(
            "SELECT id, title, description, is_visible FROM shop.characteristics WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&pool)
        .await?;
        Ok(row)
    }

    async fn create(&self, input: &CreateCharacteristicRequest) -> Result<i32, DatabaseError> {
        let pool = self.db.pool().await;
        let (id,): (i32,) = sqlx::query_as(
            "INSERT INTO shop.characteristics (title, description) VALUES ($1, $2) RETURNING id",
        )
        .bind(&input.title)
        .bind(&input.description)
        .fetch_one(&pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, input: &UpdateCharacteristicRequest) -> Result<u64, DatabaseError> {
        let pool = self.db.pool().await;
        let result = sqlx::query(
            "UPDATE shop.characteristics SET title = $1, description = $2, is_visible = $3 WHERE id = $4",
        )
        .bind(&input.title)
        .bind(&input.description)
        .bind(input.is_visible)
        .bind(input.id)
        .execute(&pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let pool = self.db.pool().await;
        let result = sqlx::query("DELETE FROM shop.characteristics WHERE id = $1")
            .bind(id)
            .execute(&pool)
            .await?;
        Ok(result.rows_affected())
    }

    async fn find_missing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DatabaseError> {
        if ids.is_empty() {
            return Ok(vec![]);
        }

        let pool = self.db.pool().await;
        let found: Vec<(i32,)> = sqlx::query_as("SELECT id FROM shop.characteristics WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&pool)
            .await?;

        let found: std::collections::HashSet<i32> = found.into_iter().map(|(id,)| id).collect();
        Ok(ids.iter().copied().filter(|id| !found.contains(id)).collect())
    }

    async fn filter_rows(&self) -> Result<Vec<CharacteristicFilterRow>, DatabaseError> {
        let pool = self.db.pool().await;
        let rows = sqlx::query_as::<_, CharacteristicFilterRow>(
            "SELECT ch.id, ch.title, ch.description, cdv.value \
             FROM shop.characteristics ch \
             LEFT JOIN shop.char_default_value cdv ON ch.id = cdv.characteristic_id \
             WHERE ch.is_visible = true \
             ORDER BY ch.id ASC, cdv.id ASC",
        )
        .fetch_all(&pool)
        .await?;
        Ok(rows)
    }
}
