use async_trait::async_trait;
use sqlx::{Postgres, QueryBuilder, Transaction};

use crate::api::dto::{CardCharacteristicInput, CreateCardRequest};
use crate::database::bind::bind_params_as;
use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::CardRow;
use crate::filter::SqlResult;

/// Read and write access to catalog cards (nodes joined with their characteristics)
#[async_trait]
pub trait CardRepository: Send + Sync {
    /// Number of distinct nodes matching the predicate
    async fn count_filtered(&self, predicate: &SqlResult) -> Result<i64, DatabaseError>;

    /// Flat rows for one page of matching nodes, newest first
    async fn list_filtered(
        &self,
        predicate: &SqlResult,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CardRow>, DatabaseError>;

    /// Flat rows of one node; empty when the node does not exist
    async fn get_by_id(&self, id: i32) -> Result<Vec<CardRow>, DatabaseError>;

    /// Flat rows of the best full-text matches, at most `limit` nodes
    async fn search_by_text(&self, text: &str, limit: i64) -> Result<Vec<CardRow>, DatabaseError>;

    /// Insert the node and all of its characteristic values atomically, returning the new id
    async fn create(&self, card: &CreateCardRequest) -> Result<i32, DatabaseError>;
}

const JOIN_CHARACTERISTICS: &str = "\
JOIN shop.node_types nt ON nt.id = n.node_type_id
JOIN shop.characteristic_values cv ON n.id = cv.node_id
JOIN shop.characteristics c ON c.id = cv.characteristic_id";

fn card_columns(node_type_column: &str) -> String {
    format!(
        "n.id AS node_id, n.title, n.description AS node_description, \
         n.created_at, n.updated_at, n.removed_at, \
         COALESCE(string_to_array(n.images, ','), '{{}}') AS images, \
         {} AS node_type, nt.description AS node_type_description, \
         c.title AS characteristic, cv.value AS characteristic_value, \
         cv.add_params::text AS additional_params, c.description AS characteristic_description",
        node_type_column
    )
}

pub(crate) fn count_query(predicate: &SqlResult) -> String {
    format!(
        "SELECT COUNT(*) FROM (SELECT n.id FROM shop.nodes n\n{}\n{} GROUP BY n.id) grouped_nodes",
        JOIN_CHARACTERISTICS,
        predicate.where_clause()
    )
}

/// Pages over nodes rather than joined rows, so every card on a page is complete
pub(crate) fn list_query(predicate: &SqlResult) -> String {
    let limit = predicate.next_param_index();
    let offset = limit + 1;
    format!(
        "WITH page_nodes AS (\
         SELECT n.id FROM shop.nodes n\n{joins}\n{filter} \
         GROUP BY n.id ORDER BY n.created_at DESC, n.id DESC LIMIT ${limit} OFFSET ${offset}) \
         SELECT {columns} FROM page_nodes p \
         JOIN shop.nodes n ON n.id = p.id\n{joins}\n\
         ORDER BY n.created_at DESC, n.id DESC, cv.id ASC",
        joins = JOIN_CHARACTERISTICS,
        filter = predicate.where_clause(),
        limit = limit,
        offset = offset,
        columns = card_columns("nt.id::text"),
    )
}

pub(crate) fn by_id_query() -> String {
    format!(
        "SELECT {} FROM shop.nodes n \
         JOIN shop.node_types nt ON nt.id = n.node_type_id \
         LEFT JOIN shop.characteristic_values cv ON n.id = cv.node_id \
         LEFT JOIN shop.characteristics c ON c.id = cv.characteristic_id \
         WHERE n.id = $1 ORDER BY cv.id ASC",
        card_columns("nt.type")
    )
}

/// The limit only counts nodes that carry characteristic values, matching the
/// inner join of the outer query
pub(crate) fn search_query() -> String {
    format!(
        "WITH ranked_nodes AS (\
         SELECT n.id, ts_rank_cd(n.search_vector, plainto_tsquery('russian', $1)) AS rank \
         FROM shop.nodes n \
         WHERE n.search_vector @@ plainto_tsquery('russian', $1) \
         AND EXISTS (SELECT 1 FROM shop.characteristic_values v WHERE v.node_id = n.id) \
         ORDER BY rank DESC, n.id DESC LIMIT $2) \
         SELECT {} FROM ranked_nodes r \
         JOIN shop.nodes n ON n.id = r.id\n{}\n\
         ORDER BY r.rank DESC, n.id DESC, cv.id ASC",
        card_columns("nt.type"),
        JOIN_CHARACTERISTICS
    )
}

pub struct PgCardRepository {
    db: DatabaseManager,
}

impl PgCardRepository {
    pub fn new(db: DatabaseManager) -> Self {
        Self { db }
    }

    async fn insert_characteristics(
        tx: &mut Transaction<'_, Postgres>,
        node_id: i32,
        characteristics: &[CardCharacteristicInput],
    ) -> Result<(), DatabaseError> {
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "INSERT INTO shop.characteristic_values (node_id, characteristic_id, add_params, value) ",
        );
        builder.push_values(characteristics, |mut row, ch| {
            row.push_bind(node_id)
                .push_bind(ch.id)
                .push_bind(ch.additional_params.clone())
                .push_bind(ch.value.clone());
        });

        builder.build().execute(&mut **tx).await?;
        Ok(())
    }
}

#[async_trait]
impl CardRepository for PgCardRepository {
    async fn count_filtered(&self, predicate: &SqlResult) -> Result<i64, DatabaseError> {
        let pool = self.db.pool().await;
        let sql = count_query(predicate);
        let (count,): (i64,) = bind_params_as(sqlx::query_as(&sql), &predicate.params)
            .fetch_one(&pool)
            .await?;
        Ok(count)
    }

    async fn list_filtered(
        &self,
        predicate: &SqlResult,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CardRow>, DatabaseError> {
        let pool = self.db.pool().await;
        let sql = list_query(predicate);
        let rows = bind_params_as(sqlx::query_as::<_, CardRow>(&sql), &predicate.params)
            .bind(limit)
            .bind(offset)
            .fetch_all(&pool)
            .await?;
        Ok(rows)
    }

    async fn get_by_id(&self, id: i32) -> Result<Vec<CardRow>, DatabaseError> {
        let pool = self.db.pool().await;
        let rows = sqlx::query_as::<_, CardRow>(&by_id_query())
            .bind(id)
            .fetch_all(&pool)
            .await?;
        Ok(rows)
    }

    async fn search_by_text(&self, text: &str, limit: i64) -> Result<Vec<CardRow>, DatabaseError> {
        let pool = self.db.pool().await;
        let rows = sqlx::query_as::<_, CardRow>(&search_query())
            .bind(text)
            .bind(limit)
            .fetch_all(&pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, card: &CreateCardRequest) -> Result<i32, DatabaseError> {
        let pool = self.db.pool().await;
        // Dropping the transaction without commit rolls it back
        let mut tx = pool.begin().await?;

        let (node_id,): (i32,) = sqlx::query_as(
            "INSERT INTO shop.nodes (title, description, node_type_id, images) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(&card.title)
        .bind(&card.node_description)
        .bind(card.node_type_id)
        .bind(card.images.join(","))
        .fetch_one(&mut *tx)
        .await?;

        if !card.characteristics.is_empty() {
            Self::insert_characteristics(&mut tx, node_id, &card.characteristics).await?;
        }

        tx.commit().await?;
        tracing::info!(node_id, characteristics = card.characteristics.len(), "Card created");
        Ok(node_id)
    }
}
