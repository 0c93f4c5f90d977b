use std::sync::Arc;

use crate::api::dto::CreateCardRequest;
use crate::database::models::{Card, Paginate};
use crate::database::repository::{CardRepository, CharacteristicRepository, NodeTypeRepository};
use crate::database::Repositories;
use crate::filter::{CardFilter, FilterWhere};
use crate::pagination::{clamp_search_limit, PageRequest};
use crate::services::card_mapper::map_card_rows;
use crate::services::error::ServiceError;

pub struct CardService {
    cards: Arc<dyn CardRepository>,
    node_types: Arc<dyn NodeTypeRepository>,
    characteristics: Arc<dyn CharacteristicRepository>,
    default_page_size: i64,
}

impl CardService {
    pub fn new(repos: &Repositories, default_page_size: i64) -> Self {
        Self {
            cards: repos.cards.clone(),
            node_types: repos.node_types.clone(),
            characteristics: repos.characteristics.clone(),
            default_page_size,
        }
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Card, ServiceError> {
        let rows = self.cards.get_by_id(id).await?;
        map_card_rows(rows)?
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::NotFound("Card not found".to_string()))
    }

    /// One page of cards matching every filter. The total counts matching nodes.
    pub async fn list(
        &self,
        page_number: Option<i64>,
        page_size: Option<i64>,
        filters: &[CardFilter],
    ) -> Result<Paginate<Card>, ServiceError> {
        let page = PageRequest::normalize(page_number, page_size, self.default_page_size);
        let predicate = FilterWhere::generate(filters);

        let total = self.cards.count_filtered(&predicate).await?;
        let rows = self
            .cards
            .list_filtered(&predicate, page.limit(), page.offset())
            .await?;

        let items = if rows.is_empty() { Vec::new() } else { map_card_rows(rows)? };

        tracing::debug!(
            filters = filters.len(),
            total,
            page = page.page_number,
            "Listed cards"
        );
        Ok(Paginate::new(page, total, items))
    }

    pub async fn search_by_text(&self, text: &str, limit: i64) -> Result<Vec<Card>, ServiceError> {
        let rows = self
            .cards
            .search_by_text(text, clamp_search_limit(limit))
            .await?;
        if rows.is_empty() {
            return Ok(Vec::new());
        }
        Ok(map_card_rows(rows)?)
    }

    /// Create a card after checking its references, then read it back
    pub async fn create(&self, input: &CreateCardRequest) -> Result<Card, ServiceError> {
        if self.node_types.get_by_id(input.node_type_id).await?.is_none() {
            return Err(ServiceError::NotFound(format!(
                "NodeType with id {} not found",
                input.node_type_id
            )));
        }

        let missing = self
            .characteristics
            .find_missing_ids(&input.characteristic_ids())
            .await?;
        if !missing.is_empty() {
            return Err(ServiceError::InvalidReference {
                field: "characteristics".to_string(),
                message: format!("these IDs don't exist: {:?}", missing),
            });
        }

        let id = self.cards.create(input).await?;
        self.get_by_id(id).await
    }
}
