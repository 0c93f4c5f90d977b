use std::collections::HashMap;
use std::sync::Arc;

use crate::api::dto::{CreateCharacteristicRequest, UpdateCharacteristicRequest};
use crate::database::models::{Characteristic, CharacteristicFilter, CharacteristicFilterRow, Paginate};
use crate::database::repository::CharacteristicRepository;
use crate::pagination::PageRequest;
use crate::services::error::ServiceError;

pub struct CharacteristicService {
    repo: Arc<dyn CharacteristicRepository>,
    default_page_size: i64,
}

impl CharacteristicService {
    pub fn new(repo: Arc<dyn CharacteristicRepository>, default_page_size: i64) -> Self {
        Self { repo, default_page_size }
    }

    pub async fn list(
        &self,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Paginate<Characteristic>, ServiceError> {
        let page = PageRequest::normalize(page_number, page_size, self.default_page_size);
        let total = self.repo.count().await?;
        let items = self.repo.list(page.limit(), page.offset()).await?;
        Ok(Paginate::new(page, total, items))
    }

    async fn read_back(&self, id: i32) -> Result<Characteristic, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Characteristic with id {} not found", id)))
    }

    pub async fn create(&self, input: &CreateCharacteristicRequest) -> Result<Characteristic, ServiceError> {
        let id = self.repo.create(input).await?;
        self.read_back(id).await
    }

    pub async fn update(&self, input: &UpdateCharacteristicRequest) -> Result<Characteristic, ServiceError> {
        if self.repo.update(input).await? == 0 {
            return Err(ServiceError::NotFound(format!(
                "Characteristic with id {} not found",
                input.id
            )));
        }
        self.read_back(input.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? == 0 {
            return Err(ServiceError::NotFound(format!("Characteristic with id {} not found", id)));
        }
        Ok(())
    }

    /// Visible characteristics with their default values, for building filter UIs
    pub async fn filters(&self) -> Result<Vec<CharacteristicFilter>, ServiceError> {
        let rows = self.repo.filter_rows().await?;
        Ok(group_filter_rows(rows))
    }
}

pub(crate) fn group_filter_rows(rows: Vec<CharacteristicFilterRow>) -> Vec<CharacteristicFilter> {
    let mut filters: Vec<CharacteristicFilter> = Vec::new();
    let mut index: HashMap<i32, usize> = HashMap::new();

    for row in rows {
        let i = *index.entry(row.id).or_insert_with(|| {
            filters.push(CharacteristicFilter {
                characteristic_id: row.id,
                title: row.title.clone(),
                description: row.description.clone(),
                values: Vec::new(),
            });
            filters.len() - 1
        });

        if let Some(value) = row.value {
            filters[i].values.push(value);
        }
    }

    filters
}
