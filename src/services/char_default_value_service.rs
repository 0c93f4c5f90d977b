use std::sync::Arc;

use crate::api::dto::{CreateCharDefaultValueRequest, UpdateCharDefaultValueRequest};
use crate::database::models::{CharDefaultValue, Paginate};
use crate::database::repository::{CharDefaultValueRepository, CharacteristicRepository};
use crate::database::Repositories;
use crate::pagination::PageRequest;
use crate::services::error::ServiceError;

/// Default values offered as selector options for a characteristic
pub struct CharDefaultValueService {
    values: Arc<dyn CharDefaultValueRepository>,
    characteristics: Arc<dyn CharacteristicRepository>,
    default_page_size: i64,
}

impl CharDefaultValueService {
    pub fn new(repos: &Repositories, default_page_size: i64) -> Self {
        Self {
            values: repos.char_default_values.clone(),
            characteristics: repos.characteristics.clone(),
            default_page_size,
        }
    }

    pub async fn list(
        &self,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Paginate<CharDefaultValue>, ServiceError> {
        let page = PageRequest::normalize(page_number, page_size, self.default_page_size);
        let total = self.values.count().await?;
        let items = self.values.list(page.limit(), page.offset()).await?;
        Ok(Paginate::new(page, total, items))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<CharDefaultValue, ServiceError> {
        self.values
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Selector with id {} not found", id)))
    }

    pub async fn create(&self, input: &CreateCharDefaultValueRequest) -> Result<CharDefaultValue, ServiceError> {
        if self.characteristics.get_by_id(input.characteristic_id).await?.is_none() {
            return Err(ServiceError::InvalidReference {
                field: "characteristicId".to_string(),
                message: format!("Characteristic with id {} not found", input.characteristic_id),
            });
        }

        let id = self.values.create(input).await?;
        self.get_by_id(id).await
    }

    pub async fn update(&self, input: &UpdateCharDefaultValueRequest) -> Result<CharDefaultValue, ServiceError> {
        if self.values.update(input).await? == 0 {
            return Err(ServiceError::NotFound(format!("Selector with id {} not found", input.id)));
        }
        self.get_by_id(input.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.values.delete(id).await? == 0 {
            return Err(ServiceError::NotFound(format!("Selector with id {} not found", id)));
        }
        Ok(())
    }
}
