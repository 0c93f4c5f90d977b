use std::sync::Arc;

use crate::api::dto::{CreateSizeRequest, UpdateSizeRequest};
use crate::database::models::{Paginate, Size};
use crate::database::repository::SizeRepository;
use crate::pagination::PageRequest;
use crate::services::error::ServiceError;

pub struct SizeService {
    repo: Arc<dyn SizeRepository>,
    default_page_size: i64,
}

impl SizeService {
    pub fn new(repo: Arc<dyn SizeRepository>, default_page_size: i64) -> Self {
        Self { repo, default_page_size }
    }

    pub async fn list(
        &self,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Paginate<Size>, ServiceError> {
        let page = PageRequest::normalize(page_number, page_size, self.default_page_size);
        let total = self.repo.count().await?;
        let items = self.repo.list(page.limit(), page.offset()).await?;
        Ok(Paginate::new(page, total, items))
    }

    async fn read_back(&self, id: i32) -> Result<Size, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Size with id {} not found", id)))
    }

    pub async fn create(&self, input: &CreateSizeRequest) -> Result<Size, ServiceError> {
        let id = self.repo.create(input).await?;
        self.read_back(id).await
    }

    pub async fn update(&self, input: &UpdateSizeRequest) -> Result<Size, ServiceError> {
        if self.repo.update(input).await? == 0 {
            return Err(ServiceError::NotFound(format!("Size with id {} not found", input.id)));
        }
        self.read_back(input.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? == 0 {
            return Err(ServiceError::NotFound(format!("Size with id {} not found", id)));
        }
        Ok(())
    }
}
