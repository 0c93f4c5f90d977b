use std::sync::Arc;

use crate::api::dto::{CreateNodeTypeRequest, UpdateNodeTypeRequest};
use crate::database::models::{NodeType, Paginate};
use crate::database::repository::NodeTypeRepository;
use crate::pagination::PageRequest;
use crate::services::error::ServiceError;

pub struct NodeTypeService {
    repo: Arc<dyn NodeTypeRepository>,
    default_page_size: i64,
}

impl NodeTypeService {
    pub fn new(repo: Arc<dyn NodeTypeRepository>, default_page_size: i64) -> Self {
        Self { repo, default_page_size }
    }

    pub async fn list(
        &self,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Paginate<NodeType>, ServiceError> {
        let page = PageRequest::normalize(page_number, page_size, self.default_page_size);
        let total = self.repo.count().await?;
        let items = self.repo.list(page.limit(), page.offset()).await?;
        Ok(Paginate::new(page, total, items))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<NodeType, ServiceError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("NodeType with id {} not found", id)))
    }

    pub async fn create(&self, input: &CreateNodeTypeRequest) -> Result<NodeType, ServiceError> {
        let id = self.repo.create(input).await?;
        self.get_by_id(id).await
    }

    pub async fn update(&self, input: &UpdateNodeTypeRequest) -> Result<NodeType, ServiceError> {
        if self.repo.update(input).await? == 0 {
            return Err(ServiceError::NotFound(format!("NodeType with id {} not found", input.id)));
        }
        self.get_by_id(input.id).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.repo.delete(id).await? == 0 {
            return Err(ServiceError::NotFound(format!("NodeType with id {} not found", id)));
        }
        Ok(())
    }
}
