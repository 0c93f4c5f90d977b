use std::sync::Arc;

use crate::api::dto::{CreateNodeRequest, UpdateNodeRequest};
use crate::database::models::{Node, Paginate};
use crate::database::repository::{NodeRepository, NodeTypeRepository};
use crate::database::Repositories;
use crate::pagination::PageRequest;
use crate::services::error::ServiceError;

pub struct NodeService {
    nodes: Arc<dyn NodeRepository>,
    node_types: Arc<dyn NodeTypeRepository>,
    default_page_size: i64,
}

impl NodeService {
    pub fn new(repos: &Repositories, default_page_size: i64) -> Self {
        Self {
            nodes: repos.nodes.clone(),
            node_types: repos.node_types.clone(),
            default_page_size,
        }
    }

    pub async fn list(
        &self,
        page_number: Option<i64>,
        page_size: Option<i64>,
    ) -> Result<Paginate<Node>, ServiceError> {
        let page = PageRequest::normalize(page_number, page_size, self.default_page_size);
        let total = self.nodes.count().await?;
        let items = self.nodes.list(page.limit(), page.offset()).await?;
        Ok(Paginate::new(page, total, items))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Node, ServiceError> {
        self.nodes
            .get_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Node with id {} not found", id)))
    }

    async fn ensure_node_type(&self, node_type_id: i32) -> Result<(), ServiceError> {
        match self.node_types.get_by_id(node_type_id).await? {
            Some(_) => Ok(()),
            None => Err(ServiceError::NotFound(format!(
                "NodeType with id {} not found",
                node_type_id
            ))),
        }
    }

    pub async fn create(&self, input: &CreateNodeRequest) -> Result<Node, ServiceError> {
        self.ensure_node_type(input.node_type_id).await?;
        let id = self.nodes.create(input).await?;
        self.get_by_id(id).await
    }

    pub async fn update(&self, input: &UpdateNodeRequest) -> Result<Node, ServiceError> {
        self.get_by_id(input.id).await?;
        self.ensure_node_type(input.node_type_id).await?;
        self.nodes.update(input).await?;
        self.get_by_id(input.id).await
    }

    /// Soft delete; the node keeps its row with `removed_at` set
    pub async fn delete(&self, id: i32) -> Result<(), ServiceError> {
        if self.nodes.soft_delete(id).await? == 0 {
            return Err(ServiceError::NotFound(format!("Node with id {} not found", id)));
        }
        Ok(())
    }
}
