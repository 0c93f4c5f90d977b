use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::{HealthCheck, Repositories};
use crate::services::{
    CardService, CharDefaultValueService, CharacteristicService, NodeService, NodeTypeService,
    OrderService, SizeService,
};

/// Shared handler state: one instance of every service plus the health check
#[derive(Clone)]
pub struct AppState {
    pub cards: Arc<CardService>,
    pub nodes: Arc<NodeService>,
    pub node_types: Arc<NodeTypeService>,
    pub characteristics: Arc<CharacteristicService>,
    pub selectors: Arc<CharDefaultValueService>,
    pub sizes: Arc<SizeService>,
    pub orders: Arc<OrderService>,
    pub health: Arc<dyn HealthCheck>,
    pub max_query_params: usize,
}

impl AppState {
    pub fn new(repos: Repositories, health: Arc<dyn HealthCheck>, config: &AppConfig) -> Self {
        let page_size = config.catalog.default_page_size;

        Self {
            cards: Arc::new(CardService::new(&repos, config.catalog.default_card_page_size)),
            nodes: Arc::new(NodeService::new(&repos, page_size)),
            node_types: Arc::new(NodeTypeService::new(repos.node_types.clone(), page_size)),
            characteristics: Arc::new(CharacteristicService::new(repos.characteristics.clone(), page_size)),
            selectors: Arc::new(CharDefaultValueService::new(&repos, page_size)),
            sizes: Arc::new(SizeService::new(repos.sizes.clone(), page_size)),
            orders: Arc::new(OrderService::new()),
            health,
            max_query_params: config.server.max_query_params,
        }
    }
}
