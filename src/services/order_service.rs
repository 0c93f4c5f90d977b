use serde::Serialize;
use uuid::Uuid;

use crate::api::dto::OrderLine;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Uuid,
}

/// Accepts validated order submissions. Orders are not stored.
#[derive(Debug, Default)]
pub struct OrderService;

impl OrderService {
    pub fn new() -> Self {
        Self
    }

    pub fn place(&self, lines: &[OrderLine]) -> OrderReceipt {
        let order_id = Uuid::new_v4();
        let units: i64 = lines.iter().map(|l| i64::from(l.amount)).sum();
        tracing::info!(%order_id, lines = lines.len(), units, "Order accepted");
        OrderReceipt { order_id }
    }
}
