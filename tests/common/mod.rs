#![allow(dead_code)]

use std::process::{Child, Command, Stdio};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;
use tower::ServiceExt;

use shop_catalog_api::api::dto::{
    CreateCardRequest, CreateCharDefaultValueRequest, CreateCharacteristicRequest,
    CreateNodeRequest, CreateNodeTypeRequest, CreateSizeRequest, UpdateCharDefaultValueRequest,
    UpdateCharacteristicRequest, UpdateNodeRequest, UpdateNodeTypeRequest, UpdateSizeRequest,
};
use shop_catalog_api::config::AppConfig;
use shop_catalog_api::database::models::{
    CardRow, CharDefaultValue, Characteristic, CharacteristicFilterRow, Node, NodeType, Size,
};
use shop_catalog_api::database::repository::{
    CardRepository, CharDefaultValueRepository, CharacteristicRepository, NodeRepository,
    NodeTypeRepository, SizeRepository,
};
use shop_catalog_api::database::{DatabaseError, HealthCheck, Repositories};
use shop_catalog_api::filter::SqlResult;
use shop_catalog_api::routes;
use shop_catalog_api::state::AppState;

// ---------------------------------------------------------------------------
// In-memory catalog
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct StoredNode {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub node_type_id: i32,
    pub images: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub removed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct StoredValue {
    pub id: i32,
    pub node_id: i32,
    pub characteristic_id: i32,
    pub value: String,
    pub add_params: Option<Value>,
}

#[derive(Debug, Clone)]
pub struct StoredDefault {
    pub id: i32,
    pub characteristic_id: i32,
    pub value: String,
}

#[derive(Debug, Default)]
pub struct Store {
    pub node_types: Vec<NodeType>,
    pub nodes: Vec<StoredNode>,
    pub characteristics: Vec<Characteristic>,
    pub values: Vec<StoredValue>,
    pub defaults: Vec<StoredDefault>,
    pub sizes: Vec<Size>,
    /// Predicate passed to the most recent count_filtered call
    pub last_predicate: Option<SqlResult>,
    /// Limit passed to the most recent search_by_text call
    pub last_search_limit: Option<i64>,
    next_id: i32,
}

impl Store {
    fn next_id(&mut self) -> i32 {
        self.next_id += 1;
        self.next_id
    }

    /// Rows shaped like the catalog join. `label` picks the node type label over
    /// its id; `keep_bare` emits one null-characteristic row for a node without values.
    fn card_rows(&self, node: &StoredNode, label: bool, keep_bare: bool) -> Vec<CardRow> {
        let node_type = self.node_types.iter().find(|t| t.id == node.node_type_id);
        let node_type_name = if label {
            node_type.map(|t| t.type_name.clone()).unwrap_or_default()
        } else {
            node.node_type_id.to_string()
        };

        let row = |ch: Option<(&Characteristic, &StoredValue)>| CardRow {
            node_id: node.id,
            title: node.title.clone(),
            node_description: node.description.clone(),
            created_at: node.created_at,
            updated_at: node.updated_at,
            removed_at: node.removed_at,
            images: node.images.clone(),
            node_type: node_type_name.clone(),
            node_type_description: node_type.and_then(|t| t.description.clone()),
            characteristic: ch.map(|(c, _)| c.title.clone()),
            characteristic_value: ch.map(|(_, v)| v.value.clone()),
            additional_params: ch.and_then(|(_, v)| v.add_params.as_ref().map(|p| p.to_string())),
            characteristic_description: ch.and_then(|(c, _)| c.description.clone()),
        };

        let mut rows: Vec<CardRow> = self
            .values
            .iter()
            .filter(|v| v.node_id == node.id)
            .filter_map(|v| {
                self.characteristics
                    .iter()
                    .find(|c| c.id == v.characteristic_id)
                    .map(|c| row(Some((c, v))))
            })
            .collect();

        if rows.is_empty() && keep_bare {
            rows.push(row(None));
        }
        rows
    }

    fn nodes_with_values(&self) -> Vec<StoredNode> {
        let mut nodes: Vec<StoredNode> = self
            .nodes
            .iter()
            .filter(|n| self.values.iter().any(|v| v.node_id == n.id))
            .cloned()
            .collect();
        nodes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        nodes
    }
}

pub fn timestamp(id: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::seconds(i64::from(id))
}

fn page<T: Clone>(items: &[T], limit: i64, offset: i64) -> Vec<T> {
    items
        .iter()
        .skip(offset.max(0) as usize)
        .take(limit.max(0) as usize)
        .cloned()
        .collect()
}

/// Fake implementing every repository trait over one shared store
#[derive(Clone, Default)]
pub struct FakeCatalog {
    pub store: Arc<Mutex<Store>>,
}

impl FakeCatalog {
    pub fn repositories(&self) -> Repositories {
        Repositories {
            cards: Arc::new(self.clone()),
            nodes: Arc::new(self.clone()),
            node_types: Arc::new(self.clone()),
            characteristics: Arc::new(self.clone()),
            char_default_values: Arc::new(self.clone()),
            sizes: Arc::new(self.clone()),
        }
    }

    pub fn add_node_type(&self, type_name: &str) -> i32 {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.node_types.push(NodeType {
            id,
            type_name: type_name.to_string(),
            description: None,
        });
        id
    }

    pub fn add_characteristic(&self, title: &str, is_visible: bool) -> i32 {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.characteristics.push(Characteristic {
            id,
            title: title.to_string(),
            description: None,
            is_visible,
        });
        id
    }

    pub fn add_default(&self, characteristic_id: i32, value: &str) -> i32 {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.defaults.push(StoredDefault {
            id,
            characteristic_id,
            value: value.to_string(),
        });
        id
    }

    pub fn add_size(&self, title: &str) -> i32 {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.sizes.push(Size {
            id,
            title: title.to_string(),
            description: None,
        });
        id
    }

    /// Seed a node with `(characteristic_id, value)` pairs
    pub fn add_node(&self, title: &str, node_type_id: i32, values: &[(i32, &str)]) -> i32 {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.nodes.push(StoredNode {
            id,
            title: title.to_string(),
            description: None,
            node_type_id,
            images: vec![format!("{}.jpg", id)],
            created_at: timestamp(id),
            updated_at: timestamp(id),
            removed_at: None,
        });
        for (characteristic_id, value) in values {
            let value_id = store.next_id();
            store.values.push(StoredValue {
                id: value_id,
                node_id: id,
                characteristic_id: *characteristic_id,
                value: value.to_string(),
                add_params: None,
            });
        }
        id
    }

    pub fn node(&self, id: i32) -> Option<StoredNode> {
        self.store.lock().unwrap().nodes.iter().find(|n| n.id == id).cloned()
    }
}

#[async_trait]
impl CardRepository for FakeCatalog {
    async fn count_filtered(&self, predicate: &SqlResult) -> Result<i64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        store.last_predicate = Some(predicate.clone());
        Ok(store.nodes_with_values().len() as i64)
    }

    async fn list_filtered(
        &self,
        _predicate: &SqlResult,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<CardRow>, DatabaseError> {
        let store = self.store.lock().unwrap();
        let nodes = page(&store.nodes_with_values(), limit, offset);
        Ok(nodes
            .iter()
            .flat_map(|n| store.card_rows(n, false, false))
            .collect())
    }

    async fn get_by_id(&self, id: i32) -> Result<Vec<CardRow>, DatabaseError> {
        let store = self.store.lock().unwrap();
        Ok(store
            .nodes
            .iter()
            .find(|n| n.id == id)
            .map(|n| store.card_rows(n, true, true))
            .unwrap_or_default())
    }

    async fn search_by_text(&self, text: &str, limit: i64) -> Result<Vec<CardRow>, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        store.last_search_limit = Some(limit);

        let needle = text.to_lowercase();
        let matches: Vec<StoredNode> = store
            .nodes_with_values()
            .into_iter()
            .filter(|n| n.title.to_lowercase().contains(&needle))
            .collect();
        Ok(page(&matches, limit, 0)
            .iter()
            .flat_map(|n| store.card_rows(n, true, false))
            .collect())
    }

    async fn create(&self, card: &CreateCardRequest) -> Result<i32, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.nodes.push(StoredNode {
            id,
            title: card.title.clone(),
            description: card.node_description.clone(),
            node_type_id: card.node_type_id,
            images: card.images.clone(),
            created_at: timestamp(id),
            updated_at: timestamp(id),
            removed_at: None,
        });
        for ch in &card.characteristics {
            let value_id = store.next_id();
            store.values.push(StoredValue {
                id: value_id,
                node_id: id,
                characteristic_id: ch.id,
                value: ch.value.clone(),
                add_params: ch.additional_params.clone().filter(|p| !p.is_null()),
            });
        }
        Ok(id)
    }
}

fn to_node(n: &StoredNode) -> Node {
    Node {
        id: n.id,
        title: n.title.clone(),
        description: n.description.clone(),
        node_type_id: n.node_type_id,
        created_at: n.created_at,
        updated_at: n.updated_at,
        removed_at: n.removed_at,
    }
}

#[async_trait]
impl NodeRepository for FakeCatalog {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Node>, DatabaseError> {
        let store = self.store.lock().unwrap();
        let mut nodes: Vec<Node> = store.nodes.iter().map(to_node).collect();
        nodes.sort_by_key(|n| n.id);
        Ok(page(&nodes, limit, offset))
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        Ok(self.store.lock().unwrap().nodes.len() as i64)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Node>, DatabaseError> {
        Ok(self.node(id).as_ref().map(to_node))
    }

    async fn create(&self, input: &CreateNodeRequest) -> Result<i32, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.nodes.push(StoredNode {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            node_type_id: input.node_type_id,
            images: vec![],
            created_at: timestamp(id),
            updated_at: timestamp(id),
            removed_at: None,
        });
        Ok(id)
    }

    async fn update(&self, input: &UpdateNodeRequest) -> Result<u64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        match store.nodes.iter_mut().find(|n| n.id == input.id) {
            Some(node) => {
                node.title = input.title.clone();
                node.node_type_id = input.node_type_id;
                node.description = input.description.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn soft_delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        match store.nodes.iter_mut().find(|n| n.id == id) {
            Some(node) => {
                node.removed_at = Some(Utc::now());
                Ok(1)
            }
            None => Ok(0),
        }
    }
}

#[async_trait]
impl NodeTypeRepository for FakeCatalog {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<NodeType>, DatabaseError> {
        let store = self.store.lock().unwrap();
        Ok(page(&store.node_types, limit, offset))
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        Ok(self.store.lock().unwrap().node_types.len() as i64)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<NodeType>, DatabaseError> {
        let store = self.store.lock().unwrap();
        Ok(store.node_types.iter().find(|t| t.id == id).cloned())
    }

    async fn create(&self, input: &CreateNodeTypeRequest) -> Result<i32, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.node_types.push(NodeType {
            id,
            type_name: input.type_name.clone(),
            description: input.description.clone(),
        });
        Ok(id)
    }

    async fn update(&self, input: &UpdateNodeTypeRequest) -> Result<u64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        match store.node_types.iter_mut().find(|t| t.id == input.id) {
            Some(t) => {
                t.type_name = input.type_name.clone();
                t.description = input.description.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        let before = store.node_types.len();
        store.node_types.retain(|t| t.id != id);
        Ok((before - store.node_types.len()) as u64)
    }
}

#[async_trait]
impl CharacteristicRepository for FakeCatalog {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Characteristic>, DatabaseError> {
        let store = self.store.lock().unwrap();
        Ok(page(&store.characteristics, limit, offset))
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        Ok(self.store.lock().unwrap().characteristics.len() as i64)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Characteristic>, DatabaseError> {
        let store = self.store.lock().unwrap();
        Ok(store.characteristics.iter().find(|c| c.id == id).cloned())
    }

    async fn create(&self, input: &CreateCharacteristicRequest) -> Result<i32, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.characteristics.push(Characteristic {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
            is_visible: true,
        });
        Ok(id)
    }

    async fn update(&self, input: &UpdateCharacteristicRequest) -> Result<u64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        match store.characteristics.iter_mut().find(|c| c.id == input.id) {
            Some(c) => {
                c.title = input.title.clone();
                c.description = input.description.clone();
                c.is_visible = input.is_visible;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        let before = store.characteristics.len();
        store.characteristics.retain(|c| c.id != id);
        Ok((before - store.characteristics.len()) as u64)
    }

    async fn find_missing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DatabaseError> {
        let store = self.store.lock().unwrap();
        Ok(ids
            .iter()
            .copied()
            .filter(|id| !store.characteristics.iter().any(|c| c.id == *id))
            .collect())
    }

    async fn filter_rows(&self) -> Result<Vec<CharacteristicFilterRow>, DatabaseError> {
        let store = self.store.lock().unwrap();
        let mut rows = Vec::new();
        for c in store.characteristics.iter().filter(|c| c.is_visible) {
            let defaults: Vec<&StoredDefault> = store
                .defaults
                .iter()
                .filter(|d| d.characteristic_id == c.id)
                .collect();
            if defaults.is_empty() {
                rows.push(CharacteristicFilterRow {
                    id: c.id,
                    title: c.title.clone(),
                    description: c.description.clone(),
                    value: None,
                });
            }
            for d in defaults {
                rows.push(CharacteristicFilterRow {
                    id: c.id,
                    title: c.title.clone(),
                    description: c.description.clone(),
                    value: Some(d.value.clone()),
                });
            }
        }
        Ok(rows)
    }
}

#[async_trait]
impl CharDefaultValueRepository for FakeCatalog {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<CharDefaultValue>, DatabaseError> {
        let store = self.store.lock().unwrap();
        let joined: Vec<CharDefaultValue> = store
            .defaults
            .iter()
            .filter_map(|d| {
                store
                    .characteristics
                    .iter()
                    .find(|c| c.id == d.characteristic_id)
                    .map(|c| CharDefaultValue {
                        id: d.id,
                        characteristic_id: d.characteristic_id,
                        title: c.title.clone(),
                        value: d.value.clone(),
                    })
            })
            .collect();
        Ok(page(&joined, limit, offset))
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        Ok(self.store.lock().unwrap().defaults.len() as i64)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<CharDefaultValue>, DatabaseError> {
        let store = self.store.lock().unwrap();
        Ok(store.defaults.iter().find(|d| d.id == id).and_then(|d| {
            store
                .characteristics
                .iter()
                .find(|c| c.id == d.characteristic_id)
                .map(|c| CharDefaultValue {
                    id: d.id,
                    characteristic_id: d.characteristic_id,
                    title: c.title.clone(),
                    value: d.value.clone(),
                })
        }))
    }

    async fn create(&self, input: &CreateCharDefaultValueRequest) -> Result<i32, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.defaults.push(StoredDefault {
            id,
            characteristic_id: input.characteristic_id,
            value: input.value.clone(),
        });
        Ok(id)
    }

    async fn update(&self, input: &UpdateCharDefaultValueRequest) -> Result<u64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        match store.defaults.iter_mut().find(|d| d.id == input.id) {
            Some(d) => {
                d.value = input.value.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        let before = store.defaults.len();
        store.defaults.retain(|d| d.id != id);
        Ok((before - store.defaults.len()) as u64)
    }
}

#[async_trait]
impl SizeRepository for FakeCatalog {
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Size>, DatabaseError> {
        let store = self.store.lock().unwrap();
        let mut sizes = store.sizes.clone();
        sizes.sort_by(|a, b| b.title.cmp(&a.title));
        Ok(page(&sizes, limit, offset))
    }

    async fn count(&self) -> Result<i64, DatabaseError> {
        Ok(self.store.lock().unwrap().sizes.len() as i64)
    }

    async fn get_by_id(&self, id: i32) -> Result<Option<Size>, DatabaseError> {
        let store = self.store.lock().unwrap();
        Ok(store.sizes.iter().find(|s| s.id == id).cloned())
    }

    async fn create(&self, input: &CreateSizeRequest) -> Result<i32, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        let id = store.next_id();
        store.sizes.push(Size {
            id,
            title: input.title.clone(),
            description: input.description.clone(),
        });
        Ok(id)
    }

    async fn update(&self, input: &UpdateSizeRequest) -> Result<u64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        match store.sizes.iter_mut().find(|s| s.id == input.id) {
            Some(s) => {
                s.title = input.title.clone();
                s.description = input.description.clone();
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: i32) -> Result<u64, DatabaseError> {
        let mut store = self.store.lock().unwrap();
        let before = store.sizes.len();
        store.sizes.retain(|s| s.id != id);
        Ok((before - store.sizes.len()) as u64)
    }
}

pub struct FakeHealth {
    pub healthy: bool,
}

#[async_trait]
impl HealthCheck for FakeHealth {
    async fn ping(&self) -> Result<(), DatabaseError> {
        if self.healthy {
            Ok(())
        } else {
            Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut))
        }
    }
}

// ---------------------------------------------------------------------------
// Router harness
// ---------------------------------------------------------------------------

pub fn test_app() -> (Router, FakeCatalog) {
    test_app_with_health(true)
}

pub fn test_app_with_health(healthy: bool) -> (Router, FakeCatalog) {
    let catalog = FakeCatalog::default();
    let config = AppConfig::development();
    let state = AppState::new(catalog.repositories(), Arc::new(FakeHealth { healthy }), &config);
    (routes::app(state, &config), catalog)
}

/// Drive one request through the router and decode the JSON body (Null when empty)
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "POST", uri, Some(body)).await
}

pub async fn put(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    send(app, "PUT", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, "DELETE", uri, None).await
}

// ---------------------------------------------------------------------------
// Live server (only when DATABASE_URL is set)
// ---------------------------------------------------------------------------

pub struct LiveServer {
    pub base_url: String,
    child: Child,
}

impl LiveServer {
    /// Migrate the database and spawn the server binary on a free port
    pub async fn start() -> Result<Self> {
        let binary = env!("CARGO_BIN_EXE_shop-catalog-api");

        let status = Command::new(binary)
            .arg("migrate")
            .status()
            .context("failed to run migrations")?;
        anyhow::ensure!(status.success(), "migrate exited with {}", status);

        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let child = Command::new(binary)
            .args(["serve", "--port", &port.to_string()])
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .context("failed to spawn server binary")?;

        let server = Self {
            base_url: format!("http://127.0.0.1:{}", port),
            child,
        };
        server.wait_ready(Duration::from_secs(10)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                if resp.status() == reqwest::StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }
}

impl Drop for LiveServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
