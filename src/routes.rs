use axum::{
    extract::State,
    http::{HeaderValue, Method, StatusCode},
    middleware::from_fn_with_state,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::{AppConfig, SecurityConfig};
use crate::handlers;
use crate::middleware::limit_query_params;
use crate::state::AppState;

/// Full application router with global middleware
pub fn app(state: AppState, config: &AppConfig) -> Router {
    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Catalog API
        .merge(card_routes())
        .merge(node_routes())
        .merge(node_type_routes())
        .merge(characteristic_routes())
        .merge(selector_routes())
        .merge(size_routes())
        .merge(order_routes())
        // Global middleware
        .layer(from_fn_with_state(state.clone(), limit_query_params))
        .layer(cors_layer(&config.security))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn card_routes() -> Router<AppState> {
    use handlers::cards;

    Router::new()
        .route("/api/cards", get(cards::list).post(cards::create))
        .route("/api/cards/search", post(cards::search))
        .route("/api/cards/:id", get(cards::get))
}

fn node_routes() -> Router<AppState> {
    use axum::routing::delete;
    use handlers::nodes;

    Router::new()
        .route("/api/nodes", get(nodes::list).post(nodes::create).put(nodes::update))
        .route("/api/nodes/:id", delete(nodes::delete))
}

fn node_type_routes() -> Router<AppState> {
    use axum::routing::delete;
    use handlers::node_types;

    Router::new()
        .route(
            "/api/node-types",
            get(node_types::list)
                .post(node_types::create)
                .put(node_types::update),
        )
        .route("/api/node-types/:id", delete(node_types::delete))
}

fn characteristic_routes() -> Router<AppState> {
    use axum::routing::delete;
    use handlers::characteristics;

    Router::new()
        .route(
            "/api/characteristics",
            get(characteristics::list)
                .post(characteristics::create)
                .put(characteristics::update),
        )
        .route("/api/characteristics/filters", get(characteristics::filters))
        .route("/api/characteristics/:id", delete(characteristics::delete))
}

fn selector_routes() -> Router<AppState> {
    use handlers::selectors;

    Router::new()
        .route(
            "/api/selectors",
            get(selectors::list)
                .post(selectors::create)
                .put(selectors::update),
        )
        .route("/api/selectors/:id", get(selectors::get).delete(selectors::delete))
}

fn size_routes() -> Router<AppState> {
    use axum::routing::delete;
    use handlers::sizes;

    Router::new()
        .route("/api/sizes", get(sizes::list).post(sizes::create).put(sizes::update))
        .route("/api/sizes/:id", delete(sizes::delete))
}

fn order_routes() -> Router<AppState> {
    use handlers::orders;

    Router::new().route("/api/orders", post(orders::create))
}

fn cors_layer(security: &SecurityConfig) -> CorsLayer {
    if !security.enable_cors {
        return CorsLayer::new();
    }
    // Empty origin list means any origin
    if security.cors_origins.is_empty() {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE, Method::OPTIONS])
        .allow_headers(Any)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Shop Catalog API",
            "version": version,
            "description": "Product catalog backend: cards, nodes, characteristics, sizes and orders",
            "endpoints": {
                "cards": "/api/cards[/:id], /api/cards/search",
                "nodes": "/api/nodes[/:id]",
                "node_types": "/api/node-types[/:id]",
                "characteristics": "/api/characteristics[/:id], /api/characteristics/filters",
                "selectors": "/api/selectors[/:id]",
                "sizes": "/api/sizes[/:id]",
                "orders": "/api/orders",
                "health": "/health"
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.health.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "error": true,
                    "message": "Database unavailable",
                    "code": "SERVICE_UNAVAILABLE",
                    "data": {
                        "status": "degraded",
                        "timestamp": now
                    }
                })),
            )
        }
    }
}
