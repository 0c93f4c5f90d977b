use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub catalog: CatalogConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Staging,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    /// Requests carrying more query parameters than this are rejected
    pub max_query_params: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Connection string; `None` until DATABASE_URL (or POSTGRES_URI) is set
    pub url: Option<String>,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connection_timeout: u64,
    pub max_lifetime_secs: u64,
    pub health_check_interval_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub default_page_size: i64,
    pub default_card_page_size: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub enable_cors: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let environment = match env::var("APP_ENV").as_deref() {
            Ok("production") | Ok("prod") => Environment::Production,
            Ok("staging") | Ok("stage") => Environment::Staging,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Staging => Self::staging(),
            Environment::Development => Self::development(),
        }
        .with_env_overrides()
    }

    fn with_env_overrides(mut self) -> Self {
        // Server overrides
        if let Some(port) = env::var("SERV_PORT")
            .ok()
            .or_else(|| env::var("PORT").ok())
            .and_then(|v| v.parse().ok())
        {
            self.server.port = port;
        }
        if let Ok(v) = env::var("API_MAX_QUERY_PARAMS") {
            self.server.max_query_params = v.parse().unwrap_or(self.server.max_query_params);
        }

        // Database overrides
        if let Ok(v) = env::var("DATABASE_URL").or_else(|_| env::var("POSTGRES_URI")) {
            if !v.trim().is_empty() {
                self.database.url = Some(v);
            }
        }
        if let Ok(v) = env::var("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }
        if let Ok(v) = env::var("DATABASE_MIN_CONNECTIONS") {
            self.database.min_connections = v.parse().unwrap_or(self.database.min_connections);
        }
        if let Ok(v) = env::var("DATABASE_CONNECTION_TIMEOUT") {
            self.database.connection_timeout = v.parse().unwrap_or(self.database.connection_timeout);
        }
        if let Ok(v) = env::var("DATABASE_MAX_LIFETIME_SECS") {
            self.database.max_lifetime_secs = v.parse().unwrap_or(self.database.max_lifetime_secs);
        }
        if let Ok(v) = env::var("DATABASE_HEALTH_CHECK_INTERVAL_SECS") {
            self.database.health_check_interval_secs =
                v.parse().unwrap_or(self.database.health_check_interval_secs);
        }

        // Catalog overrides
        if let Ok(v) = env::var("CATALOG_DEFAULT_PAGE_SIZE") {
            self.catalog.default_page_size = v.parse().unwrap_or(self.catalog.default_page_size);
        }
        if let Ok(v) = env::var("CATALOG_DEFAULT_CARD_PAGE_SIZE") {
            self.catalog.default_card_page_size =
                v.parse().unwrap_or(self.catalog.default_card_page_size);
        }

        // Security overrides
        if let Ok(v) = env::var("SECURITY_ENABLE_CORS") {
            self.security.enable_cors = v.parse().unwrap_or(self.security.enable_cors);
        }
        if let Ok(v) = env::var("SECURITY_CORS_ORIGINS") {
            self.security.cors_origins = v
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Pool sizing sanity: min never exceeds max
        if self.database.min_connections > self.database.max_connections {
            self.database.min_connections = self.database.max_connections;
        }

        self
    }

    pub fn development() -> Self {
        Self {
            environment: Environment::Development,
            server: ServerConfig {
                port: 3000,
                max_query_params: 30,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 15,
                min_connections: 2,
                connection_timeout: 5,
                max_lifetime_secs: 60 * 60,
                health_check_interval_secs: 15,
            },
            catalog: CatalogConfig {
                default_page_size: 10,
                default_card_page_size: 50,
            },
            security: SecurityConfig {
                enable_cors: true,
                // Empty list means any origin
                cors_origins: vec![],
            },
        }
    }

    fn staging() -> Self {
        Self {
            environment: Environment::Staging,
            server: ServerConfig {
                port: 3000,
                max_query_params: 30,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 15,
                min_connections: 7,
                connection_timeout: 5,
                max_lifetime_secs: 60 * 60,
                health_check_interval_secs: 15,
            },
            catalog: CatalogConfig {
                default_page_size: 10,
                default_card_page_size: 50,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://staging.example.com".to_string()],
            },
        }
    }

    pub fn production() -> Self {
        Self {
            environment: Environment::Production,
            server: ServerConfig {
                port: 3000,
                max_query_params: 30,
            },
            database: DatabaseConfig {
                url: None,
                max_connections: 30,
                min_connections: 7,
                connection_timeout: 5,
                max_lifetime_secs: 60 * 60,
                health_check_interval_secs: 15,
            },
            catalog: CatalogConfig {
                default_page_size: 10,
                default_card_page_size: 50,
            },
            security: SecurityConfig {
                enable_cors: true,
                cors_origins: vec!["https://shop.example.com".to_string()],
            },
        }
    }
}

// Global read-only config - initialized once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(AppConfig::from_env);

// Convenience function for accessing config
pub fn config() -> &'static AppConfig {
    &CONFIG
}
