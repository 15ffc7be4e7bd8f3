use std::{sync::Arc, time::Duration};

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::ResponseCache,
    config::{
        Config, DEFAULT_API_TITLE, DEFAULT_APP_VERSION, DEFAULT_CACHE_LIFETIME_SECS,
        DEFAULT_DEBTOR_MESSAGE_TEMPLATE, DEFAULT_PATH_NOT_REQUIRE_AUTH,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub cache: ResponseCache,
    pub options: Arc<AppOptions>,
}

/// Settings the request handlers need at runtime
#[derive(Debug, Clone)]
pub struct AppOptions {
    pub api_title: String,
    pub api_version: String,
    /// Lifetime of cached GET responses
    pub cache_lifetime: Duration,
    pub debtor_message_template: String,
    pub auth: AuthOptions,
}

/// Settings of the Basic authentication middleware
#[derive(Debug, Clone)]
pub struct AuthOptions {
    /// Paths served without credentials, sub-paths included
    pub exempt_paths: Vec<String>,
    /// Accepted value of the `x-api-key` header, the header is refused when unset
    pub api_key: Option<String>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            api_title: DEFAULT_API_TITLE.to_string(),
            api_version: DEFAULT_APP_VERSION.to_string(),
            cache_lifetime: Duration::from_secs(DEFAULT_CACHE_LIFETIME_SECS),
            debtor_message_template: DEFAULT_DEBTOR_MESSAGE_TEMPLATE.to_string(),
            auth: AuthOptions {
                exempt_paths: DEFAULT_PATH_NOT_REQUIRE_AUTH
                    .split(',')
                    .map(str::to_string)
                    .collect(),
                api_key: None,
            },
        }
    }
}

impl From<&Config> for AppOptions {
    fn from(config: &Config) -> Self {
        Self {
            api_title: config.api_title.clone(),
            api_version: config.app_version.clone(),
            cache_lifetime: Duration::from_secs(config.cache_lifetime_secs),
            debtor_message_template: config.debtor_message_template.clone(),
            auth: AuthOptions {
                exempt_paths: config.path_not_require_auth.clone(),
                api_key: config.api_key.clone(),
            },
        }
    }
}

/// State with an in-process cache and default options, used by tests
impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self {
            db,
            cache: ResponseCache::memory(),
            options: Arc::new(AppOptions::default()),
        }
    }
}
