//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both the CLI and the
//! HTTP API. `PublishService` is generic over its store; AppState pins it to
//! the SQLite implementation.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use pagesmith_core::generation::sanitizer::OutputSanitizer;
use pagesmith_core::generation::service::GenerationService;
use pagesmith_core::site::service::PublishService;
use pagesmith_infra::backend::create_backend;
use pagesmith_infra::config::{load_global_config, resolve_data_dir};
use pagesmith_infra::credentials::api_key_from_env;
use pagesmith_infra::sqlite::pool::{DatabasePool, default_database_path};
use pagesmith_infra::sqlite::site::SqliteSiteStore;
use pagesmith_types::config::GlobalConfig;

pub type ConcretePublishService = PublishService<SqliteSiteStore>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub publish_service: Arc<ConcretePublishService>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state: load config, open the DB, build the backend.
    ///
    /// A missing credential does not fail startup. The generation service
    /// keeps the configuration error and reports it per request.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        let db_pool = DatabasePool::open(&default_database_path(&data_dir)).await?;
        let api_key = api_key_from_env(config.generation.backend);

        Ok(Self::from_parts(config, data_dir, db_pool, api_key))
    }

    /// Wire services from already-resolved parts.
    pub fn from_parts(
        config: GlobalConfig,
        data_dir: PathBuf,
        db_pool: DatabasePool,
        api_key: Option<SecretString>,
    ) -> Self {
        let backend = create_backend(&config.generation, api_key);
        let sanitizer = OutputSanitizer::new(config.generation.resolved_sanitizer());
        let generation_service = GenerationService::new(backend, sanitizer);

        let publish_service = PublishService::new(SqliteSiteStore::new(db_pool.clone()));

        Self {
            generation_service: Arc::new(generation_service),
            publish_service: Arc::new(publish_service),
            config: Arc::new(config),
            data_dir,
            db_pool,
        }
    }
}
