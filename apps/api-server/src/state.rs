//! Application state - shared across all handlers.

use std::sync::Arc;

use post_core::PostService;
use post_core::ports::PostRepository;
use post_infra::{DatabaseConfig, InMemoryPostRepository, SystemClock};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<PostService>,
}

impl AppState {
    /// Build the application state with the configured storage backend.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let repo = Self::build_repository(db_config).await;
        tracing::info!("Application state initialized");
        Self::with_repository(repo)
    }

    /// State backed by a fresh in-memory collection.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryPostRepository::new()))
    }

    fn with_repository(repo: Arc<dyn PostRepository>) -> Self {
        Self {
            posts: Arc::new(PostService::new(repo, Arc::new(SystemClock::new()))),
        }
    }

    #[cfg(feature = "postgres")]
    async fn build_repository(db_config: Option<&DatabaseConfig>) -> Arc<dyn PostRepository> {
        use post_infra::PostgresPostRepository;

        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            return Arc::new(InMemoryPostRepository::new());
        };

        match post_infra::database::connect(config).await {
            Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database: {}. Using in-memory fallback.",
                    e
                );
                Arc::new(InMemoryPostRepository::new())
            }
        }
    }

    #[cfg(not(feature = "postgres"))]
    async fn build_repository(db_config: Option<&DatabaseConfig>) -> Arc<dyn PostRepository> {
        if db_config.is_some() {
            tracing::warn!("DATABASE_URL ignored: built without the postgres feature");
        }
        tracing::info!("Running without postgres feature - using in-memory repository");
        Arc::new(InMemoryPostRepository::new())
    }
}
