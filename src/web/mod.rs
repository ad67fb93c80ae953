mod error;
mod extract;
mod method_override;
pub mod pages;
mod routes;

pub use error::{ApiError, AppError};
pub use method_override::METHOD_OVERRIDE_HEADER;

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, RwLockReadGuard, RwLockWriteGuard};

use anyhow::{anyhow, Context, Result};
use axum::middleware;
use axum::Router;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;
use crate::store::{PostStore, SharedStore};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub config: Arc<Config>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Config, store: PostStore) -> Self {
        Self {
            store: store.into_shared(),
            config: Arc::new(config),
        }
    }

    /// Take the store for reading. Never hold the guard across an `.await`.
    ///
    /// # Errors
    ///
    /// Returns an error if a previous holder panicked and poisoned the lock.
    pub fn read_store(&self) -> Result<RwLockReadGuard<'_, PostStore>> {
        self.store
            .read()
            .map_err(|_| anyhow!("post store lock poisoned"))
    }

    /// Take the store for writing. Never hold the guard across an `.await`.
    ///
    /// # Errors
    ///
    /// Returns an error if a previous holder panicked and poisoned the lock.
    pub fn write_store(&self) -> Result<RwLockWriteGuard<'_, PostStore>> {
        self.store
            .write()
            .map_err(|_| anyhow!("post store lock poisoned"))
    }
}

/// Start the web server and run until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the address is invalid or the listener fails.
pub async fn serve<F>(state: AppState, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let config = Arc::clone(&state.config);
    let addr: SocketAddr = format!("{}:{}", config.web_host, config.web_port)
        .parse()
        .context("Invalid web server address")?;

    let app = create_app(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind web server")?;

    info!(addr = %addr, "Starting HTTP web server");
    info!("View posts at: http://localhost:{}/posts", config.web_port);
    info!("Create a post at: http://localhost:{}/posts/new", config.web_port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Web server error")?;

    Ok(())
}

/// Create the main application router.
///
/// The method override has to see requests before routing does, so the real
/// routes sit behind a catch-all fallback and the override wraps that.
pub fn create_app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();
    info!(static_dir = ?static_dir, "Serving static files");

    let routes = routes::router()
        .nest_service("/static", ServeDir::new(&static_dir))
        .fallback(routes::not_found)
        .with_state(state);

    Router::new()
        .fallback_service(routes)
        .layer(middleware::from_fn(method_override::method_override))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}
