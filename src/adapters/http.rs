use crate::adapters::storage::LocalStorage;
use crate::config::ServerConfig;
use crate::core::engine::SummaryEngine;
use crate::utils::error::{ResultsError, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use std::future::Future;
use std::sync::Arc;
use tokio::net::TcpListener;

pub const SUMMARY_ROUTE: &str = "/results/summary";

pub struct AppState {
    engine: SummaryEngine<LocalStorage>,
}

impl AppState {
    pub fn new(config: &ServerConfig) -> Self {
        Self {
            engine: SummaryEngine::new(LocalStorage::new(config.data_path.clone())),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(SUMMARY_ROUTE, get(results_summary))
        .with_state(state)
}

async fn results_summary(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    tracing::info!("GET {}", SUMMARY_ROUTE);
    tracing::info!(
        "Data path: {}",
        state.engine.storage().base_path().display()
    );

    let report = state.engine.run().await;
    let status = StatusCode::from_u16(report.verdict.http_status())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (status, Json(report.body))
}

/// Binds `config.bind_addr` and serves until `shutdown` resolves.
pub async fn serve<F>(config: &ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| ResultsError::ServerError {
            message: format!("bind {} failed: {}", config.bind_addr, e),
        })?;
    serve_on(listener, config, shutdown).await
}

/// Serves on an already bound listener, e.g. one bound to port 0.
pub async fn serve_on<F>(listener: TcpListener, config: &ServerConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    let app = router(Arc::new(AppState::new(config)));

    tracing::info!("Adelphi results API listening at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ResultsError::ServerError {
            message: e.to_string(),
        })?;

    tracing::info!("Adelphi results API stopped");
    Ok(())
}
