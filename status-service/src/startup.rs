//! Application startup and lifecycle management.

use crate::config::StatusConfig;
use crate::handlers;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use crate::services::providers::TextProvider;
use crate::services::Db;
use axum::http::{header, Method};
use axum::middleware::from_fn;
use axum::{
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use service_core::middleware::tracing::request_id_middleware;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: StatusConfig,
    pub db: Db,
    pub text_provider: Arc<dyn TextProvider>,
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: StatusConfig) -> Result<Self, AppError> {
        let db = Db::connect(&config.supabase.url, config.supabase.api_key.clone());

        let text_provider: Arc<dyn TextProvider> =
            Arc::new(GeminiTextProvider::new(GeminiConfig {
                api_key: config.genai.api_key.clone(),
                model: config.genai.model.clone(),
                api_base: config.genai.api_base.clone(),
            }));
        tracing::info!(model = %config.genai.model, "Initialized text provider");

        let state = AppState {
            config: config.clone(),
            db,
            text_provider,
        };

        let app = build_router(state);

        // Port 0 binds a random port for testing.
        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/users", post(handlers::create_user))
        .route("/users/:username", get(handlers::get_user))
        .route(
            "/users/:username/status",
            get(handlers::list_status)
                .post(handlers::create_status)
                .put(handlers::update_status),
        )
        // The admin console writes through the singular prefix; kept as an
        // alias for it.
        .route(
            "/user/:username/status",
            post(handlers::create_status).put(handlers::update_status),
        )
        .route("/users/:username/transform", post(handlers::transform_text))
        .with_state(state)
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                let request_id = request
                    .headers()
                    .get("x-request-id")
                    .and_then(|value| value.to_str().ok())
                    .unwrap_or("-");

                tracing::info_span!(
                    "http_request",
                    request_id = %request_id,
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(from_fn(request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
}
