//! Web API module for HueGrid.
//!
//! This module exposes the palette core, the theme library and the prompt
//! generator over a small REST API.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `POST /api/grid` - Render a grid from a configuration
//! - `GET /api/random` - Sample a random configuration
//! - `GET /api/themes` - List saved themes, newest first
//! - `POST /api/themes` - Save a theme
//! - `GET /api/themes/{id}` - Get one saved theme
//! - `DELETE /api/themes/{id}` - Delete a saved theme
//! - `POST /api/generate` - Generate a theme from a prompt

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::models::{GridConfig, SavedTheme, ThemeSuggestion};
use crate::palette::{random_config, RenderedGrid};
use crate::services::{GeminiAdapter, JsonThemeLibrary, PromptToThemeAdapter, ThemeLibraryStore};

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web API.
#[derive(Clone)]
pub struct AppState {
    /// Theme library
    library: Arc<Mutex<Box<dyn ThemeLibraryStore>>>,
    /// Prompt-to-theme adapter; `None` when no API key is configured
    adapter: Option<Arc<dyn PromptToThemeAdapter>>,
    /// Held while a generation request is in flight
    generation_lock: Arc<tokio::sync::Mutex<()>>,
}

impl AppState {
    /// Creates a new application state from configuration.
    ///
    /// A missing API key disables `/api/generate` instead of failing.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let library = JsonThemeLibrary::from_config(config)?;
        info!("Theme library: {}", library.path().display());

        let adapter = match GeminiAdapter::from_config(&config.generator) {
            Ok(adapter) => Some(Arc::new(adapter) as Arc<dyn PromptToThemeAdapter>),
            Err(e) => {
                warn!("Theme generation disabled: {e}");
                None
            }
        };

        Ok(Self::with_services(Box::new(library), adapter))
    }

    /// Creates a new application state with explicit services.
    #[must_use]
    pub fn with_services(
        library: Box<dyn ThemeLibraryStore>,
        adapter: Option<Arc<dyn PromptToThemeAdapter>>,
    ) -> Self {
        Self {
            library: Arc::new(Mutex::new(library)),
            adapter,
            generation_lock: Arc::new(tokio::sync::Mutex::new(())),
        }
    }

    /// Runs `f` with exclusive access to the library.
    fn with_library<T>(
        &self,
        f: impl FnOnce(&mut dyn ThemeLibraryStore) -> anyhow::Result<T>,
    ) -> Result<T, (StatusCode, Json<ApiError>)> {
        let mut library = self.library.lock().map_err(|_| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new("Theme library lock poisoned")),
            )
        })?;
        f(&mut **library).map_err(|e| {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::with_details("Theme library error", format!("{e:#}"))),
            )
        })
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Current health status (e.g., "healthy").
    pub status: String,
    /// Application version.
    pub version: String,
}

/// Theme list response.
#[derive(Debug, Serialize)]
pub struct ThemeListResponse {
    /// Saved themes, newest first.
    pub themes: Vec<SavedTheme>,
}

/// Theme save request.
#[derive(Debug, Deserialize)]
pub struct CreateThemeRequest {
    /// Display name.
    pub name: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Configuration to save.
    pub config: GridConfig,
}

/// Theme generation request.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    /// Mood or concept to describe.
    pub prompt: String,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
    /// Optional additional details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

type ApiResult<T> = Result<T, (StatusCode, Json<ApiError>)>;

fn bad_request(error: impl Into<String>) -> (StatusCode, Json<ApiError>) {
    (StatusCode::BAD_REQUEST, Json(ApiError::new(error)))
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /health - Health check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /api/grid - Render the grid for a configuration.
async fn render_grid(Json(config): Json<GridConfig>) -> ApiResult<Json<RenderedGrid>> {
    config.check_size().map_err(|e| bad_request(e.to_string()))?;
    Ok(Json(RenderedGrid::from_grid(&config.generate())))
}

/// GET /api/random - Sample a random configuration.
async fn random() -> Json<GridConfig> {
    Json(random_config())
}

/// GET /api/themes - List saved themes.
async fn list_themes(State(state): State<AppState>) -> ApiResult<Json<ThemeListResponse>> {
    let themes = state.with_library(|library| library.list())?;
    Ok(Json(ThemeListResponse { themes }))
}

/// POST /api/themes - Save a theme.
async fn create_theme(
    State(state): State<AppState>,
    Json(request): Json<CreateThemeRequest>,
) -> ApiResult<(StatusCode, Json<SavedTheme>)> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(bad_request("Theme name cannot be empty"));
    }
    request.config.check_size().map_err(|e| bad_request(e.to_string()))?;

    let theme = state.with_library(|library| {
        library.save(name, request.description.trim(), request.config)
    })?;
    info!("Saved theme {} ({})", theme.name, theme.id);
    Ok((StatusCode::CREATED, Json(theme)))
}

/// GET /api/themes/{id} - Get one saved theme.
async fn get_theme(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<SavedTheme>> {
    state
        .with_library(|library| library.get(&id))?
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new(format!("Theme not found: {id}"))),
            )
        })
}

/// DELETE /api/themes/{id} - Delete a saved theme. Unknown ids succeed.
async fn delete_theme(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    state.with_library(|library| library.delete(&id))?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/generate - Generate a theme from a prompt.
///
/// Only one request runs at a time; overlapping requests get 409.
async fn generate_theme(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> ApiResult<Json<ThemeSuggestion>> {
    let prompt = request.prompt.trim();
    if prompt.is_empty() {
        return Err(bad_request("Prompt cannot be empty"));
    }

    let adapter = state.adapter.as_ref().ok_or_else(|| {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ApiError::new("Theme generation is not configured")),
        )
    })?;

    let _guard = state.generation_lock.try_lock().map_err(|_| {
        (
            StatusCode::CONFLICT,
            Json(ApiError::new("A theme is already being generated")),
        )
    })?;

    let suggestion = adapter.generate(prompt).await.map_err(|e| {
        warn!("Theme generation failed: {e}");
        (
            StatusCode::BAD_GATEWAY,
            Json(ApiError::with_details("Theme generation failed", e.to_string())),
        )
    })?;

    Ok(Json(suggestion.sanitized()))
}

// ============================================================================
// Router Setup
// ============================================================================

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    // Permissive CORS: the server is meant to run locally next to a browser front-end
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/api/grid", post(render_grid))
        .route("/api/random", get(random))
        .route("/api/themes", get(list_themes).post(create_theme))
        .route("/api/themes/{id}", get(get_theme).delete(delete_theme))
        .route("/api/generate", post(generate_theme))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Runs the web server.
///
/// # Errors
///
/// Returns an error if the server fails to start.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let state = AppState::new(&config)?;
    let app = create_router(state);

    info!("Starting HueGrid web server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
