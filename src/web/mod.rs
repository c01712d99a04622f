//! Web front end for Duck Attire.
//!
//! Serves a server-rendered configurator page plus a small JSON API over the
//! same catalog and handler path the terminal UI uses. The server keeps no
//! per-visitor state: every request replays its query through a fresh
//! [`Configurator`].
//!
//! # Endpoints
//!
//! - `GET /health` - Health check
//! - `GET /api/catalog` - List garments and presets
//! - `GET /api/catalog/{type}` - One garment entry
//! - `GET /api/gallery` - Gallery cards
//! - `GET /api/view` - Render snapshot for the same query as `/`
//! - `GET /` - Configurator page (`?type=&color=&size=&view=&preset=&action=&changed=`)
//! - `GET /static/{*path}` - Embedded stylesheet

pub mod page;
pub mod static_files;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::configurator::Configurator;
use crate::models::{ComboPreset, GarmentEntry, Selection, View};
use crate::render::{GalleryCard, RecordingTarget, RenderTarget};
use crate::services::gallery_cards;

pub use page::HtmlPage;

// ============================================================================
// Application State
// ============================================================================

/// Shared application state for the web server.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    config: Arc<Config>,
    /// Garment catalog (immutable after load)
    catalog: Arc<Catalog>,
}

impl AppState {
    /// Creates a new application state from a loaded catalog.
    #[must_use]
    pub fn new(config: Config, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }

    fn configurator(&self) -> Configurator {
        Configurator::new(
            Arc::clone(&self.catalog),
            self.config.images.clone(),
            self.config.ui.start_view,
        )
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

/// Catalog listing.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Garments in catalog order.
    pub garments: Vec<GarmentEntry>,
    /// Curated combinations in gallery order.
    pub presets: Vec<ComboPreset>,
}

/// Gallery listing.
#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    /// Cards in gallery order.
    pub cards: Vec<GalleryCard>,
}

/// Render snapshot after replaying a query.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    /// Selection after the replay.
    pub selection: Selection,
    /// Visible view.
    pub view: View,
    /// Everything written to the render target.
    pub render: RecordingTarget,
    /// Notice emitted by a preview action, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Page and view query.
#[derive(Debug, Default, Deserialize)]
pub struct ViewQuery {
    /// Garment type key.
    #[serde(rename = "type")]
    pub garment_type: Option<String>,
    /// Color key.
    pub color: Option<String>,
    /// Size key.
    pub size: Option<String>,
    /// View to show ("gallery" or "customize").
    pub view: Option<String>,
    /// Gallery preset index to apply.
    pub preset: Option<usize>,
    /// Button pressed ("preview" or "reset").
    pub action: Option<String>,
    /// Dropdown that triggered the submit ("type", "color", or "size").
    pub changed: Option<String>,
}

/// API error response.
#[derive(Debug, Serialize)]
pub struct ApiError {
    /// Error message.
    pub error: String,
}

impl ApiError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// Replays a query through the handlers in the order a visitor would click.
///
/// A preset replaces the dropdown values. When `changed` names a dropdown,
/// the values that depend on it are stale form fields and are skipped.
/// Preview notices are returned.
fn replay(
    configurator: &mut Configurator,
    query: &ViewQuery,
    target: &mut dyn RenderTarget,
) -> Option<String> {
    configurator.initialize(target);

    if let Some(index) = query.preset {
        configurator.activate_preset(index, target);
    } else {
        let changed = query.changed.as_deref();
        let keep_color = changed != Some("type");
        let keep_size = keep_color && changed != Some("color");

        if let Some(value) = &query.garment_type {
            configurator.handle_garment_type_change(value, target);
        }
        if let Some(value) = query.color.as_ref().filter(|_| keep_color) {
            configurator.handle_color_change(value, target);
        }
        if let Some(value) = query.size.as_ref().filter(|_| keep_size) {
            configurator.handle_size_change(value, target);
        }
    }

    if let Some(view) = &query.view {
        configurator.switch_view(view, target);
    }

    match query.action.as_deref() {
        Some("reset") => {
            configurator.reset_all(target);
            None
        }
        Some("preview") => configurator.preview(target),
        _ => None,
    }
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

/// GET /api/catalog - List garments and presets.
async fn list_catalog(State(state): State<AppState>) -> Json<CatalogResponse> {
    Json(CatalogResponse {
        garments: state.catalog.garments().to_vec(),
        presets: state.catalog.presets().to_vec(),
    })
}

/// GET /api/catalog/{type} - Look up one garment.
async fn get_garment(
    State(state): State<AppState>,
    Path(garment_type): Path<String>,
) -> Result<Json<GarmentEntry>, (StatusCode, Json<ApiError>)> {
    state
        .catalog
        .lookup_garment(&garment_type)
        .cloned()
        .map(Json)
        .ok_or_else(|| {
            (
                StatusCode::NOT_FOUND,
                Json(ApiError::new(format!("Garment type not found: {garment_type}"))),
            )
        })
}

/// GET /api/gallery - Gallery cards.
async fn list_gallery(State(state): State<AppState>) -> Json<GalleryResponse> {
    Json(GalleryResponse {
        cards: gallery_cards(&state.catalog, &state.config.images),
    })
}

/// GET /api/view - Render snapshot for a query.
async fn get_view(
    State(state): State<AppState>,
    Query(query): Query<ViewQuery>,
) -> Json<ViewResponse> {
    let mut configurator = state.configurator();
    let mut target = RecordingTarget::new();
    let notice = replay(&mut configurator, &query, &mut target);

    Json(ViewResponse {
        selection: configurator.selection().clone(),
        view: configurator.visible_view(),
        render: target,
        notice,
    })
}

/// GET / - Server-rendered configurator page.
async fn index(State(state): State<AppState>, Query(query): Query<ViewQuery>) -> Html<String> {
    let mut configurator = state.configurator();
    let mut page = HtmlPage::new();
    replay(&mut configurator, &query, &mut page);
    Html(page.into_document())
}

// ============================================================================
// Router
// ============================================================================

/// Creates the router with every route and middleware layer.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/catalog", get(list_catalog))
        .route("/api/catalog/{garment_type}", get(get_garment))
        .route("/api/gallery", get(list_gallery))
        .route("/api/view", get(get_view))
        .route("/static/{*path}", get(static_files::serve_static))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Loads the catalog and serves until the listener fails.
pub async fn run_server(config: Config, addr: SocketAddr) -> anyhow::Result<()> {
    let catalog = Catalog::load()?;
    let state = AppState::new(config, catalog);
    let app = create_router(state);

    info!("Starting web server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
