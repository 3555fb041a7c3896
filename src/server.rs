//! Axum preview server: catalog index, component previews, JSON discovery.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
};
use leptos::prelude::*;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::catalog::{self, ComponentEntry, HeroCenteredParams, HeroSplitParams};
use crate::config::AppConfig;
use crate::ui::app::{CatalogPage, PreviewPage};

/// Application state shared across all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration.
    pub config: Arc<AppConfig>,
}

/// Build the preview router.
pub fn router(state: AppState) -> Router {
    let static_dir = state.config.preview.static_dir.clone();

    Router::new()
        .route("/", get(catalog_index))
        .route("/preview/hero-split", get(preview_hero_split))
        .route("/preview/hero-centered", get(preview_hero_centered))
        .route("/api/components", get(api_components))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    for entry in catalog::entries() {
        info!(
            name: "catalog.component.registered",
            slug = %entry.slug,
            variants = entry.variants.len(),
            "Catalog component registered"
        );
    }

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let app = router(AppState {
        config: Arc::clone(&config),
    });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!(
        name: "server.started",
        address = %format!("http://{addr}"),
        "Preview server started"
    );

    axum::serve(listener, app).await?;
    Ok(())
}

/// Catalog index page.
async fn catalog_index(State(state): State<AppState>) -> impl IntoResponse {
    let title = state.config.preview.catalog_title.clone();
    Html(view! { <CatalogPage title=title/> }.to_html())
}

/// HeroSplit preview; query parameters override props.
async fn preview_hero_split(Query(params): Query<HeroSplitParams>) -> impl IntoResponse {
    preview_page(&catalog::HERO_SPLIT, params.view())
}

/// HeroCentered preview; query parameters override props.
async fn preview_hero_centered(Query(params): Query<HeroCenteredParams>) -> impl IntoResponse {
    preview_page(&catalog::HERO_CENTERED, params.view())
}

/// Discovery endpoint: the full registry as JSON, so external tools can
/// enumerate components, props, defaults, and variants.
async fn api_components() -> impl IntoResponse {
    Json(catalog::entries())
}

fn preview_page(entry: &'static ComponentEntry, component: impl IntoView + 'static) -> Html<String> {
    Html(
        view! { <PreviewPage entry=entry>{component}</PreviewPage> }.to_html(),
    )
}
