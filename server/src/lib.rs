use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use engine::{FileSource, SearchSession};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

mod render;

pub use render::{HtmlSink, Templates};

#[derive(Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Clone)]
pub struct AppState {
    pub session: Arc<SearchSession<FileSource>>,
    pub templates: Arc<Templates>,
}

/// Assemble the router. The index artifact is not touched here; the first
/// search request triggers the one-time load.
pub fn build_app(artifact: PathBuf, templates: Templates) -> Router {
    let state = AppState {
        session: Arc::new(SearchSession::new(FileSource::new(artifact))),
        templates: Arc::new(templates),
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_from_env())
}

/// GET /search?q=... renders the outcome as an HTML page. An unavailable
/// index answers 503 on this and every later request; search stays disabled
/// for the lifetime of the process.
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Html<String>, (StatusCode, String)> {
    let mut sink = HtmlSink::new(state.templates.clone());
    match state.session.dispatch(&params.q, &mut sink) {
        Ok(()) => Ok(Html(sink.into_page())),
        Err(err) => Err((StatusCode::SERVICE_UNAVAILABLE, err.to_string())),
    }
}

// CORS: read CORS_ALLOW_ORIGIN (comma-separated) or allow Any by default.
fn cors_from_env() -> CorsLayer {
    let origins: Vec<_> = match std::env::var("CORS_ALLOW_ORIGIN") {
        Ok(val) => val.split(',').filter_map(|s| s.trim().parse().ok()).collect(),
        Err(_) => Vec::new(),
    };
    if origins.is_empty() {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
