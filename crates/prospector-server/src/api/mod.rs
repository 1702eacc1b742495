mod information;
mod insight;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use prospector_core::types::RawCompany;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, require_basic_auth, BasicAuthState};

#[derive(Clone)]
pub struct AppState {
    pub companies: Arc<Vec<RawCompany>>,
}

impl AppState {
    #[must_use]
    pub fn new(companies: Vec<RawCompany>) -> Self {
        Self {
            companies: Arc::new(companies),
        }
    }
}

/// Builds the full mock API router.
///
/// Insight routes sit behind Basic auth; the landing page and the 404
/// fallback do not.
pub fn build_app(state: AppState, auth: BasicAuthState) -> Router {
    let insight = Router::new()
        .route(
            "/filters",
            get(insight::get_filters).post(insight::preview_filters),
        )
        .route("/prospects", post(insight::search_prospects))
        .route("/leads", post(insight::create_leads))
        .route("/validatelogin", get(insight::validate_login))
        .route("/account", get(insight::account_details))
        .route_layer(axum::middleware::from_fn_with_state(
            auth,
            require_basic_auth,
        ));

    Router::new()
        .nest("/api/insight", insight)
        .route(
            "/api/information/landingpage",
            get(information::landing_page),
        )
        .fallback(not_found)
        .layer(axum::middleware::from_fn(request_id))
        .layer(build_cors())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "message": "API endpoint not found",
            "path": uri.path(),
        })),
    )
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            HeaderName::from_static("x-request-id"),
        ])
}
