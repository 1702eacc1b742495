//! Authenticated insight endpoints: filter definitions, preview, prospect
//! search, lead creation, login validation, and account metadata.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use prospector_core::types::{Company, QueryClause, RawCompany, DEFAULT_MAX_EMPLOYEES};

use crate::fixtures::apply_clauses;

use super::AppState;

const DEFAULT_TAKE: usize = 25;

#[derive(Debug, Deserialize)]
pub(super) struct PageQuery {
    skip: Option<usize>,
    take: Option<usize>,
}

/// `GET /api/insight/filters` — the filter definitions the UI can offer.
pub(super) async fn get_filters() -> Json<Value> {
    Json(json!({
        "filters": [
            { "category": "address", "type": "text", "options": [] },
            {
                "category": "branch",
                "type": "select",
                "options": ["Technology", "Finance", "Healthcare", "Manufacturing", "Retail"]
            },
            { "category": "city", "type": "text", "options": [] },
            { "category": "employees", "type": "range", "min": 0, "max": DEFAULT_MAX_EMPLOYEES }
        ]
    }))
}

/// `POST /api/insight/filters` — lightweight preview of a clause list.
pub(super) async fn preview_filters(
    State(state): State<AppState>,
    Json(clauses): Json<Vec<QueryClause>>,
) -> Json<Value> {
    let matched = apply_clauses(&state.companies, &clauses);
    Json(json!({
        "previewCount": matched.len(),
        "totalAvailable": state.companies.len(),
    }))
}

/// `POST /api/insight/prospects?skip=&take=` — full search with pagination.
pub(super) async fn search_prospects(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
    Json(clauses): Json<Vec<QueryClause>>,
) -> Json<Vec<RawCompany>> {
    let matched = apply_clauses(&state.companies, &clauses);
    let skip = page.skip.unwrap_or(0);
    let take = page.take.unwrap_or(DEFAULT_TAKE);

    tracing::debug!(
        clauses = clauses.len(),
        matched = matched.len(),
        skip,
        take,
        "prospect search"
    );

    Json(matched.into_iter().skip(skip).take(take).collect())
}

/// `POST /api/insight/leads` — records nothing; reports full success for the
/// whole batch, the way the real backend's happy path does.
pub(super) async fn create_leads(Json(companies): Json<Vec<Company>>) -> Json<Value> {
    tracing::info!(count = companies.len(), "creating leads");
    Json(json!({
        "success": true,
        "leadsCreated": companies.len(),
        "message": "Companies successfully added to prospects",
    }))
}

/// `GET /api/insight/validatelogin` — reaching this handler means the auth
/// middleware already accepted the credentials.
pub(super) async fn validate_login() -> Json<Value> {
    Json(json!({
        "valid": true,
        "message": "Authentication successful",
    }))
}

/// `GET /api/insight/account` — static account/quota metadata.
pub(super) async fn account_details() -> Json<Value> {
    Json(json!({
        "clientId": "demo_client",
        "accountType": "Premium",
        "searchesRemaining": 9500,
        "expiryDate": "2026-12-31",
        "features": ["Advanced Search", "Export", "API Access"],
    }))
}
