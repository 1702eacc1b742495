//! Unauthenticated information endpoints.

use axum::Json;
use serde_json::{json, Value};

/// `GET /api/information/landingpage` — static marketing copy, no auth.
pub(super) async fn landing_page() -> Json<Value> {
    Json(json!({
        "welcomeText": "Welcome to the Company Prospector Tool!\n\n\
            This prospecting platform helps you discover and analyze potential \
            business partners. Set your search criteria using the filters, then \
            apply them to find companies that match your requirements. Save \
            promising prospects to your selection list for further analysis \
            and outreach.",
        "features": [
            "Real-time company data",
            "Advanced search filters",
            "Export functionality",
            "CRM integration",
            "Regular data updates"
        ],
        "description": "Your gateway to business intelligence and prospecting success",
    }))
}
