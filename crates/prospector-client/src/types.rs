//! Response payload types for the provider endpoints.

use serde::{Deserialize, Serialize};

/// Response to `GET /api/insight/filters`: the filter definitions the
/// provider currently supports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterDefinitions {
    pub filters: Vec<FilterDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterDefinition {
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub min: Option<u32>,
    #[serde(default)]
    pub max: Option<u32>,
}

/// Response to `POST /api/insight/filters` (the lightweight preview).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterPreview {
    pub preview_count: usize,
    pub total_available: usize,
}

/// Response to `POST /api/insight/leads`.
///
/// The batch is all-or-nothing as far as this shape can express: partial
/// success of individual companies is not modeled by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadReceipt {
    pub success: bool,
    pub leads_created: usize,
    #[serde(default)]
    pub message: String,
}

/// Response to `GET /api/insight/validatelogin`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginStatus {
    pub valid: bool,
    #[serde(default)]
    pub message: String,
}

/// Response to `GET /api/insight/account`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountDetails {
    pub client_id: String,
    pub account_type: String,
    pub searches_remaining: i64,
    pub expiry_date: String,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Response to `GET /api/information/landingpage` (unauthenticated).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LandingPage {
    pub welcome_text: String,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub description: String,
}
