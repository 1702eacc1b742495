//! Wire and domain types shared by the client, the mock server, and the CLI.
//!
//! The provider API speaks camelCase JSON with a handful of idiosyncratic
//! field names (`filterCategory`, `SelectOption`, `SelectRange`); the serde
//! renames below match that wire format exactly.

use serde::{Deserialize, Serialize};

/// Upper bound of the employee range filter. A criteria whose range still
/// spans `0..=DEFAULT_MAX_EMPLOYEES` carries no employee constraint.
pub const DEFAULT_MAX_EMPLOYEES: u32 = 1000;

/// User-entered search criteria. Transient: rebuilt on each edit, owned by
/// the active search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub address: String,
    pub branch: String,
    pub city: String,
    pub min_employees: u32,
    pub max_employees: u32,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            address: String::new(),
            branch: String::new(),
            city: String::new(),
            min_employees: 0,
            max_employees: DEFAULT_MAX_EMPLOYEES,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterCategory {
    Address,
    Branch,
    City,
    Employees,
}

/// Inclusive employee-count bounds. Both ends are optional on the wire; the
/// server substitutes `0` and [`DEFAULT_MAX_EMPLOYEES`] for missing ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRange {
    pub min: Option<u32>,
    pub max: Option<u32>,
}

/// One normalized filter condition as sent to the search endpoint.
///
/// Exactly one of `select_option` / `select_range` is populated; the
/// constructors below enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryClause {
    #[serde(rename = "filterCategory")]
    pub filter_category: FilterCategory,
    #[serde(
        rename = "SelectOption",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub select_option: Option<Vec<String>>,
    #[serde(
        rename = "SelectRange",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub select_range: Option<EmployeeRange>,
}

impl QueryClause {
    /// An option-list clause (address, branch, or city).
    #[must_use]
    pub fn options(category: FilterCategory, values: Vec<String>) -> Self {
        Self {
            filter_category: category,
            select_option: Some(values),
            select_range: None,
        }
    }

    /// An employee-range clause carrying the literal bounds.
    #[must_use]
    pub fn employee_range(min: u32, max: u32) -> Self {
        Self {
            filter_category: FilterCategory::Employees,
            select_option: None,
            select_range: Some(EmployeeRange {
                min: Some(min),
                max: Some(max),
            }),
        }
    }
}

/// A company record as the provider returns it: every field except `name`
/// may be absent. Never handed to callers directly — the client normalizes
/// it into a [`Company`] first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawCompany {
    pub name: String,
    pub organisation_number: Option<String>,
    pub description: Option<String>,
    pub employees: Option<u32>,
    pub turn_over: Option<u64>,
    pub legal_entity: Option<String>,
    pub vat_number: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub post_code: Option<String>,
    pub city: Option<String>,
    pub branch: Option<String>,
    pub founded: Option<String>,
}

/// The canonical company shape. Produced by the result normalizer, immutable
/// once built, and superseded wholesale on each new search.
///
/// `id` is the organisation number when present, otherwise a 1-based
/// positional fallback within the page it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub organisation_number: String,
    pub description: String,
    pub employees: u32,
    pub turn_over: u64,
    pub legal_entity: String,
    pub vat_number: String,
    pub phone: String,
    pub address: String,
    pub post_code: String,
    pub city: String,
    pub branch: String,
    pub status: String,
    pub founded: String,
}
