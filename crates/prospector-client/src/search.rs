//! Paged prospect search: criteria → clauses → transport → normalization.

use prospector_core::query::to_clauses;
use prospector_core::types::{Company, FilterCriteria};
use serde::Serialize;

use crate::client::ProspectorClient;
use crate::error::ProspectorError;
use crate::normalize::normalize;

/// One page of normalized search results.
///
/// `total_count` is the length of this page, not a grand total across all
/// pages — the provider's search endpoint reports no overall match count.
/// Callers wanting an overall figure use the preview endpoint instead.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProspectPage {
    pub companies: Vec<Company>,
    pub total_count: usize,
}

/// Skip/take offsets for repeated searches over the same criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    pub skip: usize,
    pub take: usize,
    /// Count reported by the most recent page fetch; 0 before any fetch.
    pub total_available: usize,
}

impl PageState {
    #[must_use]
    pub fn new(take: usize) -> Self {
        Self {
            skip: 0,
            take,
            total_available: 0,
        }
    }

    /// Back to the first page. Called on every new filter submission.
    pub fn reset(&mut self) {
        self.skip = 0;
        self.total_available = 0;
    }

    /// Moves the window to the next page. Callers advance only after a
    /// page fetch succeeded.
    pub fn advance(&mut self) {
        self.skip += self.take;
    }
}

/// Fetches one page of prospects for the given criteria.
///
/// A full independent round trip every time: no caching, and two calls for
/// the same page may diverge if the provider's data changed in between.
///
/// # Errors
///
/// Any [`ProspectorError`] from the transport or decoding layers.
pub async fn fetch_page(
    client: &ProspectorClient,
    criteria: &FilterCriteria,
    skip: usize,
    take: usize,
) -> Result<ProspectPage, ProspectorError> {
    let clauses = to_clauses(criteria);
    let raw = client.search_prospects(&clauses, skip, take).await?;
    let companies = normalize(raw, &criteria.branch);
    Ok(ProspectPage {
        total_count: companies.len(),
        companies,
    })
}
