//! Normalization of raw provider records into the canonical [`Company`] shape.
//!
//! A pure total function over the provider's optional-field schema: every
//! default lives in the table below rather than scattered inline. Output
//! order always matches input order — no re-sort.

use prospector_core::types::{Company, RawCompany};

/// Central table of defaults for absent provider fields.
mod defaults {
    /// Text fields (description, phone, address, ...) default to empty.
    pub const TEXT: &str = "";
    /// Missing employee counts mean "unreported", not a constraint.
    pub const EMPLOYEES: u32 = 0;
    pub const TURN_OVER: u64 = 0;
    /// Last link of the branch fallback chain: raw → criteria branch → this.
    pub const BRANCH: &str = "Unknown";
    pub const FOUNDED: &str = "Unknown";
    /// Provider status is not trusted; every normalized company is active.
    pub const STATUS: &str = "Active";
}

/// Maps one page of raw provider records into canonical companies.
///
/// `fallback_branch` is the branch from the submitted criteria, used when
/// the record itself carries none.
///
/// The id is the organisation number when present and non-empty, otherwise
/// the 1-based position within this page. The positional fallback is not
/// stable across pages or re-fetches.
#[must_use]
pub fn normalize(raw: Vec<RawCompany>, fallback_branch: &str) -> Vec<Company> {
    raw.into_iter()
        .enumerate()
        .map(|(index, record)| normalize_one(index, record, fallback_branch))
        .collect()
}

fn normalize_one(index: usize, raw: RawCompany, fallback_branch: &str) -> Company {
    let organisation_number = non_empty(raw.organisation_number);
    let id = organisation_number
        .clone()
        .unwrap_or_else(|| (index + 1).to_string());

    let branch = non_empty(raw.branch)
        .or_else(|| {
            if fallback_branch.is_empty() {
                None
            } else {
                Some(fallback_branch.to_owned())
            }
        })
        .unwrap_or_else(|| defaults::BRANCH.to_owned());

    Company {
        id,
        name: raw.name,
        organisation_number: organisation_number.unwrap_or_else(|| defaults::TEXT.to_owned()),
        description: text_or_default(raw.description),
        employees: raw.employees.unwrap_or(defaults::EMPLOYEES),
        turn_over: raw.turn_over.unwrap_or(defaults::TURN_OVER),
        legal_entity: text_or_default(raw.legal_entity),
        vat_number: text_or_default(raw.vat_number),
        phone: text_or_default(raw.phone),
        address: text_or_default(raw.address),
        post_code: text_or_default(raw.post_code),
        city: text_or_default(raw.city),
        branch,
        status: defaults::STATUS.to_owned(),
        founded: non_empty(raw.founded).unwrap_or_else(|| defaults::FOUNDED.to_owned()),
    }
}

fn text_or_default(value: Option<String>) -> String {
    value.unwrap_or_else(|| defaults::TEXT.to_owned())
}

/// Treats `None` and `Some("")` alike — the provider emits both for
/// missing values.
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}
