//! Company fixtures and the clause-matching logic the mock endpoints share.

use std::path::Path;

use prospector_core::types::{FilterCategory, QueryClause, RawCompany, DEFAULT_MAX_EMPLOYEES};

const BUILTIN: &str = include_str!("../fixtures/companies.json");

/// Loads the company list from `path`, falling back to the built-in fixtures
/// when the file is missing or unreadable.
#[must_use]
pub fn load_fixtures(path: &Path) -> Vec<RawCompany> {
    match std::fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(companies) => companies,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "could not parse fixtures, using built-in data");
                builtin_fixtures()
            }
        },
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "could not read fixtures, using built-in data");
            builtin_fixtures()
        }
    }
}

/// The fixtures compiled into the binary.
#[must_use]
pub fn builtin_fixtures() -> Vec<RawCompany> {
    serde_json::from_str(BUILTIN).expect("built-in fixtures must parse")
}

/// Applies every clause to the company list, AND-combined, preserving input
/// order. An empty clause list matches everything.
#[must_use]
pub fn apply_clauses(companies: &[RawCompany], clauses: &[QueryClause]) -> Vec<RawCompany> {
    companies
        .iter()
        .filter(|company| clauses.iter().all(|clause| clause_matches(company, clause)))
        .cloned()
        .collect()
}

fn clause_matches(company: &RawCompany, clause: &QueryClause) -> bool {
    match clause.filter_category {
        FilterCategory::Address => {
            option_matches(company.address.as_deref(), clause.select_option.as_deref())
        }
        FilterCategory::Branch => {
            option_matches(company.branch.as_deref(), clause.select_option.as_deref())
        }
        FilterCategory::City => {
            option_matches(company.city.as_deref(), clause.select_option.as_deref())
        }
        FilterCategory::Employees => {
            let (min, max) = clause
                .select_range
                .map_or((0, DEFAULT_MAX_EMPLOYEES), |r| {
                    (r.min.unwrap_or(0), r.max.unwrap_or(DEFAULT_MAX_EMPLOYEES))
                });
            let employees = company.employees.unwrap_or(0);
            employees >= min && employees <= max
        }
    }
}

/// Case-insensitive substring match against any of the options. An absent or
/// empty option list is no constraint; a constrained record without the
/// field never matches.
fn option_matches(field: Option<&str>, options: Option<&[String]>) -> bool {
    let Some(options) = options.filter(|o| !o.is_empty()) else {
        return true;
    };
    let Some(field) = field else {
        return false;
    };
    let field = field.to_lowercase();
    options.iter().any(|o| field.contains(&o.to_lowercase()))
}
