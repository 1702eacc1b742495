//! Converts [`FilterCriteria`] into the provider-shaped clause list.
//!
//! Pure and deterministic: no clause is emitted for an untouched field
//! (absence means "no constraint", not zero), and clause order is fixed at
//! address → branch → city → employees so identical criteria always produce
//! identical request bodies.

use crate::types::{FilterCategory, FilterCriteria, QueryClause, DEFAULT_MAX_EMPLOYEES};

/// Builds the clause list for a search or preview request.
#[must_use]
pub fn to_clauses(criteria: &FilterCriteria) -> Vec<QueryClause> {
    let mut clauses = Vec::new();

    if !criteria.address.is_empty() {
        clauses.push(QueryClause::options(
            FilterCategory::Address,
            vec![criteria.address.clone()],
        ));
    }

    if !criteria.branch.is_empty() {
        clauses.push(QueryClause::options(
            FilterCategory::Branch,
            vec![criteria.branch.clone()],
        ));
    }

    if !criteria.city.is_empty() {
        clauses.push(QueryClause::options(
            FilterCategory::City,
            vec![criteria.city.clone()],
        ));
    }

    // Employee clause only when the range actually narrows the defaults.
    if criteria.min_employees > 0 || criteria.max_employees < DEFAULT_MAX_EMPLOYEES {
        clauses.push(QueryClause::employee_range(
            criteria.min_employees,
            criteria.max_employees,
        ));
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EmployeeRange;

    #[test]
    fn default_criteria_produces_no_clauses() {
        assert!(to_clauses(&FilterCriteria::default()).is_empty());
    }

    #[test]
    fn single_city_produces_one_city_clause() {
        let criteria = FilterCriteria {
            city: "Stockholm".to_string(),
            ..FilterCriteria::default()
        };
        let clauses = to_clauses(&criteria);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].filter_category, FilterCategory::City);
        assert_eq!(
            clauses[0].select_option.as_deref(),
            Some(&["Stockholm".to_string()][..])
        );
    }

    #[test]
    fn single_address_produces_one_address_clause() {
        let criteria = FilterCriteria {
            address: "Kungsgatan".to_string(),
            ..FilterCriteria::default()
        };
        let clauses = to_clauses(&criteria);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].filter_category, FilterCategory::Address);
    }

    #[test]
    fn min_employees_alone_produces_range_clause() {
        let criteria = FilterCriteria {
            min_employees: 50,
            ..FilterCriteria::default()
        };
        let clauses = to_clauses(&criteria);
        assert_eq!(clauses.len(), 1);
        assert_eq!(
            clauses[0].select_range,
            Some(EmployeeRange {
                min: Some(50),
                max: Some(DEFAULT_MAX_EMPLOYEES),
            })
        );
    }

    #[test]
    fn max_at_default_bound_is_not_a_constraint() {
        let criteria = FilterCriteria {
            min_employees: 0,
            max_employees: DEFAULT_MAX_EMPLOYEES,
            ..FilterCriteria::default()
        };
        assert!(to_clauses(&criteria).is_empty());
    }

    #[test]
    fn narrowed_max_produces_range_clause() {
        let criteria = FilterCriteria {
            max_employees: 999,
            ..FilterCriteria::default()
        };
        let clauses = to_clauses(&criteria);
        assert_eq!(clauses.len(), 1);
        assert_eq!(clauses[0].filter_category, FilterCategory::Employees);
    }

    #[test]
    fn clause_order_is_address_branch_city_employees() {
        let criteria = FilterCriteria {
            address: "Storgatan".to_string(),
            branch: "Energy".to_string(),
            city: "Göteborg".to_string(),
            min_employees: 10,
            max_employees: 300,
        };
        let categories: Vec<_> = to_clauses(&criteria)
            .into_iter()
            .map(|c| c.filter_category)
            .collect();
        assert_eq!(
            categories,
            vec![
                FilterCategory::Address,
                FilterCategory::Branch,
                FilterCategory::City,
                FilterCategory::Employees,
            ]
        );
    }

    #[test]
    fn to_clauses_is_deterministic() {
        let criteria = FilterCriteria {
            city: "Malmö".to_string(),
            min_employees: 5,
            ..FilterCriteria::default()
        };
        assert_eq!(to_clauses(&criteria), to_clauses(&criteria));
    }
}
