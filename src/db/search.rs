use chrono::{DateTime, NaiveDate, Utc};
use crate::models::employee::{Employee, EmployeeSearch};

const ALL_DEPARTMENTS: &str = "all";

/// Keeps the employees that satisfy every supplied criterion.
///
/// Text criteria are case-insensitive substrings, except `department`
/// which must match exactly. Blank criteria are ignored.
pub fn filter_employees(employees: Vec<Employee>, criteria: &EmployeeSearch) -> Vec<Employee> {
    let name = lowercase_term(&criteria.name);
    let role = lowercase_term(&criteria.role);
    let city = lowercase_term(&criteria.city);
    let department = criteria
        .department
        .as_deref()
        .filter(|d| !d.is_empty() && *d != ALL_DEPARTMENTS);
    // An unparseable date can never be reached, so it matches nothing.
    let joined_after = criteria
        .joined_after
        .as_deref()
        .filter(|d| !d.is_empty())
        .map(parse_joined_after);

    employees
        .into_iter()
        .filter(|employee| contains(&employee.name, &name))
        .filter(|employee| contains(&employee.role, &role))
        .filter(|employee| department.map_or(true, |d| employee.department == d))
        .filter(|employee| contains(&employee.city, &city))
        .filter(|employee| match joined_after {
            None => true,
            Some(Some(after)) => employee.join_date >= after,
            Some(None) => false,
        })
        .collect()
}

fn lowercase_term(term: &Option<String>) -> Option<String> {
    term.as_deref()
        .filter(|t| !t.is_empty())
        .map(str::to_lowercase)
}

fn contains(field: &str, term: &Option<String>) -> bool {
    match term {
        Some(term) => field.to_lowercase().contains(term.as_str()),
        None => true,
    }
}

/// Accepts RFC 3339 timestamps or plain `YYYY-MM-DD` dates (UTC midnight).
pub fn parse_joined_after(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(value) {
        return Some(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}
