//! Pure aggregations over an already resolved employee list.

use crate::{model::employee::Employee, server::error::directory::DirectoryError};

/// Number of names returned by the top earners endpoint
pub const TOP_EARNERS_LIMIT: usize = 10;

/// Highest salary in the list
///
/// Fails with [`DirectoryError::DataNotFound`] for an empty list, which happens when the
/// remote directory was unavailable and the cache had nothing to offer.
pub fn highest_salary(employees: &[Employee]) -> Result<i32, DirectoryError> {
    employees
        .iter()
        .map(|employee| employee.salary)
        .max()
        .ok_or(DirectoryError::DataNotFound)
}

/// Names of the `limit` best paid employees, highest salary first
///
/// Employees with equal salaries keep their relative order from the input.
pub fn top_earner_names(employees: &[Employee], limit: usize) -> Vec<String> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    // `sort_by` is stable
    sorted.sort_by(|a, b| b.salary.cmp(&a.salary));

    sorted
        .into_iter()
        .take(limit)
        .map(|employee| employee.name.clone())
        .collect()
}

/// Employees whose name contains `search`, ignoring case, in input order
pub fn filter_by_name(employees: Vec<Employee>, search: &str) -> Vec<Employee> {
    let search = search.to_lowercase();

    employees
        .into_iter()
        .filter(|employee| employee.name.to_lowercase().contains(&search))
        .collect()
}
