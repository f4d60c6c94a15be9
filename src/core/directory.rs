// Read model for the employee directory table.
//
// Purpose
// - Turn employee records into display rows: formatted salary and rating, a rating band
//   and a status label, plus the directory title.
//
// Boundaries
// - No styling. Consumers decide how a band or a status is rendered.

use crate::core::employee::Employee;
use std::fmt::Display;

pub const EMPTY_DIRECTORY_PLACEHOLDER: &str = "No employees found";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl RatingBand {
    pub fn of(rating: f64) -> Self {
        if rating >= 4.0 {
            RatingBand::Excellent
        } else if rating >= 3.0 {
            RatingBand::Good
        } else if rating >= 2.0 {
            RatingBand::Fair
        } else {
            RatingBand::Poor
        }
    }
}

pub fn format_salary(salary: f64) -> String {
    format!("${salary:.2}")
}

pub fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

pub fn status_label(active: bool) -> &'static str {
    if active { "Active" } else { "Inactive" }
}

pub fn directory_title(count: usize) -> String {
    format!("Employee Directory ({count} employees)")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: String,
    pub rating: String,
    pub rating_band: RatingBand,
    pub experience: u32,
    pub status: String,
}

impl<K: Display> From<&Employee<K>> for EmployeeRow {
    fn from(employee: &Employee<K>) -> Self {
        Self {
            employee_id: employee.employee_id().to_string(),
            name: employee.employee_name().to_string(),
            department: employee.employee_department().name().to_string(),
            salary: format_salary(employee.employee_salary()),
            rating: format_rating(employee.performance_rating()),
            rating_band: RatingBand::of(employee.performance_rating()),
            experience: employee.years_of_experience(),
            status: status_label(employee.is_active()).to_string(),
        }
    }
}
