// Employee record and its department enumeration.
//
// Purpose
// - Represent one employee's attribute set, keyed by a caller-chosen identifier.
//
// Responsibilities
// - Keep the identifier immutable once the record exists.
// - Expose plain getters and setters for every mutable attribute.
// - Define the natural ordering (years of experience, ascending).
//
// Boundaries
// - No input or output. No knowledge of the store or of any transport.

pub mod field;
pub mod ordering;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Department {
    Engineering,
    Marketing,
    Sales,
    HumanResources,
    Finance,
    Operations,
    Support,
}

impl Department {
    /// Canonical name, used for display and for case-insensitive matching.
    pub fn name(&self) -> &'static str {
        match self {
            Department::Engineering => "ENGINEERING",
            Department::Marketing => "MARKETING",
            Department::Sales => "SALES",
            Department::HumanResources => "HUMAN_RESOURCES",
            Department::Finance => "FINANCE",
            Department::Operations => "OPERATIONS",
            Department::Support => "SUPPORT",
        }
    }

    /// Exact, case-insensitive comparison against the canonical name.
    pub fn matches(&self, name: &str) -> bool {
        self.name().eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee<K> {
    employee_id: K,
    employee_name: String,
    employee_department: Department,
    employee_salary: f64,
    performance_rating: f64,
    years_of_experience: u32,
    active: bool,
}

impl<K> Employee<K> {
    pub fn new(
        employee_id: K,
        employee_name: impl Into<String>,
        employee_department: Department,
        employee_salary: f64,
        performance_rating: f64,
        years_of_experience: u32,
        active: bool,
    ) -> Self {
        Self {
            employee_id,
            employee_name: employee_name.into(),
            employee_department,
            employee_salary,
            performance_rating,
            years_of_experience,
            active,
        }
    }

    pub fn employee_id(&self) -> &K {
        &self.employee_id
    }

    pub fn employee_name(&self) -> &str {
        &self.employee_name
    }

    pub fn employee_department(&self) -> Department {
        self.employee_department
    }

    pub fn employee_salary(&self) -> f64 {
        self.employee_salary
    }

    pub fn performance_rating(&self) -> f64 {
        self.performance_rating
    }

    pub fn years_of_experience(&self) -> u32 {
        self.years_of_experience
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_employee_name(&mut self, name: impl Into<String>) {
        self.employee_name = name.into();
    }

    pub fn set_employee_department(&mut self, department: Department) {
        self.employee_department = department;
    }

    pub fn set_employee_salary(&mut self, salary: f64) {
        self.employee_salary = salary;
    }

    pub fn set_performance_rating(&mut self, rating: f64) {
        self.performance_rating = rating;
    }

    pub fn set_years_of_experience(&mut self, years: u32) {
        self.years_of_experience = years;
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Natural ordering: ascending by years of experience.
    pub fn cmp_experience(&self, other: &Self) -> Ordering {
        self.years_of_experience.cmp(&other.years_of_experience)
    }
}
