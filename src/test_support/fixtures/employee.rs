// Shared test fixtures for employee records.
// Compiled only for tests and exposed under `crate::test_support::fixtures::employee`.

use crate::core::employee::{Department, Employee};

const EMPLOYEE_JSON: &str = include_str!("json/employee.json");
const EMPLOYEES_JSON: &str = include_str!("json/employees.json");

/// Five employees across four departments, ids 1 to 5.
pub fn sample_employees() -> Vec<Employee<u32>> {
    serde_json::from_str(EMPLOYEES_JSON).unwrap()
}

pub struct EmployeeBuilder {
    employee_id: u32,
    employee_name: String,
    employee_department: Department,
    employee_salary: f64,
    performance_rating: f64,
    years_of_experience: u32,
    active: bool,
}

impl Default for EmployeeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EmployeeBuilder {
    pub fn new() -> Self {
        let employee: Employee<u32> = serde_json::from_str(EMPLOYEE_JSON).unwrap();

        Self {
            employee_id: *employee.employee_id(),
            employee_name: employee.employee_name().to_string(),
            employee_department: employee.employee_department(),
            employee_salary: employee.employee_salary(),
            performance_rating: employee.performance_rating(),
            years_of_experience: employee.years_of_experience(),
            active: employee.is_active(),
        }
    }

    pub fn employee_id(mut self, v: u32) -> Self {
        self.employee_id = v;
        self
    }

    pub fn employee_name(mut self, v: impl Into<String>) -> Self {
        self.employee_name = v.into();
        self
    }

    pub fn employee_department(mut self, v: Department) -> Self {
        self.employee_department = v;
        self
    }

    pub fn employee_salary(mut self, v: f64) -> Self {
        self.employee_salary = v;
        self
    }

    pub fn performance_rating(mut self, v: f64) -> Self {
        self.performance_rating = v;
        self
    }

    pub fn years_of_experience(mut self, v: u32) -> Self {
        self.years_of_experience = v;
        self
    }

    pub fn active(mut self, v: bool) -> Self {
        self.active = v;
        self
    }

    pub fn build(self) -> Employee<u32> {
        Employee::new(
            self.employee_id,
            self.employee_name,
            self.employee_department,
            self.employee_salary,
            self.performance_rating,
            self.years_of_experience,
            self.active,
        )
    }
}
