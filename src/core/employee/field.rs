// Updatable fields and the typed values they accept.
//
// Purpose
// - Replace "update by field name and untyped value" with a closed set of field tags
//   and a sum type of values, resolved through a lookup table.
//
// Responsibilities
// - Parse a field name case-insensitively into an EmployeeField.
// - Assign a FieldValue into an employee only when the variant matches the field type.
// - Leave the employee untouched on any mismatch.

use crate::core::employee::{Department, Employee};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeField {
    EmployeeName,
    EmployeeDepartment,
    EmployeeSalary,
    PerformanceRating,
    YearsOfExperience,
    Active,
}

/// Accepted names, compared case-insensitively. The first entry of each field is
/// its canonical name; `yearOfExperience` is kept as a legacy alias.
const FIELD_NAMES: &[(&str, EmployeeField)] = &[
    ("employeeName", EmployeeField::EmployeeName),
    ("employeeDepartment", EmployeeField::EmployeeDepartment),
    ("employeeSalary", EmployeeField::EmployeeSalary),
    ("performanceRating", EmployeeField::PerformanceRating),
    ("yearsOfExperience", EmployeeField::YearsOfExperience),
    ("yearOfExperience", EmployeeField::YearsOfExperience),
    ("active", EmployeeField::Active),
];

impl EmployeeField {
    pub fn name(&self) -> &'static str {
        FIELD_NAMES
            .iter()
            .find(|(_, field)| field == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    pub fn expected_kind(&self) -> ValueKind {
        match self {
            EmployeeField::EmployeeName => ValueKind::Text,
            EmployeeField::EmployeeDepartment => ValueKind::Department,
            EmployeeField::EmployeeSalary | EmployeeField::PerformanceRating => ValueKind::Real,
            EmployeeField::YearsOfExperience => ValueKind::Integer,
            EmployeeField::Active => ValueKind::Flag,
        }
    }
}

impl fmt::Display for EmployeeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown field: {0}")]
pub struct UnknownField(pub String);

impl FromStr for EmployeeField {
    type Err = UnknownField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FIELD_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|(_, field)| *field)
            .ok_or_else(|| UnknownField(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Text,
    Department,
    Real,
    Integer,
    Flag,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Text => "text",
            ValueKind::Department => "department",
            ValueKind::Real => "real",
            ValueKind::Integer => "integer",
            ValueKind::Flag => "flag",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Department(Department),
    Real(f64),
    Integer(u32),
    Flag(bool),
}

impl FieldValue {
    pub fn kind(&self) -> ValueKind {
        match self {
            FieldValue::Text(_) => ValueKind::Text,
            FieldValue::Department(_) => ValueKind::Department,
            FieldValue::Real(_) => ValueKind::Real,
            FieldValue::Integer(_) => ValueKind::Integer,
            FieldValue::Flag(_) => ValueKind::Flag,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("field {field} expects a {expected} value, got {found}")]
pub struct TypeMismatch {
    pub field: EmployeeField,
    pub expected: ValueKind,
    pub found: ValueKind,
}

/// Assigns `value` into `field` of `employee`. No numeric coercion happens:
/// an integer is not accepted where a real is expected.
pub fn assign<K>(
    employee: &mut Employee<K>,
    field: EmployeeField,
    value: FieldValue,
) -> Result<(), TypeMismatch> {
    match (field, value) {
        (EmployeeField::EmployeeName, FieldValue::Text(name)) => employee.set_employee_name(name),
        (EmployeeField::EmployeeDepartment, FieldValue::Department(department)) => {
            employee.set_employee_department(department)
        }
        (EmployeeField::EmployeeSalary, FieldValue::Real(salary)) => employee.set_employee_salary(salary),
        (EmployeeField::PerformanceRating, FieldValue::Real(rating)) => {
            employee.set_performance_rating(rating)
        }
        (EmployeeField::YearsOfExperience, FieldValue::Integer(years)) => {
            employee.set_years_of_experience(years)
        }
        (EmployeeField::Active, FieldValue::Flag(active)) => employee.set_active(active),
        (field, value) => {
            return Err(TypeMismatch {
                field,
                expected: field.expected_kind(),
                found: value.kind(),
            });
        }
    }
    Ok(())
}
