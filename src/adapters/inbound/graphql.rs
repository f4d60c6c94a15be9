// GraphQL inbound adapter for the employee store.
//
// Responsibilities
// - Map GraphQL inputs to store calls and store results to GraphQL objects.
// - Queries take the read lock and answer from a snapshot. Mutations take the write lock.
// - Expected store failures (duplicate id, missing id, unknown field, wrong value type)
//   are answered with `false`, not with a GraphQL error.

use async_graphql::{Context, Enum, InputObject, Object, OneofObject, SimpleObject};

use crate::core::directory::{self, EmployeeRow, RatingBand};
use crate::core::employee::field::FieldValue;
use crate::core::employee::{Department, Employee};
use crate::shell::state::AppState;

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum GqlDepartment {
    Engineering,
    Marketing,
    Sales,
    HumanResources,
    Finance,
    Operations,
    Support,
}

impl From<Department> for GqlDepartment {
    fn from(d: Department) -> Self {
        match d {
            Department::Engineering => GqlDepartment::Engineering,
            Department::Marketing => GqlDepartment::Marketing,
            Department::Sales => GqlDepartment::Sales,
            Department::HumanResources => GqlDepartment::HumanResources,
            Department::Finance => GqlDepartment::Finance,
            Department::Operations => GqlDepartment::Operations,
            Department::Support => GqlDepartment::Support,
        }
    }
}

impl From<GqlDepartment> for Department {
    fn from(d: GqlDepartment) -> Self {
        match d {
            GqlDepartment::Engineering => Department::Engineering,
            GqlDepartment::Marketing => Department::Marketing,
            GqlDepartment::Sales => Department::Sales,
            GqlDepartment::HumanResources => Department::HumanResources,
            GqlDepartment::Finance => Department::Finance,
            GqlDepartment::Operations => Department::Operations,
            GqlDepartment::Support => Department::Support,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlEmployee {
    pub employee_id: u32,
    pub employee_name: String,
    pub employee_department: GqlDepartment,
    pub employee_salary: f64,
    pub performance_rating: f64,
    pub years_of_experience: u32,
    pub active: bool,
}

impl From<Employee<u32>> for GqlEmployee {
    fn from(e: Employee<u32>) -> Self {
        Self {
            employee_id: *e.employee_id(),
            employee_name: e.employee_name().to_string(),
            employee_department: e.employee_department().into(),
            employee_salary: e.employee_salary(),
            performance_rating: e.performance_rating(),
            years_of_experience: e.years_of_experience(),
            active: e.is_active(),
        }
    }
}

#[derive(Enum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum GqlRatingBand {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl From<RatingBand> for GqlRatingBand {
    fn from(band: RatingBand) -> Self {
        match band {
            RatingBand::Excellent => GqlRatingBand::Excellent,
            RatingBand::Good => GqlRatingBand::Good,
            RatingBand::Fair => GqlRatingBand::Fair,
            RatingBand::Poor => GqlRatingBand::Poor,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlEmployeeRow {
    pub employee_id: String,
    pub name: String,
    pub department: String,
    pub salary: String,
    pub rating: String,
    pub rating_band: GqlRatingBand,
    pub experience: u32,
    pub status: String,
}

impl From<EmployeeRow> for GqlEmployeeRow {
    fn from(row: EmployeeRow) -> Self {
        Self {
            employee_id: row.employee_id,
            name: row.name,
            department: row.department,
            salary: row.salary,
            rating: row.rating,
            rating_band: row.rating_band.into(),
            experience: row.experience,
            status: row.status,
        }
    }
}

#[derive(SimpleObject, Clone)]
pub struct GqlDirectory {
    pub title: String,
    pub placeholder: String,
    pub rows: Vec<GqlEmployeeRow>,
}

#[derive(Enum, Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum EmployeeSort {
    #[default]
    Insertion,
    Experience,
    Salary,
    Performance,
}

#[derive(InputObject)]
pub struct NewEmployeeInput {
    pub employee_id: u32,
    pub employee_name: String,
    pub employee_department: GqlDepartment,
    pub employee_salary: f64,
    pub performance_rating: f64,
    pub years_of_experience: u32,
    pub active: bool,
}

impl From<NewEmployeeInput> for Employee<u32> {
    fn from(input: NewEmployeeInput) -> Self {
        Employee::new(
            input.employee_id,
            input.employee_name,
            input.employee_department.into(),
            input.employee_salary,
            input.performance_rating,
            input.years_of_experience,
            input.active,
        )
    }
}

#[derive(OneofObject)]
pub enum FieldValueInput {
    Text(String),
    Department(GqlDepartment),
    Real(f64),
    Integer(u32),
    Flag(bool),
}

impl From<FieldValueInput> for FieldValue {
    fn from(input: FieldValueInput) -> Self {
        match input {
            FieldValueInput::Text(v) => FieldValue::Text(v),
            FieldValueInput::Department(v) => FieldValue::Department(v.into()),
            FieldValueInput::Real(v) => FieldValue::Real(v),
            FieldValueInput::Integer(v) => FieldValue::Integer(v),
            FieldValueInput::Flag(v) => FieldValue::Flag(v),
        }
    }
}

fn into_gql(employees: Vec<Employee<u32>>) -> Vec<GqlEmployee> {
    employees.into_iter().map(Into::into).collect()
}

fn count(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn employees(&self, context: &Context<'_>, sort: Option<EmployeeSort>) -> Vec<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();
        let store = state.store.read().await;
        let employees = match sort.unwrap_or_default() {
            EmployeeSort::Insertion => store.get_all_employees(),
            EmployeeSort::Experience => store.get_employees_sorted_by_experience(),
            EmployeeSort::Salary => store.get_employees_sorted_by_salary(),
            EmployeeSort::Performance => store.get_employees_sorted_by_performance(),
        };
        into_gql(employees)
    }

    async fn employee(&self, context: &Context<'_>, id: u32) -> Option<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();
        let store = state.store.read().await;
        store.get_employee(&id).cloned().map(Into::into)
    }

    async fn employees_by_department(&self, context: &Context<'_>, department: String) -> Vec<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();
        into_gql(state.store.read().await.find_employees_by_department(&department))
    }

    async fn employees_by_name(&self, context: &Context<'_>, search: String) -> Vec<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();
        into_gql(state.store.read().await.find_employees_by_name(&search))
    }

    async fn employees_by_min_rating(&self, context: &Context<'_>, min_rating: f64) -> Vec<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();
        into_gql(state.store.read().await.find_employees_by_min_rating(min_rating))
    }

    async fn employees_by_salary_range(&self, context: &Context<'_>, min: f64, max: f64) -> Vec<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();
        into_gql(state.store.read().await.find_employees_by_salary_range(min, max))
    }

    async fn active_employees(&self, context: &Context<'_>) -> Vec<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();
        into_gql(state.store.read().await.find_active_employees())
    }

    async fn top_paid_employees(&self, context: &Context<'_>, n: u32) -> Vec<GqlEmployee> {
        let state = context.data_unchecked::<AppState>();
        into_gql(state.store.read().await.get_top_paid_employees(n as usize))
    }

    async fn average_salary_by_department(&self, context: &Context<'_>, department: String) -> f64 {
        let state = context.data_unchecked::<AppState>();
        state
            .store
            .read()
            .await
            .calculate_average_salary_by_department(&department)
    }

    async fn employee_count(&self, context: &Context<'_>) -> u32 {
        let state = context.data_unchecked::<AppState>();
        count(state.store.read().await.get_employee_count())
    }

    async fn directory(&self, context: &Context<'_>) -> GqlDirectory {
        let state = context.data_unchecked::<AppState>();
        let store = state.store.read().await;
        GqlDirectory {
            title: directory::directory_title(store.get_employee_count()),
            placeholder: directory::EMPTY_DIRECTORY_PLACEHOLDER.to_string(),
            rows: store
                .get_employee_iterator()
                .map(|employee| EmployeeRow::from(employee).into())
                .collect(),
        }
    }
}

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    async fn add_employee(&self, context: &Context<'_>, input: NewEmployeeInput) -> bool {
        let state = context.data_unchecked::<AppState>();
        state.store.write().await.add_employee(input.into()).is_ok()
    }

    async fn update_employee_details(
        &self,
        context: &Context<'_>,
        id: u32,
        field: String,
        value: FieldValueInput,
    ) -> bool {
        let state = context.data_unchecked::<AppState>();
        state
            .store
            .write()
            .await
            .update_employee_details(&id, &field, value.into())
            .is_ok()
    }

    async fn delete_employee(&self, context: &Context<'_>, id: u32) -> bool {
        let state = context.data_unchecked::<AppState>();
        state.store.write().await.delete_employee(&id).is_ok()
    }

    async fn give_salary_raise_to_high_performers(&self, context: &Context<'_>) -> u32 {
        let state = context.data_unchecked::<AppState>();
        count(state.store.write().await.give_salary_raise_to_high_performers())
    }
}
