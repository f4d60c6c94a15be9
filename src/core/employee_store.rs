// In memory employee store.
//
// Purpose
// - Own every employee record, keyed by its identifier, and answer queries over them.
//
// Responsibilities
// - Create, read, update and delete records. Ids are assigned by the caller and never change.
// - Search, sort and report without touching the stored order.
// - Report expected failures (duplicate id, missing id, unknown field, wrong value type)
//   as StoreError values, never as panics.
//
// Concurrency
// - Not synchronised. Writers need `&mut self`, so callers sharing a store must wrap it
//   in a lock (the shell uses a tokio RwLock).
//
// Ordering
// - Records keep insertion order; deleting a record keeps the order of the rest.
//   Every sort is stable, so equal keys come back in insertion order.

use crate::core::employee::Employee;
use crate::core::employee::field::{self, EmployeeField, FieldValue, TypeMismatch, UnknownField};
use crate::core::employee::ordering;
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Minimum rating that qualifies for the bulk raise.
pub const HIGH_PERFORMER_RATING: f64 = 3.5;

/// Raise granted to high performers, in percent.
pub const HIGH_PERFORMER_RAISE_PERCENT: f64 = 2.0;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("an employee with this id already exists")]
    DuplicateId,

    #[error("employee not found")]
    NotFound,

    #[error(transparent)]
    UnknownField(#[from] UnknownField),

    #[error(transparent)]
    TypeMismatch(#[from] TypeMismatch),
}

#[derive(Debug, Clone)]
pub struct EmployeeStore<K> {
    employees: IndexMap<K, Employee<K>>,
}

impl<K> Default for EmployeeStore<K> {
    fn default() -> Self {
        Self {
            employees: IndexMap::new(),
        }
    }
}

impl<K> EmployeeStore<K>
where
    K: Eq + Hash + Clone + Debug,
{
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_employee(&mut self, employee: Employee<K>) -> Result<(), StoreError> {
        match self.employees.entry(employee.employee_id().clone()) {
            Entry::Occupied(entry) => {
                tracing::debug!(employee_id = ?entry.key(), "rejected duplicate employee id");
                Err(StoreError::DuplicateId)
            }
            Entry::Vacant(entry) => {
                tracing::debug!(employee_id = ?entry.key(), "employee added");
                entry.insert(employee);
                Ok(())
            }
        }
    }

    /// Snapshot of every record, in insertion order.
    pub fn get_all_employees(&self) -> Vec<Employee<K>> {
        self.employees.values().cloned().collect()
    }

    pub fn get_employee(&self, employee_id: &K) -> Option<&Employee<K>> {
        self.employees.get(employee_id)
    }

    pub fn get_employee_mut(&mut self, employee_id: &K) -> Option<&mut Employee<K>> {
        self.employees.get_mut(employee_id)
    }

    /// Updates one field, named case-insensitively. A missing id is reported before an
    /// unknown field name, and nothing is mutated on any error.
    pub fn update_employee_details(
        &mut self,
        employee_id: &K,
        field_name: &str,
        value: FieldValue,
    ) -> Result<(), StoreError> {
        if !self.employees.contains_key(employee_id) {
            tracing::debug!(?employee_id, field_name, "update rejected: employee not found");
            return Err(StoreError::NotFound);
        }
        let field = field_name.parse::<EmployeeField>().inspect_err(|err| {
            tracing::debug!(?employee_id, %err, "update rejected");
        })?;
        self.update_field(employee_id, field, value)
    }

    pub fn update_field(
        &mut self,
        employee_id: &K,
        field: EmployeeField,
        value: FieldValue,
    ) -> Result<(), StoreError> {
        let employee = self.employees.get_mut(employee_id).ok_or(StoreError::NotFound)?;
        match field::assign(employee, field, value) {
            Ok(()) => {
                tracing::debug!(?employee_id, %field, "employee updated");
                Ok(())
            }
            Err(err) => {
                tracing::debug!(?employee_id, %err, "update rejected");
                Err(err.into())
            }
        }
    }

    pub fn delete_employee(&mut self, employee_id: &K) -> Result<(), StoreError> {
        match self.employees.shift_remove(employee_id) {
            Some(_) => {
                tracing::debug!(?employee_id, "employee deleted");
                Ok(())
            }
            None => Err(StoreError::NotFound),
        }
    }

    pub fn find_employees<P>(&self, predicate: P) -> Vec<Employee<K>>
    where
        P: Fn(&Employee<K>) -> bool,
    {
        self.employees
            .values()
            .filter(|employee| predicate(employee))
            .cloned()
            .collect()
    }

    pub fn find_employees_by_department(&self, department: &str) -> Vec<Employee<K>> {
        self.find_employees(|employee| employee.employee_department().matches(department))
    }

    pub fn find_employees_by_name(&self, search_term: &str) -> Vec<Employee<K>> {
        let needle = search_term.to_lowercase();
        self.find_employees(|employee| employee.employee_name().to_lowercase().contains(&needle))
    }

    pub fn find_employees_by_min_rating(&self, min_rating: f64) -> Vec<Employee<K>> {
        self.find_employees(|employee| employee.performance_rating() >= min_rating)
    }

    /// Inclusive on both ends. An inverted range matches nothing.
    pub fn find_employees_by_salary_range(&self, min_salary: f64, max_salary: f64) -> Vec<Employee<K>> {
        self.find_employees(|employee| {
            let salary = employee.employee_salary();
            salary >= min_salary && salary <= max_salary
        })
    }

    pub fn find_active_employees(&self) -> Vec<Employee<K>> {
        self.find_employees(Employee::is_active)
    }

    fn sorted_by(&self, compare: fn(&Employee<K>, &Employee<K>) -> Ordering) -> Vec<Employee<K>> {
        let mut sorted = self.get_all_employees();
        sorted.sort_by(compare);
        sorted
    }

    pub fn get_employees_sorted_by_experience(&self) -> Vec<Employee<K>> {
        self.sorted_by(ordering::by_experience)
    }

    pub fn get_employees_sorted_by_salary(&self) -> Vec<Employee<K>> {
        self.sorted_by(ordering::by_salary)
    }

    pub fn get_employees_sorted_by_performance(&self) -> Vec<Employee<K>> {
        self.sorted_by(ordering::by_performance)
    }

    /// The `n` highest-paid employees, highest salary first.
    pub fn get_top_paid_employees(&self, n: usize) -> Vec<Employee<K>> {
        let mut top = self.sorted_by(ordering::by_salary_desc);
        top.truncate(n);
        top
    }

    /// Raises the salary of every high performer in place and returns how many were raised.
    pub fn give_salary_raise_to_high_performers(&mut self) -> usize {
        let factor = 1.0 + HIGH_PERFORMER_RAISE_PERCENT / 100.0;
        let mut raised = 0;
        for employee in self.employees.values_mut() {
            if employee.performance_rating() >= HIGH_PERFORMER_RATING {
                employee.set_employee_salary(employee.employee_salary() * factor);
                raised += 1;
            }
        }
        tracing::info!(raised, "salary raise given to high performers");
        raised
    }

    /// Mean salary of a department, or `0.0` when it has no employees.
    pub fn calculate_average_salary_by_department(&self, department: &str) -> f64 {
        let salaries: Vec<f64> = self
            .employees
            .values()
            .filter(|employee| employee.employee_department().matches(department))
            .map(Employee::employee_salary)
            .collect();
        if salaries.is_empty() {
            return 0.0;
        }
        salaries.iter().sum::<f64>() / salaries.len() as f64
    }

    pub fn get_employee_count(&self) -> usize {
        self.employees.len()
    }

    /// Lazy, single pass over the current records. The store cannot be mutated while
    /// the iterator is alive.
    pub fn get_employee_iterator(&self) -> impl Iterator<Item = &Employee<K>> + '_ {
        self.employees.values()
    }
}

impl<'a, K> IntoIterator for &'a EmployeeStore<K> {
    type Item = &'a Employee<K>;
    type IntoIter = indexmap::map::Values<'a, K, Employee<K>>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.values()
    }
}

#[cfg(test)]
mod employee_store_tests {
    use super::*;
    use crate::core::employee::Department;
    use crate::core::employee::field::ValueKind;
    use crate::test_support::fixtures::employee::{EmployeeBuilder, sample_employees};
    use rstest::{fixture, rstest};

    #[fixture]
    fn store() -> EmployeeStore<u32> {
        let mut store = EmployeeStore::new();
        for employee in sample_employees() {
            store.add_employee(employee).expect("sample ids are unique");
        }
        store
    }

    fn ids(employees: &[Employee<u32>]) -> Vec<u32> {
        employees.iter().map(|employee| *employee.employee_id()).collect()
    }

    #[rstest]
    fn it_should_add_an_employee_once_and_reject_the_duplicate() {
        let mut store = EmployeeStore::new();
        let employee = EmployeeBuilder::new().build();

        assert_eq!(store.add_employee(employee.clone()), Ok(()));
        assert_eq!(store.add_employee(employee), Err(StoreError::DuplicateId));
        assert_eq!(store.get_employee_count(), 1);
    }

    #[rstest]
    fn it_should_not_overwrite_on_duplicate_add(mut store: EmployeeStore<u32>) {
        let impostor = EmployeeBuilder::new().employee_id(1).employee_name("Impostor").build();

        assert!(store.add_employee(impostor).is_err());
        assert_eq!(store.get_employee(&1).unwrap().employee_name(), "Ada Lovelace");
    }

    #[rstest]
    fn it_should_return_a_detached_snapshot_of_all_employees(mut store: EmployeeStore<u32>) {
        let mut snapshot = store.get_all_employees();
        snapshot.clear();
        assert_eq!(store.get_employee_count(), 5);

        let snapshot = store.get_all_employees();
        store.update_employee_details(&1, "employeeName", FieldValue::Text("Changed".into())).unwrap();
        assert_eq!(snapshot[0].employee_name(), "Ada Lovelace");
        assert_eq!(ids(&snapshot), vec![1, 2, 3, 4, 5]);
    }

    #[rstest]
    fn it_should_get_an_employee_or_nothing(store: EmployeeStore<u32>) {
        assert_eq!(store.get_employee(&2).unwrap().employee_name(), "Grace Hopper");
        assert!(store.get_employee(&99).is_none());
    }

    #[rstest]
    fn it_should_mutate_through_the_mutable_accessor(mut store: EmployeeStore<u32>) {
        store.get_employee_mut(&3).unwrap().set_active(true);
        assert!(store.get_employee(&3).unwrap().is_active());
    }

    #[rstest]
    fn it_should_update_the_salary_by_field_name(mut store: EmployeeStore<u32>) {
        let result = store.update_employee_details(&1, "employeeSalary", FieldValue::Real(75_000.0));

        assert_eq!(result, Ok(()));
        assert_eq!(store.get_employee(&1).unwrap().employee_salary(), 75_000.0);
    }

    #[rstest]
    fn it_should_reject_a_wrongly_typed_salary(mut store: EmployeeStore<u32>) {
        let result = store.update_employee_details(&1, "employeeSalary", FieldValue::Text("75000".into()));

        assert_eq!(
            result,
            Err(StoreError::TypeMismatch(TypeMismatch {
                field: EmployeeField::EmployeeSalary,
                expected: ValueKind::Real,
                found: ValueKind::Text,
            }))
        );
        assert_eq!(store.get_employee(&1).unwrap().employee_salary(), 120_000.0);
    }

    #[rstest]
    #[case(FieldValue::Real(1.0))]
    #[case(FieldValue::Flag(true))]
    #[case(FieldValue::Text("x".into()))]
    fn it_should_reject_an_unknown_field(mut store: EmployeeStore<u32>, #[case] value: FieldValue) {
        let before = store.get_employee(&1).cloned();

        let result = store.update_employee_details(&1, "unknownField", value);

        assert_eq!(result, Err(StoreError::UnknownField(UnknownField("unknownField".into()))));
        assert_eq!(store.get_employee(&1).cloned(), before);
    }

    #[rstest]
    #[case("employee_salary")]
    #[case("salary")]
    fn it_should_leave_the_salary_untouched_for_an_unrecognised_name(
        mut store: EmployeeStore<u32>,
        #[case] field_name: &str,
    ) {
        let result = store.update_employee_details(&1, field_name, FieldValue::Real(1.0));

        assert_eq!(result, Err(StoreError::UnknownField(UnknownField(field_name.into()))));
        assert_eq!(store.get_employee(&1).unwrap().employee_salary(), 120_000.0);
    }

    #[rstest]
    fn it_should_report_a_missing_id_before_an_unknown_field(mut store: EmployeeStore<u32>) {
        let result = store.update_employee_details(&99, "unknownField", FieldValue::Flag(true));
        assert_eq!(result, Err(StoreError::NotFound));
    }

    #[rstest]
    fn it_should_update_fields_named_in_any_case(mut store: EmployeeStore<u32>) {
        store
            .update_employee_details(&4, "EMPLOYEEDEPARTMENT", FieldValue::Department(Department::Marketing))
            .unwrap();
        store.update_employee_details(&4, "yearsofexperience", FieldValue::Integer(2)).unwrap();

        let employee = store.get_employee(&4).unwrap();
        assert_eq!(employee.employee_department(), Department::Marketing);
        assert_eq!(employee.years_of_experience(), 2);
    }

    #[rstest]
    fn it_should_delete_an_existing_employee_and_keep_the_order(mut store: EmployeeStore<u32>) {
        assert_eq!(store.delete_employee(&2), Ok(()));
        assert_eq!(store.get_employee_count(), 4);
        assert!(store.get_employee(&2).is_none());
        assert_eq!(ids(&store.get_all_employees()), vec![1, 3, 4, 5]);
    }

    #[rstest]
    fn it_should_not_delete_an_absent_employee(mut store: EmployeeStore<u32>) {
        assert_eq!(store.delete_employee(&99), Err(StoreError::NotFound));
        assert_eq!(store.get_employee_count(), 5);
    }

    #[rstest]
    #[case("ENGINEERING", vec![1, 2])]
    #[case("engineering", vec![1, 2])]
    #[case("Human_Resources", vec![5])]
    #[case("Engineer", vec![])]
    fn it_should_find_employees_by_department(
        store: EmployeeStore<u32>,
        #[case] department: &str,
        #[case] expected: Vec<u32>,
    ) {
        assert_eq!(ids(&store.find_employees_by_department(department)), expected);
    }

    #[rstest]
    #[case("ada", vec![1])]
    #[case("LI", vec![4, 5])]
    #[case("", vec![1, 2, 3, 4, 5])]
    #[case("nobody", vec![])]
    fn it_should_find_employees_by_name(
        store: EmployeeStore<u32>,
        #[case] search: &str,
        #[case] expected: Vec<u32>,
    ) {
        assert_eq!(ids(&store.find_employees_by_name(search)), expected);
    }

    #[rstest]
    fn it_should_find_employees_by_min_rating(store: EmployeeStore<u32>) {
        assert_eq!(ids(&store.find_employees_by_min_rating(3.5)), vec![1, 2, 3]);
        assert!(store.find_employees_by_min_rating(5.1).is_empty());
    }

    #[rstest]
    fn it_should_find_employees_by_inclusive_salary_range(store: EmployeeStore<u32>) {
        assert_eq!(ids(&store.find_employees_by_salary_range(50_000.0, 50_000.0)), vec![3, 4]);
        assert_eq!(ids(&store.find_employees_by_salary_range(60_000.0, 100_000.0)), vec![2, 5]);
        assert!(store.find_employees_by_salary_range(100.0, 1.0).is_empty());
    }

    #[rstest]
    fn it_should_find_employees_with_a_custom_predicate(store: EmployeeStore<u32>) {
        let seniors = store.find_employees(|employee| employee.years_of_experience() >= 5);
        assert_eq!(ids(&seniors), vec![1, 2, 3]);
        assert_eq!(ids(&store.find_active_employees()), vec![1, 2, 4, 5]);
    }

    #[rstest]
    fn it_should_sort_by_experience_without_reordering_the_store() {
        let mut store = EmployeeStore::new();
        for (id, years) in [(1u32, 5), (2, 1), (3, 3)] {
            store
                .add_employee(EmployeeBuilder::new().employee_id(id).years_of_experience(years).build())
                .unwrap();
        }

        let sorted = store.get_employees_sorted_by_experience();

        let years: Vec<u32> = sorted.iter().map(Employee::years_of_experience).collect();
        assert_eq!(years, vec![1, 3, 5]);
        assert_eq!(ids(&store.get_all_employees()), vec![1, 2, 3]);
    }

    #[rstest]
    fn it_should_keep_insertion_order_for_equal_sort_keys() {
        let mut store = EmployeeStore::new();
        for (id, years) in [(30u32, 2), (10, 1), (20, 2), (40, 1)] {
            store
                .add_employee(EmployeeBuilder::new().employee_id(id).years_of_experience(years).build())
                .unwrap();
        }

        assert_eq!(ids(&store.get_employees_sorted_by_experience()), vec![10, 40, 30, 20]);
    }

    #[rstest]
    fn it_should_sort_by_salary_and_by_performance(store: EmployeeStore<u32>) {
        assert_eq!(ids(&store.get_employees_sorted_by_salary()), vec![3, 4, 5, 2, 1]);
        assert_eq!(ids(&store.get_employees_sorted_by_performance()), vec![4, 5, 3, 2, 1]);
    }

    #[rstest]
    #[case(2, vec![1, 2])]
    #[case(0, vec![])]
    #[case(10, vec![1, 2, 5, 3, 4])]
    fn it_should_return_the_highest_paid_first(
        store: EmployeeStore<u32>,
        #[case] n: usize,
        #[case] expected: Vec<u32>,
    ) {
        assert_eq!(ids(&store.get_top_paid_employees(n)), expected);
    }

    #[rstest]
    fn it_should_raise_only_high_performers() {
        let mut store = EmployeeStore::new();
        for (id, rating) in [(1u32, 2.0), (2, 3.5), (3, 4.0), (4, 5.0)] {
            store
                .add_employee(
                    EmployeeBuilder::new()
                        .employee_id(id)
                        .employee_salary(100.0)
                        .performance_rating(rating)
                        .build(),
                )
                .unwrap();
        }

        assert_eq!(store.give_salary_raise_to_high_performers(), 3);

        assert_eq!(store.get_employee(&1).unwrap().employee_salary(), 100.0);
        for id in [2, 3, 4] {
            let salary = store.get_employee(&id).unwrap().employee_salary();
            assert!((salary - 102.0).abs() < 1e-9, "salary of {id} was {salary}");
        }
    }

    #[rstest]
    fn it_should_average_salaries_per_department(store: EmployeeStore<u32>) {
        assert_eq!(store.calculate_average_salary_by_department("engineering"), 107_500.0);
        assert_eq!(store.calculate_average_salary_by_department("FINANCE"), 50_000.0);
        assert_eq!(store.calculate_average_salary_by_department("NoSuchDept"), 0.0);
    }

    #[rstest]
    fn it_should_iterate_lazily_over_every_employee(store: EmployeeStore<u32>) {
        let mut iterator = store.get_employee_iterator();
        assert_eq!(*iterator.next().unwrap().employee_id(), 1);
        assert_eq!(iterator.count(), 4);

        let names: Vec<&str> = (&store).into_iter().map(Employee::employee_name).collect();
        assert_eq!(names.len(), store.get_employee_count());
    }

    #[rstest]
    fn it_should_accept_any_hashable_key() {
        let mut store: EmployeeStore<String> = EmployeeStore::new();
        let employee = Employee::new("E-001".to_string(), "Key Test", Department::Support, 1.0, 1.0, 1, true);

        assert!(store.add_employee(employee).is_ok());
        assert!(store.get_employee(&"E-001".to_string()).is_some());
    }
}
