// Sort keys for employee listings. Plain functions, meant for `sort_by`.
//
// Floating point attributes compare with `total_cmp` so that every listing has a total order.

use crate::core::employee::Employee;
use std::cmp::Ordering;

pub fn by_experience<K>(a: &Employee<K>, b: &Employee<K>) -> Ordering {
    a.cmp_experience(b)
}

pub fn by_salary<K>(a: &Employee<K>, b: &Employee<K>) -> Ordering {
    a.employee_salary().total_cmp(&b.employee_salary())
}

pub fn by_performance<K>(a: &Employee<K>, b: &Employee<K>) -> Ordering {
    a.performance_rating().total_cmp(&b.performance_rating())
}

pub fn by_salary_desc<K>(a: &Employee<K>, b: &Employee<K>) -> Ordering {
    by_salary(b, a)
}
