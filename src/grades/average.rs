//! Averaging over grade mappings and groups of people.

use super::types::{Graded, Grades};
use crate::person::{Lecturer, Student};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Arithmetic mean of every grade in the mapping, flattened across courses.
///
/// Returns `0.0` for an empty mapping or one whose sequences are all empty.
///
/// ```
/// use u_gradebook::grades::{avg_grade, Grades};
///
/// let mut grades = Grades::new();
/// assert_eq!(avg_grade(&grades), 0.0);
///
/// grades.insert("Python".into(), vec![10, 8]);
/// grades.insert("Git".into(), vec![9]);
/// assert!((avg_grade(&grades) - 9.0).abs() < 1e-10);
/// ```
pub fn avg_grade(grades: &Grades) -> f64 {
    let (sum, count) = grades
        .values()
        .flatten()
        .fold((0i128, 0usize), |(s, c), &g| (s + i128::from(g), c + 1));
    mean(sum, count)
}

/// Mean of the grades every student received for `course`.
///
/// `0.0` if none of them has a grade for it.
pub fn avg_students_grade(students: &[Student], course: &str) -> f64 {
    avg_course_grade(students, course)
}

/// Mean of the grades every lecturer received for `course`.
///
/// `0.0` if none of them has a grade for it.
pub fn avg_lecturers_grade(lecturers: &[Lecturer], course: &str) -> f64 {
    avg_course_grade(lecturers, course)
}

/// Mean of the grades recorded under `course` across a group of people.
///
/// With the `parallel` feature the per-person sums are computed with rayon.
#[cfg(not(feature = "parallel"))]
pub fn avg_course_grade<T: Graded>(people: &[T], course: &str) -> f64 {
    let (sum, count) = people
        .iter()
        .map(|p| course_totals(p, course))
        .fold((0, 0), |(s, c), (ps, pc)| (s + ps, c + pc));
    mean(sum, count)
}

/// Mean of the grades recorded under `course` across a group of people.
///
/// With the `parallel` feature the per-person sums are computed with rayon.
#[cfg(feature = "parallel")]
pub fn avg_course_grade<T: Graded + Sync>(people: &[T], course: &str) -> f64 {
    let (sum, count) = people
        .par_iter()
        .map(|p| course_totals(p, course))
        .reduce(|| (0, 0), |(s, c), (ps, pc)| (s + ps, c + pc));
    mean(sum, count)
}

// Sums are widened to i128 so no sequence of i64 grades can overflow.
fn course_totals<T: Graded>(person: &T, course: &str) -> (i128, usize) {
    let grades = person.course_grades(course);
    (grades.iter().map(|&g| i128::from(g)).sum(), grades.len())
}

fn mean(sum: i128, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum as f64 / count as f64
    }
}
