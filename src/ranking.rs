//! Ranking graded entities by average grade.
//!
//! All sorts here are stable, so people with equal averages keep their
//! relative input order. That is an artifact of the sort, not a promise:
//! callers needing a deterministic tie order must break ties themselves.

use crate::grades::Graded;
use std::cmp::Ordering;

/// Direction of a ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Lowest average first.
    Ascending,

    /// Highest average first.
    #[default]
    Descending,
}

fn compare_averages<T: Graded>(a: &T, b: &T, order: SortOrder) -> Ordering {
    let (x, y) = (a.average_grade(), b.average_grade());
    let ord = x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    match order {
        SortOrder::Ascending => ord,
        SortOrder::Descending => ord.reverse(),
    }
}

/// Sorts people in place by average grade.
///
/// ```
/// use u_gradebook::person::{Lecturer, Student};
/// use u_gradebook::ranking::{sort_by_average, SortOrder};
///
/// let mut s = Student::new("A", "B", "М").unwrap();
/// s.courses_in_progress.push("Go".into());
///
/// let mut lecturers: Vec<Lecturer> = (0..3)
///     .map(|i| {
///         let mut l = Lecturer::new(format!("L{i}"), "X").unwrap();
///         l.courses_attached.push("Go".into());
///         l
///     })
///     .collect();
/// s.rate_lecture(&mut lecturers[0], "Go", 4).unwrap();
/// s.rate_lecture(&mut lecturers[2], "Go", 9).unwrap();
///
/// sort_by_average(&mut lecturers, SortOrder::Descending);
/// assert_eq!(lecturers[0].name(), "L2");
/// assert_eq!(lecturers[2].name(), "L1");
/// ```
pub fn sort_by_average<T: Graded>(people: &mut [T], order: SortOrder) {
    people.sort_by(|a, b| compare_averages(a, b, order));
}

/// Returns references to `people` ordered by average grade.
pub fn ranked<T: Graded>(people: &[T], order: SortOrder) -> Vec<&T> {
    let mut refs: Vec<&T> = people.iter().collect();
    refs.sort_by(|a, b| compare_averages(*a, *b, order));
    refs
}

/// Returns the person with the highest average, `None` if empty.
///
/// On a tie the earliest such person wins.
pub fn best<T: Graded>(people: &[T]) -> Option<&T> {
    ranked(people, SortOrder::Descending).first().copied()
}
