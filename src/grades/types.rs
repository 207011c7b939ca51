//! Core types for graded entities.

use std::collections::BTreeMap;

/// A single grade value.
pub type Grade = i64;

/// Course name to the grades received for it, in the order received.
///
/// A course only has an entry once a grade has been recorded for it.
pub type Grades = BTreeMap<String, Vec<Grade>>;

/// An entity that receives grades.
///
/// Implemented by [`Student`](crate::person::Student) (homework grades)
/// and [`Lecturer`](crate::person::Lecturer) (lecture grades).
pub trait Graded {
    /// Returns the grades received, per course.
    fn grades(&self) -> &Grades;

    /// Mean of every grade received, across all courses.
    ///
    /// `0.0` when nothing has been graded yet.
    fn average_grade(&self) -> f64 {
        super::avg_grade(self.grades())
    }

    /// Grades received for one course, empty if none.
    fn course_grades(&self, course: &str) -> &[Grade] {
        self.grades().get(course).map_or(&[], Vec::as_slice)
    }
}

/// Appends `grade` under `course`, creating the entry on first use.
pub(crate) fn record(grades: &mut Grades, course: &str, grade: Grade) {
    grades.entry(course.to_owned()).or_default().push(grade);
}
