//! The target of a rating operation.

use super::{Kind, Lecturer, Mentor, Person, Reviewer, Student};
use crate::error::RatingError;
use crate::grades::{Grade, GradeScale};

/// A mutable borrow of whatever entity is being rated.
///
/// Rating operations accept `impl Into<Ratee>`, so any entity can be
/// passed and a wrong kind is reported as [`RatingError::WrongTarget`]
/// rather than rejected by the type checker.
#[derive(Debug)]
pub enum Ratee<'a> {
    Student(&'a mut Student),
    Mentor(&'a mut Mentor),
    Lecturer(&'a mut Lecturer),
    Reviewer(&'a mut Reviewer),
}

impl Ratee<'_> {
    pub fn kind(&self) -> Kind {
        match self {
            Ratee::Student(_) => Kind::Student,
            Ratee::Mentor(_) => Kind::Mentor,
            Ratee::Lecturer(_) => Kind::Lecturer,
            Ratee::Reviewer(_) => Kind::Reviewer,
        }
    }
}

impl<'a> From<&'a mut Student> for Ratee<'a> {
    fn from(s: &'a mut Student) -> Self {
        Ratee::Student(s)
    }
}

impl<'a> From<&'a mut Mentor> for Ratee<'a> {
    fn from(m: &'a mut Mentor) -> Self {
        Ratee::Mentor(m)
    }
}

impl<'a> From<&'a mut Lecturer> for Ratee<'a> {
    fn from(l: &'a mut Lecturer) -> Self {
        Ratee::Lecturer(l)
    }
}

impl<'a> From<&'a mut Reviewer> for Ratee<'a> {
    fn from(r: &'a mut Reviewer) -> Self {
        Ratee::Reviewer(r)
    }
}

impl<'a> From<&'a mut Person> for Ratee<'a> {
    fn from(p: &'a mut Person) -> Self {
        match p {
            Person::Student(s) => Ratee::Student(s),
            Person::Mentor(m) => Ratee::Mentor(m),
            Person::Lecturer(l) => Ratee::Lecturer(l),
            Person::Reviewer(r) => Ratee::Reviewer(r),
        }
    }
}

pub(super) fn check_grade(scale: &GradeScale, grade: Grade) -> Result<(), RatingError> {
    if scale.contains(grade) {
        Ok(())
    } else {
        Err(RatingError::GradeOutOfRange {
            grade,
            min: scale.min,
            max: scale.max,
        })
    }
}

/// Emits the debug event for a rating attempt and passes the result through.
pub(super) fn trace_outcome(
    operation: &'static str,
    rater: &str,
    course: &str,
    grade: Grade,
    result: Result<(), RatingError>,
) -> Result<(), RatingError> {
    match &result {
        Ok(()) => tracing::debug!(operation, rater, course, grade, "rating recorded"),
        Err(err) => tracing::debug!(operation, rater, course, grade, %err, "rating refused"),
    }
    result
}
