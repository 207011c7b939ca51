//! Reviewers: mentors who grade homework.

use super::arg::Arg;
use super::ratee::{check_grade, trace_outcome, Ratee};
use super::{Kind, Mentor, Student};
use crate::error::{PersonError, RatingError};
use crate::grades::{Grade, GradeScale};
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A mentor who grades students' homework.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reviewer {
    mentor: Mentor,
}

impl Reviewer {
    /// Creates a reviewer with no attached courses.
    ///
    /// # Errors
    /// [`PersonError::InvalidArgumentType`] if either argument is not text.
    pub fn new(name: impl Into<Arg>, surname: impl Into<Arg>) -> Result<Self, PersonError> {
        Ok(Self {
            mentor: Mentor::new(name, surname)?,
        })
    }

    /// Grades homework on the default 0..=10 scale.
    ///
    /// See [`rate_hw_with`](Self::rate_hw_with).
    pub fn rate_hw<'a>(
        &self,
        target: impl Into<Ratee<'a>>,
        course: &str,
        grade: Grade,
    ) -> Result<(), RatingError> {
        self.rate_hw_with(&GradeScale::default(), target, course, grade)
    }

    /// Appends `grade` to the student's grades for `course`.
    ///
    /// Succeeds only if the target is a [`Student`], this reviewer is
    /// attached to the course, the student has it in progress, and the
    /// grade is on `scale`. On failure nothing is modified.
    pub fn rate_hw_with<'a>(
        &self,
        scale: &GradeScale,
        target: impl Into<Ratee<'a>>,
        course: &str,
        grade: Grade,
    ) -> Result<(), RatingError> {
        let target: Ratee<'a> = target.into();
        let result = match target {
            Ratee::Student(student) => self
                .check_hw(student, scale, course, grade)
                .map(|()| student.record_grade(course, grade)),
            other => Err(RatingError::WrongTarget {
                expected: Kind::Student,
                found: other.kind(),
            }),
        };
        trace_outcome("rate_hw", self.name(), course, grade, result)
    }

    fn check_hw(
        &self,
        student: &Student,
        scale: &GradeScale,
        course: &str,
        grade: Grade,
    ) -> Result<(), RatingError> {
        if !self.is_attached(course) {
            return Err(RatingError::CourseNotAttached(course.to_owned()));
        }
        if !student.is_in_progress(course) {
            return Err(RatingError::CourseNotInProgress(course.to_owned()));
        }
        check_grade(scale, grade)
    }
}

impl Deref for Reviewer {
    type Target = Mentor;

    fn deref(&self) -> &Mentor {
        &self.mentor
    }
}

impl DerefMut for Reviewer {
    fn deref_mut(&mut self) -> &mut Mentor {
        &mut self.mentor
    }
}

impl AsRef<Mentor> for Reviewer {
    fn as_ref(&self) -> &Mentor {
        &self.mentor
    }
}

impl AsMut<Mentor> for Reviewer {
    fn as_mut(&mut self) -> &mut Mentor {
        &mut self.mentor
    }
}

impl fmt::Display for Reviewer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.mentor, f)
    }
}
