//! Error types.
//!
//! Construction failures ([`PersonError`]) mean the entity was never
//! created. Rating failures ([`RatingError`]) are expected outcomes: the
//! target is left untouched and the caller decides what to do.

use crate::person::Kind;

/// Failure to construct a [`Student`](crate::person::Student) or a mentor.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PersonError {
    /// A name, surname or gender argument was not text.
    #[error("{field} must be text, not {found}")]
    InvalidArgumentType {
        /// Constructor argument that was rejected.
        field: &'static str,
        /// Type name of the value that was passed.
        found: &'static str,
    },

    /// The argument was text but not an accepted value.
    #[error("{field} must be 'М' or 'Ж', got `{value}`")]
    InvalidArgumentValue {
        /// Constructor argument that was rejected.
        field: &'static str,
        /// The offending value, as passed.
        value: String,
    },
}

/// Reason a rating attempt was refused.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum RatingError {
    /// The rated entity is not of the kind this operation rates.
    #[error("cannot rate a {found}: expected a {expected}")]
    WrongTarget { expected: Kind, found: Kind },

    /// The student is not currently taking the course.
    #[error("course `{0}` is not in progress for the student")]
    CourseNotInProgress(String),

    /// The mentor is not attached to the course.
    #[error("course `{0}` is not attached to the mentor")]
    CourseNotAttached(String),

    /// The grade falls outside the grading scale.
    #[error("grade {grade} is outside {min}..={max}")]
    GradeOutOfRange { grade: i64, min: i64, max: i64 },
}
