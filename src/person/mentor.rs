//! Shared mentor identity.

use super::arg::{normalize_name, Arg};
use crate::error::PersonError;
use std::fmt;

/// Identity and course attachments shared by [`Lecturer`](super::Lecturer)
/// and [`Reviewer`](super::Reviewer).
///
/// Both embed a `Mentor` and dereference to it, so `lecturer.name()` and
/// `reviewer.courses_attached` work directly. A bare `Mentor` can be
/// constructed too, but it neither rates nor is rated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mentor {
    name: String,
    surname: String,

    /// Courses this mentor is responsible for.
    pub courses_attached: Vec<String>,
}

impl Mentor {
    /// Creates a mentor with no attached courses.
    ///
    /// Name and surname are trimmed and title-cased.
    ///
    /// # Errors
    /// [`PersonError::InvalidArgumentType`] if either argument is not text.
    pub fn new(name: impl Into<Arg>, surname: impl Into<Arg>) -> Result<Self, PersonError> {
        let name = name.into().into_text("name")?;
        let surname = surname.into().into_text("surname")?;
        Ok(Self {
            name: normalize_name(&name),
            surname: normalize_name(&surname),
            courses_attached: Vec::new(),
        })
    }

    /// First name, normalized.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Last name, normalized.
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Whether this mentor is attached to `course`.
    pub fn is_attached(&self, course: &str) -> bool {
        self.courses_attached.iter().any(|c| c == course)
    }
}

impl fmt::Display for Mentor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}\nSurname: {}", self.name, self.surname)
    }
}
