//! Entity kinds and the tagged [`Person`] wrapper.

use super::{Lecturer, Mentor, Reviewer, Student};
use crate::grades::Grades;
use std::cmp::Ordering;
use std::fmt;

/// The concrete kind of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    Student,
    Mentor,
    Lecturer,
    Reviewer,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Kind::Student => "Student",
            Kind::Mentor => "Mentor",
            Kind::Lecturer => "Lecturer",
            Kind::Reviewer => "Reviewer",
        };
        f.write_str(s)
    }
}

/// Any entity of the record book, for mixed collections.
///
/// Comparison is only defined between two students or two lecturers;
/// every other pairing yields `None` from [`Person::compare`].
///
/// `==` follows `compare`, so it is not reflexive: a mentor or reviewer
/// is never equal to anything, itself included.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Person {
    Student(Student),
    Mentor(Mentor),
    Lecturer(Lecturer),
    Reviewer(Reviewer),
}

impl Person {
    pub fn kind(&self) -> Kind {
        match self {
            Person::Student(_) => Kind::Student,
            Person::Mentor(_) => Kind::Mentor,
            Person::Lecturer(_) => Kind::Lecturer,
            Person::Reviewer(_) => Kind::Reviewer,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Person::Student(s) => s.name(),
            Person::Mentor(m) => m.name(),
            Person::Lecturer(l) => l.name(),
            Person::Reviewer(r) => r.name(),
        }
    }

    pub fn surname(&self) -> &str {
        match self {
            Person::Student(s) => s.surname(),
            Person::Mentor(m) => m.surname(),
            Person::Lecturer(l) => l.surname(),
            Person::Reviewer(r) => r.surname(),
        }
    }

    /// Grades received, for the kinds that receive any.
    pub fn grades(&self) -> Option<&Grades> {
        match self {
            Person::Student(s) => Some(s.grades()),
            Person::Lecturer(l) => Some(l.grades()),
            Person::Mentor(_) | Person::Reviewer(_) => None,
        }
    }

    /// Orders two people by average grade.
    ///
    /// `None` when the pair is not comparable: different kinds, or a kind
    /// without grades.
    pub fn compare(&self, other: &Person) -> Option<Ordering> {
        match (self, other) {
            (Person::Student(a), Person::Student(b)) => a.partial_cmp(b),
            (Person::Lecturer(a), Person::Lecturer(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.compare(other)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Person::Student(s) => fmt::Display::fmt(s, f),
            Person::Mentor(m) => fmt::Display::fmt(m, f),
            Person::Lecturer(l) => fmt::Display::fmt(l, f),
            Person::Reviewer(r) => fmt::Display::fmt(r, f),
        }
    }
}

impl From<Student> for Person {
    fn from(s: Student) -> Self {
        Person::Student(s)
    }
}

impl From<Mentor> for Person {
    fn from(m: Mentor) -> Self {
        Person::Mentor(m)
    }
}

impl From<Lecturer> for Person {
    fn from(l: Lecturer) -> Self {
        Person::Lecturer(l)
    }
}

impl From<Reviewer> for Person {
    fn from(r: Reviewer) -> Self {
        Person::Reviewer(r)
    }
}
