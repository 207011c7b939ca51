//! Lecturers: mentors graded by their students.

use super::arg::Arg;
use super::{Mentor, Student};
use crate::error::PersonError;
use crate::grades::{self, Grade, Graded, Grades};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// A mentor who gives lectures and receives lecture grades.
///
/// Lecturers compare by average lecture grade, and only with other
/// lecturers: comparing with a [`Student`] is never equal and never
/// ordered.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lecturer {
    mentor: Mentor,
    grades: Grades,
}

impl Lecturer {
    /// Creates a lecturer with no attached courses and no grades.
    ///
    /// # Errors
    /// [`PersonError::InvalidArgumentType`] if either argument is not text.
    pub fn new(name: impl Into<Arg>, surname: impl Into<Arg>) -> Result<Self, PersonError> {
        Ok(Self {
            mentor: Mentor::new(name, surname)?,
            grades: Grades::new(),
        })
    }

    /// Lecture grades received, per course.
    pub fn grades(&self) -> &Grades {
        &self.grades
    }

    pub(crate) fn record_grade(&mut self, course: &str, grade: Grade) {
        grades::record(&mut self.grades, course, grade);
    }
}

impl Deref for Lecturer {
    type Target = Mentor;

    fn deref(&self) -> &Mentor {
        &self.mentor
    }
}

impl DerefMut for Lecturer {
    fn deref_mut(&mut self) -> &mut Mentor {
        &mut self.mentor
    }
}

impl AsRef<Mentor> for Lecturer {
    fn as_ref(&self) -> &Mentor {
        &self.mentor
    }
}

impl AsMut<Mentor> for Lecturer {
    fn as_mut(&mut self) -> &mut Mentor {
        &mut self.mentor
    }
}

impl Graded for Lecturer {
    fn grades(&self) -> &Grades {
        &self.grades
    }
}

impl PartialEq for Lecturer {
    fn eq(&self, other: &Self) -> bool {
        self.average_grade() == other.average_grade()
    }
}

impl PartialOrd for Lecturer {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.average_grade().partial_cmp(&other.average_grade())
    }
}

impl PartialEq<Student> for Lecturer {
    fn eq(&self, _: &Student) -> bool {
        false
    }
}

impl PartialOrd<Student> for Lecturer {
    fn partial_cmp(&self, _: &Student) -> Option<Ordering> {
        None
    }
}

impl PartialEq<Lecturer> for Student {
    fn eq(&self, _: &Lecturer) -> bool {
        false
    }
}

impl PartialOrd<Lecturer> for Student {
    fn partial_cmp(&self, _: &Lecturer) -> Option<Ordering> {
        None
    }
}

impl fmt::Display for Lecturer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.mentor)?;
        write!(f, "Average lecture grade: {:.2}", self.average_grade())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lecturer_with(grades: &[Grade]) -> Lecturer {
        let mut s = Student::new("S", "S", "М").unwrap();
        s.courses_in_progress.push("Python".into());
        let mut l = Lecturer::new("some", "buddy").unwrap();
        l.courses_attached.push("Python".into());
        for &g in grades {
            s.rate_lecture(&mut l, "Python", g).unwrap();
        }
        l
    }

    #[test]
    fn test_new_is_a_mentor() {
        let l = Lecturer::new("иван", "иванов").unwrap();
        let mentor: &Mentor = l.as_ref();
        assert_eq!(mentor.name(), "Иван");
        assert_eq!(l.surname(), "Иванов");
        assert!(l.courses_attached.is_empty());
        assert!(l.grades().is_empty());
    }

    fn attach(mentor: &mut impl AsMut<Mentor>, course: &str) {
        mentor.as_mut().courses_attached.push(course.into());
    }

    #[test]
    fn test_attach_through_mentor() {
        let mut l = Lecturer::new("A", "B").unwrap();
        attach(&mut l, "Rust");
        assert!(l.is_attached("Rust"));

        let s = {
            let mut s = Student::new("S", "S", "М").unwrap();
            s.courses_in_progress.push("Rust".into());
            s
        };
        s.rate_lecture(&mut l, "Rust", 8).unwrap();
        assert_eq!(l.grades()["Rust"], vec![8]);
    }

    #[test]
    fn test_display() {
        let l = lecturer_with(&[9, 10]);
        assert_eq!(
            l.to_string(),
            "Name: Some\nSurname: Buddy\nAverage lecture grade: 9.50"
        );
        let empty = Lecturer::new("A", "B").unwrap();
        assert!(empty.to_string().ends_with("Average lecture grade: 0.00"));
    }

    #[test]
    fn test_ordering() {
        let hi = lecturer_with(&[9, 9]);
        let lo = lecturer_with(&[2, 4]);
        let same = lecturer_with(&[10, 8]);
        assert!(hi > lo);
        assert!(lo < hi);
        assert!(hi == same);
    }

    #[test]
    fn test_cross_kind_comparison_unsupported() {
        let l = lecturer_with(&[5]);
        let mut s = Student::new("S", "S", "М").unwrap();
        s.courses_in_progress.push("Python".into());
        let mut r = crate::person::Reviewer::new("R", "R").unwrap();
        r.courses_attached.push("Python".into());
        r.rate_hw(&mut s, "Python", 5).unwrap();

        assert!(l != s);
        assert!(s != l);
        assert_eq!(l.partial_cmp(&s), None);
        assert_eq!(s.partial_cmp(&l), None);
    }
}
