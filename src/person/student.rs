//! Students: enrolled in courses, graded by reviewers, rating lecturers.

use super::arg::{normalize_name, Arg, Gender};
use super::ratee::{check_grade, trace_outcome, Ratee};
use super::{Kind, Lecturer};
use crate::error::{PersonError, RatingError};
use crate::grades::{self, Grade, GradeScale, Graded, Grades};
use std::cmp::Ordering;
use std::fmt;

/// A student.
///
/// Name, surname and gender are fixed at construction. Course lists are
/// public and unchecked; the homework grades can only grow through
/// [`Reviewer::rate_hw`](super::Reviewer::rate_hw).
///
/// Students compare by average homework grade. Two students with the same
/// average are equal under `==` even if everything else differs.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Student {
    name: String,
    surname: String,
    gender: Gender,

    /// Courses already completed.
    pub finished_courses: Vec<String>,

    /// Courses currently being taken. Only these can be rated or graded.
    pub courses_in_progress: Vec<String>,

    grades: Grades,
}

impl Student {
    /// Creates a student with no courses and no grades.
    ///
    /// Name and surname are trimmed and title-cased; gender is trimmed,
    /// uppercased and must be `М` or `Ж`.
    ///
    /// # Errors
    /// - [`PersonError::InvalidArgumentType`] if any argument is not text.
    /// - [`PersonError::InvalidArgumentValue`] for an unknown gender code.
    pub fn new(
        name: impl Into<Arg>,
        surname: impl Into<Arg>,
        gender: impl Into<Arg>,
    ) -> Result<Self, PersonError> {
        let name = name.into().into_text("name")?;
        let surname = surname.into().into_text("surname")?;
        let gender: Gender = gender.into().into_text("gender")?.parse()?;
        Ok(Self {
            name: normalize_name(&name),
            surname: normalize_name(&surname),
            gender,
            finished_courses: Vec::new(),
            courses_in_progress: Vec::new(),
            grades: Grades::new(),
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

    /// Gender given at construction.
    pub fn gender(&self) -> Gender {
        self.gender
    }

    /// Homework grades received, per course.
    pub fn grades(&self) -> &Grades {
        &self.grades
    }

    /// Whether the student is currently taking `course`.
    pub fn is_in_progress(&self, course: &str) -> bool {
        self.courses_in_progress.iter().any(|c| c == course)
    }

    /// Rates a lecture on the default 0..=10 scale.
    ///
    /// See [`rate_lecture_with`](Self::rate_lecture_with).
    pub fn rate_lecture<'a>(
        &self,
        target: impl Into<Ratee<'a>>,
        course: &str,
        grade: Grade,
    ) -> Result<(), RatingError> {
        self.rate_lecture_with(&GradeScale::default(), target, course, grade)
    }

    /// Appends `grade` to the lecturer's grades for `course`.
    ///
    /// Succeeds only if the target is a [`Lecturer`], the course is in
    /// this student's `courses_in_progress`, the lecturer is attached to
    /// it, and the grade is on `scale`. On failure nothing is modified.
    pub fn rate_lecture_with<'a>(
        &self,
        scale: &GradeScale,
        target: impl Into<Ratee<'a>>,
        course: &str,
        grade: Grade,
    ) -> Result<(), RatingError> {
        let target: Ratee<'a> = target.into();
        let result = match target {
            Ratee::Lecturer(lecturer) => self
                .check_lecture(lecturer, scale, course, grade)
                .map(|()| lecturer.record_grade(course, grade)),
            other => Err(RatingError::WrongTarget {
                expected: Kind::Lecturer,
                found: other.kind(),
            }),
        };
        trace_outcome("rate_lecture", &self.name, course, grade, result)
    }

    fn check_lecture(
        &self,
        lecturer: &Lecturer,
        scale: &GradeScale,
        course: &str,
        grade: Grade,
    ) -> Result<(), RatingError> {
        if !self.is_in_progress(course) {
            return Err(RatingError::CourseNotInProgress(course.to_owned()));
        }
        if !lecturer.is_attached(course) {
            return Err(RatingError::CourseNotAttached(course.to_owned()));
        }
        check_grade(scale, grade)
    }

    pub(crate) fn record_grade(&mut self, course: &str, grade: Grade) {
        grades::record(&mut self.grades, course, grade);
    }
}

impl Graded for Student {
    fn grades(&self) -> &Grades {
        &self.grades
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.average_grade() == other.average_grade()
    }
}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.average_grade().partial_cmp(&other.average_grade())
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name: {}", self.name)?;
        writeln!(f, "Surname: {}", self.surname)?;
        writeln!(f, "Average homework grade: {:.2}", self.average_grade())?;
        writeln!(
            f,
            "Courses in progress: {}",
            self.courses_in_progress.join(", ")
        )?;
        write!(f, "Finished courses: {}", self.finished_courses.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::person::Reviewer;

    fn scenario() -> (Student, Lecturer) {
        let mut s = Student::new("Ruoy", "Eman", "Ж").unwrap();
        s.courses_in_progress.push("Python".into());
        s.courses_in_progress.push("Java".into());
        let mut l = Lecturer::new("Some", "Buddy").unwrap();
        l.courses_attached.push("Python".into());
        l.courses_attached.push("C++".into());
        (s, l)
    }

    #[test]
    fn test_new_normalizes() {
        let s = Student::new(" ruoy ", "EMAN", " ж").unwrap();
        assert_eq!(s.name(), "Ruoy");
        assert_eq!(s.surname(), "Eman");
        assert_eq!(s.gender(), Gender::Female);
        assert!(s.finished_courses.is_empty());
        assert!(s.courses_in_progress.is_empty());
        assert!(s.grades().is_empty());
    }

    #[test]
    fn test_new_rejects_wrong_types() {
        assert_eq!(
            Student::new(1i64, "Eman", "Ж").unwrap_err(),
            PersonError::InvalidArgumentType {
                field: "name",
                found: "int",
            }
        );
        assert_eq!(
            Student::new("Ruoy", 2.5, "Ж").unwrap_err(),
            PersonError::InvalidArgumentType {
                field: "surname",
                found: "float",
            }
        );
        assert_eq!(
            Student::new("Ruoy", "Eman", true).unwrap_err(),
            PersonError::InvalidArgumentType {
                field: "gender",
                found: "bool",
            }
        );
    }

    #[test]
    fn test_new_rejects_unknown_gender() {
        let err = Student::new("Ruoy", "Eman", "X").unwrap_err();
        assert!(matches!(
            err,
            PersonError::InvalidArgumentValue { field: "gender", .. }
        ));
    }

    #[test]
    fn test_rate_lecture_scenario() {
        let (s, mut l) = scenario();

        assert_eq!(s.rate_lecture(&mut l, "Python", 7), Ok(()));
        assert_eq!(l.grades().len(), 1);
        assert_eq!(l.grades()["Python"], vec![7]);

        assert_eq!(
            s.rate_lecture(&mut l, "Java", 8),
            Err(RatingError::CourseNotAttached("Java".into()))
        );
        assert_eq!(
            s.rate_lecture(&mut l, "C++", 8),
            Err(RatingError::CourseNotInProgress("C++".into()))
        );
        assert_eq!(l.grades()["Python"], vec![7]);
    }

    #[test]
    fn test_rate_lecture_wrong_target() {
        let (s, _) = scenario();
        let mut reviewer = Reviewer::new("Cool", "Mentor").unwrap();
        reviewer.courses_attached.push("Python".into());

        assert_eq!(
            s.rate_lecture(&mut reviewer, "Python", 7),
            Err(RatingError::WrongTarget {
                expected: Kind::Lecturer,
                found: Kind::Reviewer,
            })
        );

        let mut other = Student::new("A", "B", "М").unwrap();
        other.courses_in_progress.push("Python".into());
        assert!(s.rate_lecture(&mut other, "Python", 7).is_err());
        assert!(other.grades().is_empty());
    }

    #[test]
    fn test_rate_lecture_failure_repeated_is_noop() {
        let (s, mut l) = scenario();
        s.rate_lecture(&mut l, "Python", 6).unwrap();
        let before = l.grades().clone();

        let mut reviewer = Reviewer::new("Cool", "Mentor").unwrap();
        reviewer.courses_attached.push("Python".into());

        for _ in 0..2 {
            assert!(s.rate_lecture(&mut reviewer, "Python", 7).is_err());
            assert!(s.rate_lecture(&mut l, "Java", 7).is_err());
            assert!(s.rate_lecture(&mut l, "Python", 42).is_err());
            assert_eq!(l.grades(), &before);
            assert!(l.courses_attached == ["Python", "C++"]);
            assert!(reviewer.courses_attached == ["Python"]);
        }
    }

    #[test]
    fn test_rate_lecture_grade_bounds() {
        let (s, mut l) = scenario();
        for bad in [-1, 11, 100, i64::MIN] {
            assert!(matches!(
                s.rate_lecture(&mut l, "Python", bad),
                Err(RatingError::GradeOutOfRange { .. })
            ));
        }
        assert!(l.grades().is_empty());

        s.rate_lecture(&mut l, "Python", 0).unwrap();
        s.rate_lecture(&mut l, "Python", 10).unwrap();
        assert_eq!(l.grades()["Python"], vec![0, 10]);
    }

    #[test]
    fn test_rate_lecture_custom_scale() {
        let (s, mut l) = scenario();
        let scale = GradeScale::default().with_min(1).with_max(5);
        assert!(s.rate_lecture_with(&scale, &mut l, "Python", 0).is_err());
        assert!(s.rate_lecture_with(&scale, &mut l, "Python", 6).is_err());
        assert!(s.rate_lecture_with(&scale, &mut l, "Python", 5).is_ok());
        assert_eq!(l.grades()["Python"], vec![5]);
    }

    #[test]
    fn test_display() {
        let mut reviewer = Reviewer::new("Some", "Buddy").unwrap();
        reviewer.courses_attached.push("Python".into());

        let mut s = Student::new("Ruoy", "Eman", "Ж").unwrap();
        s.courses_in_progress.push("Python".into());
        s.courses_in_progress.push("Git".into());
        s.finished_courses.push("Введение в программирование".into());

        assert!(s.to_string().contains("Average homework grade: 0.00"));

        for g in [10, 10, 9] {
            reviewer.rate_hw(&mut s, "Python", g).unwrap();
        }
        assert_eq!(
            s.to_string(),
            "Name: Ruoy\n\
             Surname: Eman\n\
             Average homework grade: 9.67\n\
             Courses in progress: Python, Git\n\
             Finished courses: Введение в программирование"
        );
    }

    #[test]
    fn test_ordering_by_average() {
        let mut reviewer = Reviewer::new("R", "R").unwrap();
        reviewer.courses_attached.push("Python".into());

        let mut a = Student::new("A", "A", "М").unwrap();
        let mut b = Student::new("B", "B", "Ж").unwrap();
        a.courses_in_progress.push("Python".into());
        b.courses_in_progress.push("Python".into());

        assert!(a == b);

        reviewer.rate_hw(&mut a, "Python", 8).unwrap();
        reviewer.rate_hw(&mut b, "Python", 6).unwrap();
        assert!(a > b);
        assert!(b < a);
        assert!(a != b);

        reviewer.rate_hw(&mut b, "Python", 10).unwrap();
        assert!(a == b);
        assert_eq!(a.partial_cmp(&b), Some(Ordering::Equal));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_gender_code() {
        let s = Student::new("Ruoy", "Eman", "ж").unwrap();
        let json = serde_json::to_value(&s).unwrap();
        assert_eq!(json["gender"], "Ж");
        assert_eq!(json["name"], "Ruoy");

        let back: Student = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(back.gender(), Gender::Female);

        let mut bad = json;
        bad["gender"] = serde_json::Value::from("X");
        assert!(serde_json::from_value::<Student>(bad).is_err());
    }
}
