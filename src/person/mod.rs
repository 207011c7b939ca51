//! People in the record book and the ratings they exchange.
//!
//! - [`Student`]: takes courses, receives homework grades, rates lecturers.
//! - [`Mentor`]: identity plus the courses it is attached to.
//! - [`Lecturer`]: a mentor that receives lecture grades from students.
//! - [`Reviewer`]: a mentor that grades students' homework.
//!
//! Course lists (`finished_courses`, `courses_in_progress`,
//! `courses_attached`) are plain public vectors. Enrollment is unchecked:
//! any string may be pushed.
//!
//! Rating operations validate every precondition before touching the
//! target, so a refused rating leaves all state exactly as it was.
//!
//! ```
//! use u_gradebook::person::{Lecturer, Reviewer, Student};
//!
//! let mut student = Student::new("ruoy", "eman", "ж").unwrap();
//! student.courses_in_progress.push("Python".into());
//!
//! let mut lecturer = Lecturer::new("some", "buddy").unwrap();
//! lecturer.courses_attached.push("Python".into());
//!
//! assert!(student.rate_lecture(&mut lecturer, "Python", 9).is_ok());
//! assert!(student.rate_lecture(&mut lecturer, "Python", 11).is_err());
//! assert_eq!(lecturer.grades()["Python"], vec![9]);
//!
//! let mut reviewer = Reviewer::new("cool", "mentor").unwrap();
//! reviewer.courses_attached.push("Python".into());
//! assert!(reviewer.rate_hw(&mut student, "Python", 10).is_ok());
//! ```

mod arg;
mod lecturer;
mod mentor;
mod ratee;
mod reviewer;
mod student;
mod types;

pub use arg::{normalize_name, Arg, Gender};
pub use lecturer::Lecturer;
pub use mentor::Mentor;
pub use ratee::Ratee;
pub use reviewer::Reviewer;
pub use student::Student;
pub use types::{Kind, Person};
