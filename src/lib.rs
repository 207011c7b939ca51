//! In-memory record book for students and their mentors.
//!
//! Students, lecturers and reviewers rate each other per course:
//!
//! - **People** ([`person`]): [`Student`](person::Student),
//!   [`Mentor`](person::Mentor) and its two variants
//!   [`Lecturer`](person::Lecturer) and [`Reviewer`](person::Reviewer).
//!   Students rate lectures; reviewers grade homework. Both operations
//!   validate every precondition and either append one grade or change
//!   nothing.
//! - **Grades** ([`grades`]): per-course grade sequences, the
//!   [`GradeScale`](grades::GradeScale) a rating must fall on, and the
//!   averaging functions.
//! - **Ranking** ([`ranking`]): ordering students or lecturers by their
//!   average grade.
//!
//! # Example
//!
//! ```
//! use u_gradebook::grades::avg_students_grade;
//! use u_gradebook::person::{Reviewer, Student};
//!
//! let mut reviewer = Reviewer::new("Some", "Buddy").unwrap();
//! reviewer.courses_attached.push("Python".into());
//!
//! let mut alice = Student::new("alice", "smith", "Ж").unwrap();
//! alice.courses_in_progress.push("Python".into());
//! reviewer.rate_hw(&mut alice, "Python", 10).unwrap();
//! reviewer.rate_hw(&mut alice, "Python", 8).unwrap();
//!
//! assert_eq!(avg_students_grade(&[alice], "Python"), 9.0);
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` for every entity.
//! - `parallel`: course averages over large groups computed with rayon.
//!
//! The model is single-threaded and does no I/O. Rating attempts emit
//! `tracing` debug events; installing a subscriber is up to the caller.

pub mod error;
pub mod grades;
pub mod person;
pub mod ranking;

pub use error::{PersonError, RatingError};
