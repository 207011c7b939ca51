//! Grade storage and aggregation.
//!
//! A [`Grades`] mapping holds, per course, the append-only sequence of
//! grades an entity has received. Everything that needs "the average
//! grade" of an entity goes through [`avg_grade`]: comparisons, ranking
//! and rendering alike.
//!
//! Aggregation never rounds. Rounding to two decimals is done only when
//! an entity is rendered with `Display`.

mod average;
mod config;
mod types;

pub use average::{avg_course_grade, avg_grade, avg_lecturers_grade, avg_students_grade};
pub use config::GradeScale;
pub use types::{Grade, Graded, Grades};

pub(crate) use types::record;
