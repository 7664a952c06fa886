//! Core data structures for the course planner: the [`Course`] value record,
//! the capacity-bounded [`Planner`] list, and its table rendering.

pub mod config;
pub mod course;
pub mod error;
pub mod planner;
pub mod table;

pub use config::PlannerConfig;
pub use course::Course;
pub use error::{CourseError, ErrorKind, PlannerError};
pub use planner::{MAX_COURSES, Planner, filter};
