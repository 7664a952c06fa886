//! Shared fixtures for planner integration tests.
//!
//! Provides ready-made courses and planners so tests can focus on the
//! behaviour under test instead of building records field by field.

use planner_core::{Course, Planner};

/// Build a course, panicking on invalid numeric fields.
pub fn course(name: &str, department: &str, code: i64, section: i64, instructor: &str) -> Course {
    Course::new(name, department, code, section, instructor)
        .unwrap_or_else(|e| panic!("invalid test course {name:?}: {e}"))
}

/// A small mixed-department catalogue in a fixed order.
pub fn sample_courses() -> Vec<Course> {
    vec![
        course("Intro to Programming", "CSE", 114, 1, "Smith"),
        course("Calculus I", "AMS", 151, 2, "Noether"),
        course("Data Structures", "CSE", 214, 12, "Lee"),
        course("Linear Algebra", "AMS", 210, 3, "Gauss"),
        course("Systems Fundamentals", "CSE", 220, 1, "Ritchie"),
    ]
}

/// A default-capacity planner holding [`sample_courses`] at positions 1..=5.
pub fn sample_planner() -> Planner {
    let mut planner = Planner::new();
    for c in sample_courses() {
        planner
            .push_course(c)
            .unwrap_or_else(|e| panic!("failed to seed sample planner: {e}"));
    }
    planner
}

/// A planner filled to its capacity with distinct courses.
pub fn full_planner(capacity: usize) -> Planner {
    let mut planner = Planner::with_capacity(capacity);
    for i in 0..capacity {
        let c = course(&format!("Course {i}"), "GEN", 100 + i as i64, 1, "Staff");
        planner
            .push_course(c)
            .unwrap_or_else(|e| panic!("failed to fill planner at {i}: {e}"));
    }
    planner
}
