//! Fixed-width table rendering for planner listings.
//!
//! Header and body columns have independent fixed widths.

use crate::course::Course;

/// Width of the dashed rule separating header and body.
pub const RULE_WIDTH: usize = 82;

/// Column labels followed by the dashed rule.
pub fn header() -> String {
    format!(
        "{:<5}{:<25}{:<12}{:<6}{:<9}{:<30}\n{}\n",
        "No.",
        "Course Name",
        "Department",
        "Code",
        "Section",
        "Instructor",
        "-".repeat(RULE_WIDTH)
    )
}

/// One table line for the course at 1-indexed `position`.
pub fn row(position: usize, course: &Course) -> String {
    format!(
        "{:<5}{:<25}{:<12}{:<11}{:<4}{:<30}\n",
        position,
        course.name(),
        course.department(),
        course.code(),
        format!("{:02}", course.section()),
        course.instructor()
    )
}

/// A header followed by a single row.
pub fn single(position: usize, course: &Course) -> String {
    let mut table = header();
    table.push_str(&row(position, course));
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_has_labels_and_rule() {
        let header = header();
        let mut lines = header.lines();
        let labels = lines.next().unwrap();
        assert!(labels.starts_with("No.  Course Name"));
        assert!(labels.contains("Department  Code  Section  Instructor"));
        assert_eq!(lines.next().unwrap(), "-".repeat(82));
        assert!(lines.next().is_none());
    }

    #[test]
    fn row_pads_columns_and_section() {
        let course = Course::new("Intro", "CSE", 101, 7, "Smith").unwrap();
        let line = row(4, &course);
        assert_eq!(
            line,
            format!(
                "{:<5}{:<25}{:<12}{:<11}{:<4}{:<30}\n",
                "4", "Intro", "CSE", "101", "07", "Smith"
            )
        );
        assert_eq!(&line[..5], "4    ");
        assert_eq!(&line[42..53], "101        ");
        assert_eq!(&line[53..57], "07  ");
    }

    #[test]
    fn single_is_header_plus_row() {
        let course = Course::new("Intro", "CSE", 101, 12, "Smith").unwrap();
        let table = single(2, &course);
        assert_eq!(table.lines().count(), 3);
        assert!(table.ends_with(&row(2, &course)));
    }
}
