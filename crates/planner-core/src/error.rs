//! Error types raised by the planner core.
//!
//! Every failure maps onto one [`ErrorKind`] so callers can react to the
//! category without matching on individual variants.

use std::fmt;

use thiserror::Error;

/// Coarse category of a failure, shared by the core and the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A numeric course field was assigned an invalid value.
    Validation,
    /// A position fell outside the currently valid range (including the
    /// empty-planner case).
    OutOfRange,
    /// An add was attempted on a planner already at capacity.
    PlannerFull,
    /// User-supplied text could not be parsed as an integer.
    InputFormat,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Validation => "validation",
            Self::OutOfRange => "out_of_range",
            Self::PlannerFull => "planner_full",
            Self::InputFormat => "input_format",
        };
        f.write_str(s)
    }
}

/// Errors raised when assigning a course's numeric fields.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourseError {
    #[error("Invalid Input. Code can't be negative.")]
    NegativeCode(i64),

    #[error("Invalid input. Code {0} is too large.")]
    CodeOutOfRange(i64),

    #[error("Invalid section. Section can't be negative.")]
    NegativeSection(i64),

    #[error("Invalid section. Section {0} exceeds the maximum of 127.")]
    SectionOutOfRange(i64),
}

impl CourseError {
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::Validation
    }
}

/// Errors raised by positional planner operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlannerError {
    #[error("Error: Planner is empty.")]
    Empty,

    #[error("Invalid position {position}: not within the valid range [1, {max}].")]
    OutOfRange { position: usize, max: usize },

    #[error("Planner is full. No more room for additional course.")]
    Full { capacity: usize },
}

impl PlannerError {
    /// `Empty` is reported with its own message but belongs to the
    /// out-of-range kind.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Empty | Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::Full { .. } => ErrorKind::PlannerFull,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_out_of_range_share_a_kind() {
        assert_eq!(PlannerError::Empty.kind(), ErrorKind::OutOfRange);
        assert_eq!(
            PlannerError::OutOfRange { position: 9, max: 2 }.kind(),
            ErrorKind::OutOfRange
        );
        assert_eq!(PlannerError::Full { capacity: 50 }.kind(), ErrorKind::PlannerFull);
    }

    #[test]
    fn out_of_range_message_names_the_range() {
        let err = PlannerError::OutOfRange { position: 7, max: 3 };
        assert_eq!(
            err.to_string(),
            "Invalid position 7: not within the valid range [1, 3]."
        );
    }

    #[test]
    fn course_errors_are_validation_kind() {
        assert_eq!(CourseError::NegativeCode(-1).kind(), ErrorKind::Validation);
        assert_eq!(CourseError::SectionOutOfRange(200).kind(), ErrorKind::Validation);
    }

    #[test]
    fn kind_display_is_snake_case() {
        assert_eq!(ErrorKind::PlannerFull.to_string(), "planner_full");
        assert_eq!(ErrorKind::InputFormat.to_string(), "input_format");
    }
}
