//! The course value record stored in a planner.

use std::fmt;

use crate::error::CourseError;

/// Largest section number accepted (the signed-byte range).
pub const MAX_SECTION: i64 = i8::MAX as i64;

/// One academic course offering.
///
/// Courses have no identity beyond their fields: two courses are equal when
/// all five fields are equal. `Course::default()` yields an empty record to be
/// filled in through the setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Course {
    name: String,
    department: String,
    code: u32,
    section: u8,
    instructor: String,
}

impl Course {
    /// Build a course from all five fields, validating `code` and `section`.
    pub fn new(
        name: impl Into<String>,
        department: impl Into<String>,
        code: i64,
        section: i64,
        instructor: impl Into<String>,
    ) -> Result<Self, CourseError> {
        let mut course = Self {
            name: name.into(),
            department: department.into(),
            instructor: instructor.into(),
            ..Self::default()
        };
        course.set_code(code)?;
        course.set_section(section)?;
        Ok(course)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn code(&self) -> u32 {
        self.code
    }

    pub fn section(&self) -> u8 {
        self.section
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_department(&mut self, department: impl Into<String>) {
        self.department = department.into();
    }

    /// Set the course code. Fails without modifying the course when `code`
    /// is negative or does not fit in 32 bits.
    pub fn set_code(&mut self, code: i64) -> Result<(), CourseError> {
        if code < 0 {
            return Err(CourseError::NegativeCode(code));
        }
        self.code = u32::try_from(code).map_err(|_| CourseError::CodeOutOfRange(code))?;
        Ok(())
    }

    /// Set the section number. Fails without modifying the course when
    /// `section` is negative or above [`MAX_SECTION`].
    pub fn set_section(&mut self, section: i64) -> Result<(), CourseError> {
        if section < 0 {
            return Err(CourseError::NegativeSection(section));
        }
        if section > MAX_SECTION {
            return Err(CourseError::SectionOutOfRange(section));
        }
        self.section = section as u8;
        Ok(())
    }

    pub fn set_instructor(&mut self, instructor: impl Into<String>) {
        self.instructor = instructor.into();
    }
}

/// Short label such as `CSE 101.03`.
impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}.{:02}", self.department, self.code, self.section)
    }
}
