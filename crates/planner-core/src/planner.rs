//! The capacity-bounded, ordered course container.
//!
//! Positions are 1-indexed at the API surface. The occupied range is always
//! contiguous from the first slot, so the backing vector holds exactly
//! `size()` entries and capacity is enforced explicitly rather than by
//! preallocated storage.
//!
//! Entries are shared [`Arc<Course>`] handles. [`Planner::make_copy`]
//! duplicates the container and its handles, not the courses themselves, so a
//! planner and its backup may point at the same course values. Courses are
//! never mutated once inserted, which keeps that aliasing unobservable.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::PlannerConfig;
use crate::course::Course;
use crate::error::PlannerError;
use crate::table;

/// Default maximum number of courses in a planner.
pub const MAX_COURSES: usize = PlannerConfig::DEFAULT_CAPACITY;

/// An ordered list of courses with a fixed maximum size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Planner {
    capacity: usize,
    entries: Vec<Arc<Course>>,
}

impl Planner {
    /// Create an empty planner holding up to [`MAX_COURSES`] courses.
    pub fn new() -> Self {
        Self::with_capacity(MAX_COURSES)
    }

    /// Create an empty planner holding up to `capacity` courses.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::new(),
        }
    }

    /// Create an empty planner sized by `config`.
    ///
    /// The default config gives the standard [`MAX_COURSES`] ceiling; any other
    /// capacity moves the point at which [`PlannerError::Full`] is reported.
    pub fn from_config(config: &PlannerConfig) -> Self {
        Self::with_capacity(config.capacity)
    }

    /// Number of occupied slots.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.len() >= self.capacity
    }

    /// Insert `course` so that it becomes the entry at `position`.
    ///
    /// Valid positions are `1..=size() + 1`; entries at or after `position`
    /// shift one slot toward the end. A full planner is rejected before the
    /// position is looked at.
    pub fn add_course(
        &mut self,
        course: impl Into<Arc<Course>>,
        position: usize,
    ) -> Result<(), PlannerError> {
        if self.is_full() {
            return Err(PlannerError::Full {
                capacity: self.capacity,
            });
        }

        let max = self.entries.len() + 1;
        if position == 0 || position > max {
            return Err(PlannerError::OutOfRange { position, max });
        }

        self.entries.insert(position - 1, course.into());
        debug!(position, size = self.entries.len(), "course added");
        Ok(())
    }

    /// Append `course` after the last occupied slot.
    pub fn push_course(&mut self, course: impl Into<Arc<Course>>) -> Result<(), PlannerError> {
        self.add_course(course, self.entries.len() + 1)
    }

    /// Remove and return the entry at `position`.
    ///
    /// Entries after `position` shift one slot toward the start.
    pub fn remove_course(&mut self, position: usize) -> Result<Arc<Course>, PlannerError> {
        self.check_occupied(position)?;
        let removed = self.entries.remove(position - 1);
        debug!(position, size = self.entries.len(), "course removed");
        Ok(removed)
    }

    /// Borrow the entry at `position`, which must lie in `1..=size()`.
    pub fn get_course(&self, position: usize) -> Result<&Arc<Course>, PlannerError> {
        self.check_occupied(position)?;
        Ok(&self.entries[position - 1])
    }

    /// Whether any occupied slot holds a course equal to `course`.
    pub fn exists(&self, course: &Course) -> bool {
        self.index(course).is_some()
    }

    /// 0-indexed slot of the first course equal to `course`.
    pub fn index(&self, course: &Course) -> Option<usize> {
        self.entries.iter().position(|entry| entry.as_ref() == course)
    }

    /// 1-indexed position of the first course equal to `course`.
    pub fn position_of(&self, course: &Course) -> Option<usize> {
        self.index(course).map(|idx| idx + 1)
    }

    /// Return an independent planner sharing this planner's course handles.
    pub fn make_copy(&self) -> Planner {
        debug!(size = self.entries.len(), "planner copied");
        Planner {
            capacity: self.capacity,
            entries: self.entries.clone(),
        }
    }

    /// Iterate over `(position, course)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &Arc<Course>)> {
        self.entries.iter().enumerate().map(|(idx, c)| (idx + 1, c))
    }

    fn check_occupied(&self, position: usize) -> Result<(), PlannerError> {
        if self.entries.is_empty() {
            return Err(PlannerError::Empty);
        }
        let max = self.entries.len();
        if position == 0 || position > max {
            return Err(PlannerError::OutOfRange { position, max });
        }
        Ok(())
    }
}

impl Default for Planner {
    fn default() -> Self {
        Self::new()
    }
}

/// Render only the entries whose department matches `department` exactly.
///
/// Each row keeps its position in the full planner.
pub fn filter(planner: &Planner, department: &str) -> String {
    let mut out = table::header();
    for (position, course) in planner.iter() {
        if course.department() == department {
            out.push_str(&table::row(position, course));
        }
    }
    out
}

/// The full table: header plus one row per occupied slot.
impl fmt::Display for Planner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&table::header())?;
        for (position, course) in self.iter() {
            f.write_str(&table::row(position, course))?;
        }
        Ok(())
    }
}
