//! Degree model and requirement validator

use super::{Course, SeatAssignment, Transcript};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Represents a degree program with its core and elective course lists
///
/// The validation operations are pure functions of `(Degree, Transcript)`:
/// they never mutate either side and are idempotent over a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Degree {
    /// Degree title (e.g., "MS Information Systems")
    pub title: String,

    /// Courses every degree-seeking student must complete
    core_list: Vec<Course>,

    /// Courses that count toward elective credit
    electives: Vec<Course>,
}

impl Degree {
    /// Create a new degree with empty core and elective lists
    #[must_use]
    pub const fn new(title: String) -> Self {
        Self {
            title,
            core_list: Vec::new(),
            electives: Vec::new(),
        }
    }

    /// Add a course to the core list
    ///
    /// Duplicate course numbers are ignored: a second entry would be
    /// semantically redundant, not an error.
    pub fn add_core_course(&mut self, course: Course) {
        if !self.core_list.contains(&course) {
            self.core_list.push(course);
        }
    }

    /// Add a course to the elective list (duplicates ignored)
    pub fn add_elective_course(&mut self, course: Course) {
        if !self.electives.contains(&course) {
            self.electives.push(course);
        }
    }

    /// Get the core course list
    #[must_use]
    pub fn core_courses(&self) -> &[Course] {
        &self.core_list
    }

    /// Get the elective course list
    #[must_use]
    pub fn elective_courses(&self) -> &[Course] {
        &self.electives
    }

    /// Check that the core and elective lists are disjoint
    ///
    /// # Errors
    /// Returns `DomainError::CoreElectiveOverlap` naming the first course
    /// found in both lists.
    pub fn validate(&self) -> Result<(), DomainError> {
        for course in &self.core_list {
            if self.electives.contains(course) {
                return Err(DomainError::CoreElectiveOverlap {
                    degree: self.title.clone(),
                    course: course.number.clone(),
                });
            }
        }
        Ok(())
    }

    /// Check whether a single core course appears on the transcript
    ///
    /// True iff at least one seat assignment references a course equal by
    /// number to `course`. Short-circuits on the first match; transcript
    /// order does not affect the result.
    #[must_use]
    pub fn is_core_satisfied(&self, transcript: &Transcript, course: &Course) -> bool {
        transcript
            .seat_assignments()
            .iter()
            .any(|sa| sa.associated_course() == course)
    }

    /// Check whether every core course appears on the transcript
    ///
    /// An empty core list validates trivially. Short-circuits on the first
    /// unsatisfied core course.
    #[must_use]
    pub fn validate_core_classes(&self, transcript: &Transcript) -> bool {
        for course in &self.core_list {
            if !self.is_core_satisfied(transcript, course) {
                crate::debug!(
                    "degree '{}': core course '{}' missing from transcript of student {}",
                    self.title,
                    course.number,
                    transcript.student_id
                );
                return false;
            }
        }
        true
    }

    /// Check whether a seat assignment's course is in the elective list
    #[must_use]
    pub fn is_elective_satisfied(&self, seat: &SeatAssignment) -> bool {
        self.electives.contains(seat.associated_course())
    }

    /// Count the seat assignments whose course is in the elective list
    ///
    /// Duplicate enrollments in the same elective course each count
    /// separately; the count is over seats, not distinct courses.
    #[must_use]
    pub fn total_elective_courses_taken(&self, transcript: &Transcript) -> usize {
        transcript
            .seat_assignments()
            .iter()
            .filter(|sa| self.is_elective_satisfied(sa))
            .count()
    }

    /// Decide whether the transcript qualifies the student for graduation
    ///
    /// Core-course satisfaction is the sole determining condition. Elective
    /// completion and aggregate credit hours are intentionally not gated
    /// here; consumers that assume a stricter graduation policy must gate
    /// on `total_elective_courses_taken` and credit totals separately.
    #[must_use]
    pub fn is_student_ready_to_graduate(&self, transcript: &Transcript) -> bool {
        self.validate_core_classes(transcript)
    }
}
