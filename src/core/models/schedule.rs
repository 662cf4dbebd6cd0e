//! Course schedule model

use super::SeatAssignment;
use crate::core::aggregates;
use serde::{Deserialize, Serialize};

/// The seat assignments scheduled for a single semester
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSchedule {
    /// Semester label (e.g., "Fall2025")
    pub semester: String,

    /// Seat assignments charged against this semester
    seats: Vec<SeatAssignment>,
}

impl CourseSchedule {
    /// Create an empty schedule for a semester
    #[must_use]
    pub const fn new(semester: String) -> Self {
        Self {
            semester,
            seats: Vec::new(),
        }
    }

    /// Add a seat assignment to the semester
    pub fn add_seat_assignment(&mut self, seat: SeatAssignment) {
        self.seats.push(seat);
    }

    /// Get the scheduled seat assignments
    #[must_use]
    pub fn seat_assignments(&self) -> &[SeatAssignment] {
        &self.seats
    }

    /// Total revenue charged across the semester's seats
    #[must_use]
    pub fn total_revenue(&self) -> u64 {
        aggregates::total_revenue(&self.seats)
    }
}
