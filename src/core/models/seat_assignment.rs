//! Seat assignment model

use super::Course;
use serde::{Deserialize, Serialize};

/// Record of one student's enrollment in one course section
///
/// Created when a student enrolls and never mutated afterwards; the price is
/// the amount actually charged for the seat and feeds revenue aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatAssignment {
    /// The course the seat belongs to
    pub course: Course,

    /// Price charged for the seat
    pub price: u32,

    /// Identifier of the enrolled student
    pub student_id: String,
}

impl SeatAssignment {
    /// Create a new seat assignment
    ///
    /// # Arguments
    /// * `course` - The course being taken
    /// * `price` - Price charged for the seat
    /// * `student_id` - Identifier of the enrolled student
    #[must_use]
    pub const fn new(course: Course, price: u32, student_id: String) -> Self {
        Self {
            course,
            price,
            student_id,
        }
    }

    /// Get the course this seat belongs to
    #[must_use]
    pub const fn associated_course(&self) -> &Course {
        &self.course
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn course(number: &str) -> Course {
        Course::new(number.to_string(), format!("Course {number}"), 4).unwrap()
    }

    #[test]
    fn test_seat_assignment_creation() {
        let seat = SeatAssignment::new(course("INFO5100"), 1200, "001".to_string());

        assert_eq!(seat.price, 1200);
        assert_eq!(seat.student_id, "001");
        assert_eq!(seat.associated_course().number, "INFO5100");
    }

    #[test]
    fn test_zero_price_is_valid() {
        let seat = SeatAssignment::new(course("INFO5100"), 0, "001".to_string());
        assert_eq!(seat.price, 0);
    }
}
