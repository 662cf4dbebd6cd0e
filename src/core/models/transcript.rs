//! Transcript model

use super::SeatAssignment;
use serde::{Deserialize, Serialize};

/// Ordered history of a single student's seat assignments
///
/// Append-only: enrollment creation pushes records, validation only reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    /// Identifier of the owning student
    pub student_id: String,

    /// Seat assignments in enrollment order
    records: Vec<SeatAssignment>,
}

impl Transcript {
    /// Create an empty transcript for a student
    #[must_use]
    pub const fn new(student_id: String) -> Self {
        Self {
            student_id,
            records: Vec::new(),
        }
    }

    /// Append a seat assignment to the history
    pub fn record(&mut self, seat: SeatAssignment) {
        self.records.push(seat);
    }

    /// Get the seat assignments in enrollment order
    #[must_use]
    pub fn seat_assignments(&self) -> &[SeatAssignment] {
        &self.records
    }

    /// Number of seat assignments on the transcript
    #[must_use]
    pub const fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true when no seat assignments have been recorded
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn seat(number: &str, price: u32) -> SeatAssignment {
        let course = Course::new(number.to_string(), format!("Course {number}"), 4).unwrap();
        SeatAssignment::new(course, price, "001".to_string())
    }

    #[test]
    fn test_transcript_starts_empty() {
        let transcript = Transcript::new("001".to_string());

        assert_eq!(transcript.student_id, "001");
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
    }

    #[test]
    fn test_record_preserves_order() {
        let mut transcript = Transcript::new("001".to_string());
        transcript.record(seat("INFO5100", 1200));
        transcript.record(seat("INFO6205", 950));

        assert_eq!(transcript.len(), 2);
        let numbers: Vec<&str> = transcript
            .seat_assignments()
            .iter()
            .map(|sa| sa.course.number.as_str())
            .collect();
        assert_eq!(numbers, vec!["INFO5100", "INFO6205"]);
    }

    #[test]
    fn test_duplicate_enrollments_are_kept() {
        let mut transcript = Transcript::new("001".to_string());
        transcript.record(seat("INFO5100", 1200));
        transcript.record(seat("INFO5100", 1200));

        assert_eq!(transcript.len(), 2);
    }
}
