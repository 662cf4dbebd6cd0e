//! Course model

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};

/// Represents an offered subject in the course catalog
///
/// Identity is carried entirely by the course number: two courses with the
/// same number compare equal regardless of title or credit weight, and all
/// requirement matching goes through that comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Course number (e.g., "INFO5100") - the unique identifier
    pub number: String,

    /// Display title (e.g., "Application Engineering and Development")
    pub title: String,

    /// Credit hours (whole credits, always positive)
    pub credit_hours: u32,
}

impl Course {
    /// Create a new course
    ///
    /// # Arguments
    /// * `number` - Unique course number
    /// * `title` - Display title
    /// * `credit_hours` - Credit hours, must be positive
    ///
    /// # Errors
    /// Returns `DomainError::EmptyCourseNumber` when `number` is empty and
    /// `DomainError::ZeroCreditHours` when `credit_hours` is zero.
    pub fn new(number: String, title: String, credit_hours: u32) -> Result<Self, DomainError> {
        if number.is_empty() {
            return Err(DomainError::EmptyCourseNumber);
        }
        if credit_hours == 0 {
            return Err(DomainError::ZeroCreditHours { number });
        }
        Ok(Self {
            number,
            title,
            credit_hours,
        })
    }
}

impl PartialEq for Course {
    fn eq(&self, other: &Self) -> bool {
        self.number == other.number
    }
}

impl Eq for Course {}

impl Hash for Course {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.number.hash(state);
    }
}
