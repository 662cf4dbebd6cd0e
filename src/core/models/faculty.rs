//! Faculty profile model

use serde::{Deserialize, Serialize};

/// A faculty member and the overall ratings they have received
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacultyProfile {
    /// Faculty identifier
    pub id: String,

    /// Display name
    pub name: String,

    /// Overall ratings received, in the order they were given
    ratings: Vec<f64>,
}

impl FacultyProfile {
    /// Create a new faculty profile with no ratings
    #[must_use]
    pub const fn new(id: String, name: String) -> Self {
        Self {
            id,
            name,
            ratings: Vec::new(),
        }
    }

    /// Record an overall rating
    pub fn add_rating(&mut self, rating: f64) {
        self.ratings.push(rating);
    }

    /// Mean of all ratings received, `0.0` when there are none
    #[must_use]
    pub fn average_overall_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let count = self.ratings.len() as f64;
        self.ratings.iter().sum::<f64>() / count
    }
}
