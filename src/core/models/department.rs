//! Department model

use super::{CourseSchedule, FacultyProfile};
use crate::core::aggregates;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A department's semester schedules and faculty roster
///
/// Ties the aggregate queries to the collections a department owns: revenue
/// is asked per semester, the top professor over the whole roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Department name
    pub name: String,

    /// Course schedules indexed by semester label
    schedules: HashMap<String, CourseSchedule>,

    /// Faculty roster in hiring order
    faculty: Vec<FacultyProfile>,
}

impl Department {
    /// Create a new department with no schedules or faculty
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name,
            schedules: HashMap::new(),
            faculty: Vec::new(),
        }
    }

    /// Register a semester's course schedule
    ///
    /// # Returns
    /// `true` if the schedule was added, `false` if a schedule for that
    /// semester already exists (the existing one is replaced)
    pub fn add_schedule(&mut self, schedule: CourseSchedule) -> bool {
        self.schedules
            .insert(schedule.semester.clone(), schedule)
            .is_none()
    }

    /// Get the schedule for a semester
    #[must_use]
    pub fn schedule(&self, semester: &str) -> Option<&CourseSchedule> {
        self.schedules.get(semester)
    }

    /// Add a faculty member to the roster
    pub fn add_faculty(&mut self, profile: FacultyProfile) {
        self.faculty.push(profile);
    }

    /// Get the faculty roster
    #[must_use]
    pub fn faculty(&self) -> &[FacultyProfile] {
        &self.faculty
    }

    /// Total revenue charged for a semester, `None` when the semester has
    /// no registered schedule
    #[must_use]
    pub fn revenues_by_semester(&self, semester: &str) -> Option<u64> {
        self.schedules
            .get(semester)
            .map(CourseSchedule::total_revenue)
    }

    /// The roster member with the strictly highest average rating
    #[must_use]
    pub fn top_professor(&self) -> Option<&FacultyProfile> {
        aggregates::top_rated_faculty(&self.faculty)
    }
}
