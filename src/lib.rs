//! Shared library for `DegreeAudit`
//! Pure rules evaluation over registrar data: graduation readiness,
//! elective counts, top-rated faculty, and per-semester revenue.

pub mod core;
pub mod logger;

pub use self::core::aggregates;
pub use self::core::error::DomainError;
pub use self::core::models::{
    Course, CourseSchedule, Degree, Department, FacultyProfile, SeatAssignment, Transcript,
};
