//! Data models for `DegreeAudit`

pub mod course;
pub mod degree;
pub mod department;
pub mod faculty;
pub mod schedule;
pub mod seat_assignment;
pub mod transcript;

pub use course::Course;
pub use degree::Degree;
pub use department::Department;
pub use faculty::FacultyProfile;
pub use schedule::CourseSchedule;
pub use seat_assignment::SeatAssignment;
pub use transcript::Transcript;
