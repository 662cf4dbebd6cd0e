//! Domain error taxonomy
//!
//! Errors only arise from construction and well-formedness checks; the
//! query operations are pure and infallible, reporting absence as `Option`.

use thiserror::Error;

/// Errors reported by model constructors and well-formedness checks
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A course was constructed without an identifier
    #[error("course number must not be empty")]
    EmptyCourseNumber,

    /// A course was constructed with no credit weight
    #[error("course '{number}' must carry a positive credit-hour weight")]
    ZeroCreditHours {
        /// Identifier of the offending course
        number: String,
    },

    /// A degree lists the same course as both core and elective
    #[error("degree '{degree}': course '{course}' appears in both the core and elective lists")]
    CoreElectiveOverlap {
        /// Title of the ill-formed degree
        degree: String,
        /// Identifier of the overlapping course
        course: String,
    },
}
