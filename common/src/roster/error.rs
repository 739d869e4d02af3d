use thiserror::Error;

/// Everything a registry operation can be rejected for.
///
/// Every variant is recoverable: the menu loop prints the message and keeps
/// going. Messages carry the offending identifier so they are usable as-is.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum RegistryError {
    #[error("course with ID {0} already exists")]
    DuplicateCourse(String),

    #[error("student with ID {0} is already registered")]
    DuplicateStudent(String),

    #[error("course with ID {0} not found")]
    CourseNotFound(String),

    #[error("student with ID {0} not found")]
    StudentNotFound(String),

    #[error("{student} is already enrolled in {course}")]
    AlreadyEnrolled { student: String, course: String },

    #[error("minimum payment is 40% of the outstanding balance ({minimum:.2}, offered {offered:.2})")]
    InsufficientPayment { offered: f64, minimum: f64 },
}
