//! # Roster Models
//!
//! The shared domain records of the registration system: courses on offer,
//! students on the books, and the typed errors every registry operation can
//! fail with.

mod course;
mod error;
mod student;

pub use course::Course;
pub use error::RegistryError;
pub use student::Student;
