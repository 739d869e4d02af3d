//! # Registration Service
//!
//! Implements the core "course registration" use case: the registries of
//! courses and students, enrollment validation, and the payment rule.
//!
//! All state lives in an explicit [`RegistrationSystem`] value that callers
//! own and thread through; there is no global registry. Mutations are
//! validated up front, so a rejected operation leaves the system untouched.

use std::collections::HashMap;

use rollcall_common::roster::{Course, RegistryError, Student};
use tracing::debug;

/// A payment is rejected below this fraction of the outstanding balance.
pub const MIN_PAYMENT_RATIO: f64 = 0.4;

/// Summary of a successful enrollment, for display.
#[derive(Clone, Debug, PartialEq)]
pub struct Enrollment {
    pub student_name: String,
    pub course_name: String,
    pub fee: f64,
    pub balance: f64,
}

/// Summary of an accepted payment, for display.
#[derive(Clone, Debug, PartialEq)]
pub struct PaymentReceipt {
    pub amount: f64,
    pub remaining: f64,
}

/// A student's money situation at a point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct BalanceReport {
    pub student_name: String,
    pub balance: f64,
    /// Sum of fees of all enrolled courses, unaffected by payments.
    pub total_fee: f64,
}

/// The registries and every operation over them.
///
/// Courses are kept in insertion order for display; students are keyed by
/// id, with registration order remembered separately so listings are stable.
#[derive(Debug, Default)]
pub struct RegistrationSystem {
    courses: Vec<Course>,
    students: HashMap<String, Student>,
    admission_order: Vec<String>,
}

impl RegistrationSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a new course to the catalogue.
    pub fn add_course(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        fee: f64,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if self.course(&id).is_some() {
            return Err(RegistryError::DuplicateCourse(id));
        }

        let course = Course::new(id, name, fee);
        debug!(course_id = %course.id, fee = course.fee, "course added");
        self.courses.push(course);
        Ok(())
    }

    /// Registers a new student with an empty enrollment list and zero balance.
    pub fn register_student(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Result<(), RegistryError> {
        let id = id.into();
        if self.students.contains_key(&id) {
            return Err(RegistryError::DuplicateStudent(id));
        }

        let student = Student::new(id.clone(), name, email);
        debug!(student_id = %id, "student registered");
        self.students.insert(id.clone(), student);
        self.admission_order.push(id);
        Ok(())
    }

    /// Enrolls a student in a course and charges the fee to their balance.
    pub fn enroll(&mut self, student_id: &str, course_id: &str) -> Result<Enrollment, RegistryError> {
        if !self.students.contains_key(student_id) {
            return Err(RegistryError::StudentNotFound(student_id.to_string()));
        }
        let course = self
            .course(course_id)
            .ok_or_else(|| RegistryError::CourseNotFound(course_id.to_string()))?;
        let (course_id, course_name, fee) = (course.id.clone(), course.name.clone(), course.fee);

        let Some(student) = self.students.get_mut(student_id) else {
            return Err(RegistryError::StudentNotFound(student_id.to_string()));
        };
        if student.is_enrolled(&course_id) {
            return Err(RegistryError::AlreadyEnrolled {
                student: student.name.clone(),
                course: course_name,
            });
        }

        student.enrolled.push(course_id.clone());
        student.balance += fee;
        debug!(student_id = %student.id, course_id = %course_id, balance = student.balance, "enrollment recorded");

        Ok(Enrollment {
            student_name: student.name.clone(),
            course_name,
            fee,
            balance: student.balance,
        })
    }

    /// Accepts a payment against a student's balance.
    ///
    /// A payment below [`MIN_PAYMENT_RATIO`] of the current balance is
    /// rejected and leaves the balance untouched. Overpayment is accepted and
    /// drives the balance negative (a credit).
    pub fn make_payment(&mut self, student_id: &str, amount: f64) -> Result<PaymentReceipt, RegistryError> {
        let Some(student) = self.students.get_mut(student_id) else {
            return Err(RegistryError::StudentNotFound(student_id.to_string()));
        };

        let minimum = MIN_PAYMENT_RATIO * student.balance;
        if amount < minimum {
            return Err(RegistryError::InsufficientPayment {
                offered: amount,
                minimum,
            });
        }

        student.balance -= amount;
        debug!(student_id = %student.id, amount, remaining = student.balance, "payment accepted");

        Ok(PaymentReceipt {
            amount,
            remaining: student.balance,
        })
    }

    /// Reports a student's outstanding balance and lifetime fees.
    pub fn student_balance(&self, student_id: &str) -> Result<BalanceReport, RegistryError> {
        let student = self
            .students
            .get(student_id)
            .ok_or_else(|| RegistryError::StudentNotFound(student_id.to_string()))?;

        Ok(BalanceReport {
            student_name: student.name.clone(),
            balance: student.balance,
            total_fee: student.total_fee(&self.courses),
        })
    }

    /// All courses, in the order they were added.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// All students, in the order they registered.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.admission_order
            .iter()
            .filter_map(|id| self.students.get(id))
    }

    /// Students enrolled in the given course, in registration order.
    pub fn students_in_course(&self, course_id: &str) -> Result<Vec<&Student>, RegistryError> {
        let course = self
            .course(course_id)
            .ok_or_else(|| RegistryError::CourseNotFound(course_id.to_string()))?;

        Ok(self
            .students()
            .filter(|student| student.is_enrolled(&course.id))
            .collect())
    }

    /// Looks a course up by id.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|course| course.id == course_id)
    }
}
