use crate::roster::Course;

/// A registered student.
///
/// `enrolled` holds course ids in enrollment order and never contains
/// duplicates. `balance` is the outstanding amount owed: every enrollment
/// adds the course fee, every accepted payment subtracts, and enrollments
/// are never removed.
#[derive(Clone, Debug, PartialEq)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub enrolled: Vec<String>,
    pub balance: f64,
}

impl Student {
    pub fn new(id: impl Into<String>, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            enrolled: Vec::new(),
            balance: 0.0,
        }
    }

    pub fn is_enrolled(&self, course_id: &str) -> bool {
        self.enrolled.iter().any(|id| id == course_id)
    }

    /// Sums the fees of every course the student ever enrolled in.
    ///
    /// Unlike `balance`, this is not reduced by payments.
    pub fn total_fee(&self, courses: &[Course]) -> f64 {
        courses
            .iter()
            .filter(|course| self.is_enrolled(&course.id))
            .map(|course| course.fee)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_student_owes_nothing() {
        let student = Student::new("S1", "Ann", "a@x.com");
        assert_eq!(student.balance, 0.0);
        assert!(student.enrolled.is_empty());
        assert!(!student.is_enrolled("C1"));
    }

    #[test]
    fn total_fee_sums_enrolled_courses_only() {
        let courses = vec![
            Course::new("C1", "Math", 100.0),
            Course::new("C2", "Physics", 250.0),
            Course::new("C3", "History", 75.0),
        ];

        let mut student = Student::new("S1", "Ann", "a@x.com");
        student.enrolled.push("C1".to_string());
        student.enrolled.push("C3".to_string());

        assert_eq!(student.total_fee(&courses), 175.0);
    }

    #[test]
    fn total_fee_ignores_payments() {
        let courses = vec![Course::new("C1", "Math", 100.0)];

        let mut student = Student::new("S1", "Ann", "a@x.com");
        student.enrolled.push("C1".to_string());
        student.balance = 100.0;

        student.balance -= 40.0;
        assert_eq!(student.total_fee(&courses), 100.0);
    }
}
