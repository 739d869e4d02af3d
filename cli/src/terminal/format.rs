use colored::*;
use rollcall_common::roster::{Course, Student};

use crate::terminal::colors;

pub type Detail = (String, ColoredString);

/// Renders an amount of money, flagging credit (negative) balances.
pub fn money(value: f64) -> ColoredString {
    if value < 0.0 {
        format!("{value:.2}").red()
    } else {
        format!("{value:.2}").color(colors::MONEY)
    }
}

pub fn course_details(course: &Course) -> Vec<Detail> {
    vec![
        ("ID".to_string(), course.id.as_str().color(colors::IDENT)),
        ("Fee".to_string(), money(course.fee)),
    ]
}

pub fn student_details(student: &Student) -> Vec<Detail> {
    let mut details: Vec<Detail> = vec![
        ("ID".to_string(), student.id.as_str().color(colors::IDENT)),
        ("Email".to_string(), student.email.as_str().color(colors::EMAIL)),
        ("Balance".to_string(), money(student.balance)),
    ];

    if !student.enrolled.is_empty() {
        let joined_courses: String = student
            .enrolled
            .iter()
            .map(String::as_str)
            .collect::<Vec<&str>>()
            .join(", ");

        details.push(("Courses".to_string(), joined_courses.normal()));
    }

    details
}
