//! # Interactive Menu
//!
//! The text front end over [`RegistrationSystem`]. Reads a choice, prompts
//! for the fields the operation needs, and prints the outcome. Domain errors
//! are caught here and printed; the loop always continues.

use std::str::FromStr;

use rollcall_common::config::Config;
use rollcall_common::roster::RegistryError;
use rollcall_common::{error, info, success, warn};
use rollcall_core::registration::RegistrationSystem;

use crate::rprint;
use crate::terminal::{format, input, print};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Choice {
    AddCourse,
    RegisterStudent,
    Enroll,
    Payment,
    Balance,
    ListCourses,
    ListStudents,
    CourseRoster,
    Exit,
}

impl Choice {
    pub const ALL: [Self; 9] = [
        Self::AddCourse,
        Self::RegisterStudent,
        Self::Enroll,
        Self::Payment,
        Self::Balance,
        Self::ListCourses,
        Self::ListStudents,
        Self::CourseRoster,
        Self::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::AddCourse => "Add course",
            Self::RegisterStudent => "Register student",
            Self::Enroll => "Enroll student in course",
            Self::Payment => "Process payment",
            Self::Balance => "Check student balance",
            Self::ListCourses => "Show all courses",
            Self::ListStudents => "Show all registered students",
            Self::CourseRoster => "Show students in course",
            Self::Exit => "Exit",
        }
    }
}

impl FromStr for Choice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Self::AddCourse),
            "2" => Ok(Self::RegisterStudent),
            "3" => Ok(Self::Enroll),
            "4" => Ok(Self::Payment),
            "5" => Ok(Self::Balance),
            "6" => Ok(Self::ListCourses),
            "7" => Ok(Self::ListStudents),
            "8" => Ok(Self::CourseRoster),
            "9" => Ok(Self::Exit),
            other => Err(format!("invalid choice: {other}")),
        }
    }
}

/// Runs the menu until the user exits or stdin closes.
pub fn run(system: &mut RegistrationSystem, cfg: &Config) -> anyhow::Result<()> {
    loop {
        print_menu(cfg);

        let Some(line) = input::read_line("Enter your choice")? else {
            break;
        };

        let choice = match line.parse::<Choice>() {
            Ok(choice) => choice,
            Err(_) => {
                warn!("invalid choice '{line}', please pick 1-9");
                continue;
            }
        };

        if choice == Choice::Exit {
            success!("exiting, goodbye!");
            break;
        }

        if let Err(err) = dispatch(choice, system, cfg) {
            match err.downcast_ref::<RegistryError>() {
                Some(domain_err) => error!("{domain_err}"),
                None => return Err(err),
            }
        }
    }

    print::end_of_program();
    Ok(())
}

fn print_menu(cfg: &Config) {
    rprint!();
    print::header("menu", cfg.quiet);
    for (idx, choice) in Choice::ALL.iter().enumerate() {
        print::tree_head(idx + 1, choice.label());
    }
}

fn dispatch(choice: Choice, system: &mut RegistrationSystem, cfg: &Config) -> anyhow::Result<()> {
    match choice {
        Choice::AddCourse => add_course(system),
        Choice::RegisterStudent => register_student(system),
        Choice::Enroll => enroll(system),
        Choice::Payment => payment(system),
        Choice::Balance => balance(system),
        Choice::ListCourses => list_courses(system, cfg),
        Choice::ListStudents => list_students(system, cfg),
        Choice::CourseRoster => course_roster(system, cfg),
        Choice::Exit => Ok(()),
    }
}

/// Parses a raw prompt entry as money; reports and returns `None` otherwise.
fn parse_amount(raw: &str) -> Option<f64> {
    match raw.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            error!("'{raw}' is not a number");
            None
        }
    }
}

fn add_course(system: &mut RegistrationSystem) -> anyhow::Result<()> {
    let Some(id) = input::read_line("Enter course ID")? else {
        return Ok(());
    };
    let Some(name) = input::read_line("Enter course name")? else {
        return Ok(());
    };
    let Some(raw_fee) = input::read_line("Enter course fee")? else {
        return Ok(());
    };
    let Some(fee) = parse_amount(&raw_fee) else {
        return Ok(());
    };

    system.add_course(&id, &name, fee)?;
    success!("course '{name}' added successfully");
    Ok(())
}

fn register_student(system: &mut RegistrationSystem) -> anyhow::Result<()> {
    let Some(id) = input::read_line("Enter student ID")? else {
        return Ok(());
    };
    let Some(name) = input::read_line("Enter student name")? else {
        return Ok(());
    };
    let Some(email) = input::read_line("Enter student email")? else {
        return Ok(());
    };

    system.register_student(&id, &name, &email)?;
    success!("student '{name}' registered successfully");
    Ok(())
}

fn enroll(system: &mut RegistrationSystem) -> anyhow::Result<()> {
    let Some(student_id) = input::read_line("Enter student ID")? else {
        return Ok(());
    };
    let Some(course_id) = input::read_line("Enter course ID")? else {
        return Ok(());
    };

    let enrollment = system.enroll(&student_id, &course_id)?;
    success!(
        "student '{}' enrolled in course '{}'",
        enrollment.student_name,
        enrollment.course_name
    );
    print::aligned_line("Fee", format::money(enrollment.fee));
    print::aligned_line("Balance", format::money(enrollment.balance));
    Ok(())
}

fn payment(system: &mut RegistrationSystem) -> anyhow::Result<()> {
    let Some(student_id) = input::read_line("Enter student ID")? else {
        return Ok(());
    };
    let Some(raw_amount) = input::read_line("Enter payment amount")? else {
        return Ok(());
    };
    let Some(amount) = parse_amount(&raw_amount) else {
        return Ok(());
    };

    let receipt = system.make_payment(&student_id, amount)?;
    success!("payment of {:.2} accepted", receipt.amount);
    print::aligned_line("Remaining", format::money(receipt.remaining));
    if receipt.remaining < 0.0 {
        warn!("account is in credit by {:.2}", -receipt.remaining);
    }
    Ok(())
}

fn balance(system: &mut RegistrationSystem) -> anyhow::Result<()> {
    let Some(student_id) = input::read_line("Enter student ID")? else {
        return Ok(());
    };

    let report = system.student_balance(&student_id)?;
    print::aligned_line("Student", report.student_name);
    print::aligned_line("Balance", format::money(report.balance));
    print::aligned_line("Total fee", format::money(report.total_fee));
    Ok(())
}

fn list_courses(system: &RegistrationSystem, cfg: &Config) -> anyhow::Result<()> {
    let courses = system.courses();
    if courses.is_empty() {
        warn!("no courses available");
        return Ok(());
    }

    print::header("available courses", cfg.quiet);
    for (idx, course) in courses.iter().enumerate() {
        print::tree_head(idx + 1, &course.name);
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::course_details(course));
        }
    }
    Ok(())
}

fn list_students(system: &RegistrationSystem, cfg: &Config) -> anyhow::Result<()> {
    let students: Vec<_> = system.students().collect();
    if students.is_empty() {
        warn!("no students registered");
        return Ok(());
    }

    print::header("registered students", cfg.quiet);
    for (idx, student) in students.iter().enumerate() {
        print::tree_head(idx + 1, &student.name);
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::student_details(student));
        }
    }
    Ok(())
}

fn course_roster(system: &RegistrationSystem, cfg: &Config) -> anyhow::Result<()> {
    let Some(course_id) = input::read_line("Enter course ID")? else {
        return Ok(());
    };

    let roster = system.students_in_course(&course_id)?;
    let course_name = system
        .course(&course_id)
        .map_or(course_id.clone(), |course| course.name.clone());

    if roster.is_empty() {
        warn!("no students enrolled in course '{course_name}'");
        return Ok(());
    }

    print::header("course roster", cfg.quiet);
    info!("students enrolled in '{course_name}'");
    for (idx, student) in roster.iter().enumerate() {
        print::tree_head(idx + 1, &student.name);
        if cfg.quiet < 2 {
            print::as_tree_one_level(format::student_details(student));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choice_parses_every_menu_digit() {
        assert_eq!(Choice::from_str("1"), Ok(Choice::AddCourse));
        assert_eq!(Choice::from_str("5"), Ok(Choice::Balance));
        assert_eq!(Choice::from_str("9"), Ok(Choice::Exit));

        // Whitespace around the digit is fine
        assert_eq!(Choice::from_str(" 4 "), Ok(Choice::Payment));

        // Anything else is not
        assert!(Choice::from_str("0").is_err());
        assert!(Choice::from_str("10").is_err());
        assert!(Choice::from_str("add").is_err());
        assert!(Choice::from_str("").is_err());
    }

    #[test]
    fn choice_order_matches_menu_numbering() {
        for (idx, choice) in Choice::ALL.iter().enumerate() {
            let digit = (idx + 1).to_string();
            assert_eq!(Choice::from_str(&digit), Ok(*choice));
        }
    }
}
