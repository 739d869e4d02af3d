#![cfg(test)]
use rollcall_common::roster::RegistryError;
use rollcall_core::registration::RegistrationSystem;

/// This test walks the canonical end-to-end scenario: one course, one
/// student, enrollment, a valid payment, then a payment below the 40%
/// minimum.
#[test]
fn full_registration_and_payment_flow() {
    let mut system = RegistrationSystem::new();

    system
        .add_course("C1", "Math", 100.0)
        .expect("adding a fresh course should succeed");
    system
        .register_student("S1", "Ann", "a@x.com")
        .expect("registering a fresh student should succeed");

    let enrollment = system
        .enroll("S1", "C1")
        .expect("enrollment of a registered student should succeed");
    assert_eq!(enrollment.balance, 100.0, "enrollment charges the full fee");

    let receipt = system
        .make_payment("S1", 40.0)
        .expect("40 out of 100 meets the 40% minimum");
    assert_eq!(receipt.remaining, 60.0);

    let result = system.make_payment("S1", 10.0);
    match result {
        Err(RegistryError::InsufficientPayment { offered, minimum }) => {
            assert_eq!(offered, 10.0);
            assert_eq!(minimum, 24.0, "minimum is 40% of the remaining 60");
        }
        other => panic!("expected InsufficientPayment, got {:?}", other),
    }

    let report = system.student_balance("S1").unwrap();
    assert_eq!(report.balance, 60.0, "rejected payment must not touch the balance");
    assert_eq!(report.total_fee, 100.0);
}

#[test]
fn registries_reject_duplicates_without_losing_state() {
    let mut system = RegistrationSystem::new();

    system.add_course("C1", "Math", 100.0).unwrap();
    system.register_student("S1", "Ann", "a@x.com").unwrap();

    assert_eq!(
        system.add_course("C1", "Calculus", 200.0),
        Err(RegistryError::DuplicateCourse("C1".to_string()))
    );
    assert_eq!(
        system.register_student("S1", "Annette", "b@x.com"),
        Err(RegistryError::DuplicateStudent("S1".to_string()))
    );

    assert_eq!(system.courses().len(), 1);
    assert_eq!(system.courses()[0].fee, 100.0);
    assert_eq!(system.students().count(), 1);
    assert_eq!(system.students().next().unwrap().email, "a@x.com");
}

#[test]
fn rosters_track_multiple_students_across_courses() {
    let mut system = RegistrationSystem::new();

    system.add_course("C1", "Math", 100.0).unwrap();
    system.add_course("C2", "Physics", 250.0).unwrap();
    system.register_student("S1", "Ann", "a@x.com").unwrap();
    system.register_student("S2", "Bob", "b@x.com").unwrap();
    system.register_student("S3", "Cid", "c@x.com").unwrap();

    system.enroll("S1", "C1").unwrap();
    system.enroll("S2", "C1").unwrap();
    system.enroll("S2", "C2").unwrap();

    let math = system.students_in_course("C1").unwrap();
    let names: Vec<&str> = math.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Ann", "Bob"], "roster follows registration order");

    let physics = system.students_in_course("C2").unwrap();
    assert_eq!(physics.len(), 1);
    assert_eq!(physics[0].balance, 350.0, "Bob owes for both courses");

    assert_eq!(
        system.students_in_course("C9"),
        Err(RegistryError::CourseNotFound("C9".to_string()))
    );
}

/// Overpayment is accepted and recorded as a credit; the next payment of
/// any non-negative amount passes the minimum check against a negative
/// balance.
#[test]
fn overpayment_becomes_credit_and_unblocks_future_payments() {
    let mut system = RegistrationSystem::new();

    system.add_course("C1", "Math", 100.0).unwrap();
    system.register_student("S1", "Ann", "a@x.com").unwrap();
    system.enroll("S1", "C1").unwrap();

    let receipt = system.make_payment("S1", 120.0).unwrap();
    assert_eq!(receipt.remaining, -20.0);

    // 40% of a negative balance is negative, so any payment clears the bar.
    let receipt = system.make_payment("S1", 0.0).unwrap();
    assert_eq!(receipt.remaining, -20.0);
}

#[test]
fn enrollment_is_rejected_for_unknown_parties() {
    let mut system = RegistrationSystem::new();
    system.add_course("C1", "Math", 100.0).unwrap();
    system.register_student("S1", "Ann", "a@x.com").unwrap();

    assert_eq!(
        system.enroll("S0", "C1"),
        Err(RegistryError::StudentNotFound("S0".to_string()))
    );
    assert_eq!(
        system.enroll("S1", "C0"),
        Err(RegistryError::CourseNotFound("C0".to_string()))
    );
    assert_eq!(
        system.make_payment("S0", 10.0),
        Err(RegistryError::StudentNotFound("S0".to_string()))
    );
    assert_eq!(
        system.student_balance("S0"),
        Err(RegistryError::StudentNotFound("S0".to_string()))
    );
}
