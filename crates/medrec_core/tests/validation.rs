use chrono::{Local, Months};
use medrec_core::validate::{
    require_date_of_birth, require_email, require_future_date, require_name, require_non_empty,
    require_phone, require_positive, sanitize,
};
use medrec_core::{AppointmentStatus, Gender, Role};

#[test]
fn sanitize_trims_and_collapses_whitespace() {
    assert_eq!(sanitize("  Ann   van  der Berg \t"), "Ann van der Berg");
    assert_eq!(sanitize(""), "");
    assert_eq!(sanitize("   "), "");
}

#[test]
fn sanitize_is_idempotent() {
    for input in ["  a  b  ", "plain", "\tx\n y\r", "", "  "] {
        let once = sanitize(input);
        assert_eq!(sanitize(&once), once);
    }
}

#[test]
fn non_empty_rejects_blank_values() {
    assert!(require_non_empty("x", "Field").is_ok());
    let err = require_non_empty("   ", "Address").unwrap_err();
    assert_eq!(err.field, "Address");
    assert!(err.reason.contains("empty"));
}

#[test]
fn name_length_bounds_are_inclusive() {
    assert!(require_name("A", "First Name").is_err());
    assert!(require_name("Al", "First Name").is_ok());
    assert!(require_name(&"a".repeat(100), "First Name").is_ok());
    assert!(require_name(&"a".repeat(101), "First Name").is_err());
}

#[test]
fn name_allows_only_letters_space_hyphen_apostrophe() {
    assert!(require_name("Mary-Jane O'Neil", "First Name").is_ok());
    assert!(require_name("Anne Marie", "First Name").is_ok());

    for bad in ["R2D2", "john.doe", "x_y", "name!"] {
        let err = require_name(bad, "Last Name").unwrap_err();
        assert_eq!(err.field, "Last Name");
    }
}

#[test]
fn email_shape_is_enforced() {
    assert!(require_email("ann@x.com").is_ok());
    assert!(require_email("a.b+c@mail.example.org").is_ok());

    for bad in ["not-an-email", "a@b", "@x.com", "a@.com", "a b@x.com"] {
        let err = require_email(bad).unwrap_err();
        assert_eq!(err.field, "Email");
    }
}

#[test]
fn phone_strips_formatting_then_counts_digits() {
    assert!(require_phone("1234567890").is_ok());
    assert!(require_phone("(123) 456-7890").is_ok());
    assert!(require_phone("123 456 789 012 345").is_ok());

    assert!(require_phone("123456789").is_err());
    assert!(require_phone("1234567890123456").is_err());
    assert!(require_phone("12345abcde").is_err());
}

#[test]
fn dob_rejects_future_dates() {
    let today = Local::now().date_naive();
    assert!(require_date_of_birth(today).is_ok());

    let tomorrow = today.succ_opt().unwrap();
    let err = require_date_of_birth(tomorrow).unwrap_err();
    assert!(err.reason.contains("future"));
}

#[test]
fn dob_150_year_boundary_is_inclusive() {
    let today = Local::now().date_naive();
    let boundary = today.checked_sub_months(Months::new(150 * 12)).unwrap();

    assert!(require_date_of_birth(boundary).is_ok());

    let one_day_older = boundary.pred_opt().unwrap();
    let err = require_date_of_birth(one_day_older).unwrap_err();
    assert!(err.reason.contains("past"));
}

#[test]
fn positive_rejects_missing_zero_and_negative() {
    assert_eq!(require_positive(Some(3), "Patient ID").unwrap(), 3);

    for bad in [None, Some(0), Some(-5)] {
        let err = require_positive(bad, "Patient ID").unwrap_err();
        assert_eq!(err.field, "Patient ID");
        assert!(err.reason.contains("positive"));
    }
}

#[test]
fn future_date_accepts_today() {
    let today = Local::now().date_naive();
    assert!(require_future_date(today, "Appointment Date").is_ok());
    assert!(require_future_date(today.pred_opt().unwrap(), "Appointment Date").is_err());
}

#[test]
fn gender_parse_is_case_insensitive() {
    assert_eq!(Gender::parse("female").unwrap(), Gender::Female);
    assert_eq!(Gender::parse("MALE").unwrap(), Gender::Male);
    assert_eq!(Gender::parse(" Other ").unwrap(), Gender::Other);

    let err = Gender::parse("unknown").unwrap_err();
    assert_eq!(err.field, "Gender");
}

#[test]
fn appointment_status_parse_is_case_sensitive() {
    assert_eq!(
        AppointmentStatus::parse("Scheduled").unwrap(),
        AppointmentStatus::Scheduled
    );
    assert!(AppointmentStatus::parse("scheduled").is_err());
    assert!(AppointmentStatus::parse("SCHEDULED").is_err());
    assert!(AppointmentStatus::parse("Done").is_err());
}

#[test]
fn role_parse_accepts_any_capitalization() {
    assert_eq!(Role::parse("admin").unwrap(), Role::Admin);
    assert_eq!(Role::parse("Receptionist").unwrap(), Role::Receptionist);
    assert!(Role::parse("doctor").is_err());
}
