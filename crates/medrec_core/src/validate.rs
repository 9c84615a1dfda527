//! Field-level sanitization and validation pipeline.
//!
//! # Responsibility
//! - Normalize free-text input before it reaches persistence.
//! - Check every domain constraint and fail before any storage I/O.
//!
//! # Invariants
//! - `sanitize` is idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
//! - A failing check prevents the write entirely; checks never partially
//!   apply.
//! - Every failure names the offending field and the violated rule.

use crate::model::EntityId;
use chrono::{Local, Months, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9+_.-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10,15}$").expect("valid phone regex"));
static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z\s'-]+$").expect("valid name regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

const NAME_MIN_CHARS: usize = 2;
const NAME_MAX_CHARS: usize = 100;
const DOB_MAX_AGE_YEARS: u32 = 150;

/// Field-level contract violation. Always recoverable by correcting input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Human-readable name of the offending field.
    pub field: String,
    /// Violated rule, phrased for direct display to the caller.
    pub reason: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.reason)
    }
}

impl Error for ValidationError {}

pub type ValidationResult<T = ()> = Result<T, ValidationError>;

/// Trims leading/trailing whitespace and collapses internal runs to one space.
pub fn sanitize(value: &str) -> String {
    WHITESPACE_RE.replace_all(value.trim(), " ").into_owned()
}

/// Fails when the value is empty or whitespace-only after trimming.
pub fn require_non_empty(value: &str, field: &str) -> ValidationResult {
    if value.trim().is_empty() {
        return Err(ValidationError::new(field, "cannot be empty"));
    }
    Ok(())
}

/// Person-name rule: 2-100 chars, letters/space/hyphen/apostrophe only.
pub fn require_name(value: &str, field: &str) -> ValidationResult {
    require_non_empty(value, field)?;
    let length = value.chars().count();
    if !(NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&length) {
        return Err(ValidationError::new(
            field,
            format!("must be between {NAME_MIN_CHARS} and {NAME_MAX_CHARS} characters"),
        ));
    }
    if !NAME_RE.is_match(value) {
        return Err(ValidationError::new(
            field,
            "must contain only letters, spaces, hyphens, or apostrophes",
        ));
    }
    Ok(())
}

/// Standard `local@domain.tld` shape.
pub fn require_email(value: &str) -> ValidationResult {
    require_non_empty(value, "Email")?;
    if !EMAIL_RE.is_match(value) {
        return Err(ValidationError::new("Email", "invalid email format"));
    }
    Ok(())
}

/// Strips spaces/parentheses/hyphens, then requires exactly 10-15 digits.
pub fn require_phone(value: &str) -> ValidationResult {
    require_non_empty(value, "Phone")?;
    let cleaned: String = value
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '(' && *c != ')' && *c != '-')
        .collect();
    if !PHONE_RE.is_match(&cleaned) {
        return Err(ValidationError::new("Phone", "must be 10-15 digits"));
    }
    Ok(())
}

/// Date of birth must not be in the future nor more than 150 years past.
///
/// The boundary is inclusive: a date exactly 150 years before today is
/// accepted; one day earlier is rejected.
pub fn require_date_of_birth(dob: NaiveDate) -> ValidationResult {
    let today = Local::now().date_naive();
    if dob > today {
        return Err(ValidationError::new(
            "Date of Birth",
            "cannot be in the future",
        ));
    }
    let oldest = today
        .checked_sub_months(Months::new(DOB_MAX_AGE_YEARS * 12))
        .unwrap_or(NaiveDate::MIN);
    if dob < oldest {
        return Err(ValidationError::new(
            "Date of Birth",
            "is too far in the past",
        ));
    }
    Ok(())
}

/// Storage references and identifiers must be assigned and positive.
pub fn require_positive(value: Option<EntityId>, field: &str) -> ValidationResult<EntityId> {
    match value {
        Some(id) if id > 0 => Ok(id),
        _ => Err(ValidationError::new(field, "must be a positive number")),
    }
}

/// Fails unless the date is today or later.
pub fn require_future_date(date: NaiveDate, field: &str) -> ValidationResult {
    if date < Local::now().date_naive() {
        return Err(ValidationError::new(field, "must be in the future"));
    }
    Ok(())
}
