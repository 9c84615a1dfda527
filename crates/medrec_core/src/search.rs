//! In-memory filtering over already-loaded entity lists.
//!
//! These helpers back the caller surface's search boxes; they never touch
//! storage and are case-insensitive substring matches. An empty or
//! whitespace-only query returns the input unchanged.

use crate::model::appointment::Appointment;
use crate::model::department::Department;
use crate::model::doctor::Doctor;
use crate::model::patient::Patient;

pub fn search_patients(patients: &[Patient], query: &str) -> Vec<Patient> {
    filter(patients, query, |patient, q| {
        contains(&patient.first_name, q)
            || contains(&patient.last_name, q)
            || contains(&patient.email, q)
            || contains(&patient.phone, q)
    })
}

pub fn search_doctors(doctors: &[Doctor], query: &str) -> Vec<Doctor> {
    filter(doctors, query, |doctor, q| {
        contains(&doctor.first_name, q)
            || contains(&doctor.last_name, q)
            || contains(&doctor.email, q)
            || contains(&doctor.phone, q)
    })
}

pub fn search_departments(departments: &[Department], query: &str) -> Vec<Department> {
    filter(departments, query, |department, q| {
        contains(&department.name, q) || contains(&department.description, q)
    })
}

pub fn search_appointments(appointments: &[Appointment], query: &str) -> Vec<Appointment> {
    filter(appointments, query, |appointment, q| {
        contains(appointment.status.as_db_str(), q)
            || contains(&appointment.date.to_string(), q)
            || contains(&appointment.patient_id.to_string(), q)
            || contains(&appointment.doctor_id.to_string(), q)
    })
}

fn filter<T: Clone>(items: &[T], query: &str, matches: impl Fn(&T, &str) -> bool) -> Vec<T> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| matches(item, &needle))
        .cloned()
        .collect()
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
