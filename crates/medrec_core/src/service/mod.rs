//! Use-case services composing validation, repositories, and caches.
//!
//! # Responsibility
//! - Run the sanitize-then-validate pipeline before every repository write.
//! - Own the per-entity read-through cache and its invalidation.
//!
//! # Invariants
//! - A validation failure prevents the repository call entirely.
//! - Cache state changes only after a write durably succeeds; a failed
//!   write leaves both cache and store exactly as before the call.
//! - Each service instance owns its repository and cache; process-wide
//!   sharing is the caller's composition choice.

pub mod appointment_service;
pub mod department_service;
pub mod doctor_service;
pub mod patient_service;
pub mod user_service;
