//! Domain model for hospital records.
//!
//! # Responsibility
//! - Define the entity records managed by repositories and services.
//! - Keep closed-set fields as enums so invalid members cannot be
//!   constructed past input parsing.
//!
//! # Invariants
//! - `id` is assigned by storage and immutable once set.
//! - Absence of an identifier (`id == None`) marks a not-yet-persisted
//!   entity.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod appointment;
pub mod audit;
pub mod department;
pub mod doctor;
pub mod patient;
pub mod user;

/// Storage-assigned row identifier shared by all entity tables.
pub type EntityId = i64;
