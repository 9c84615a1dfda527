//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `medrec_core` linkage and
//!   schema bootstrap, independent of any form-based front end.
//! - Keep output deterministic for quick local sanity checks.

use medrec_core::db::migrations::latest_version;
use medrec_core::db::open_db_in_memory;
use medrec_core::{PatientService, SqlitePatientRepository};

fn main() {
    println!("medrec_core version={}", medrec_core::core_version());

    match open_db_in_memory() {
        Ok(conn) => {
            println!("schema version={}", latest_version());
            let service = PatientService::new(SqlitePatientRepository::new(&conn));
            println!("patient cache: {}", service.cache_status());
        }
        Err(err) => {
            eprintln!("db bootstrap failed: {err}");
            std::process::exit(1);
        }
    }
}
