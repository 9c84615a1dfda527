use chrono::NaiveDate;
use medrec_core::db::open_db_in_memory;
use medrec_core::{Gender, Patient, PatientService, RepoError, SqlitePatientRepository};

fn valid_patient(email: &str) -> Patient {
    Patient {
        id: None,
        first_name: "Ann".to_string(),
        last_name: "Lee".to_string(),
        dob: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
        gender: Gender::Female,
        email: email.to_string(),
        phone: "1234567890".to_string(),
        address: "1 Rd".to_string(),
    }
}

#[test]
fn scenario_register_assigns_id_and_grows_list() {
    let conn = open_db_in_memory().unwrap();
    let service = PatientService::new(SqlitePatientRepository::new(&conn));

    let before = service.get_all().unwrap().len();

    let mut patient = valid_patient("ann@x.com");
    let id = service.register(&mut patient).unwrap();
    assert!(id > 0);
    assert_eq!(patient.id, Some(id));

    assert_eq!(service.get_all().unwrap().len(), before + 1);
}

#[test]
fn register_then_get_returns_equal_fields() {
    let conn = open_db_in_memory().unwrap();
    let service = PatientService::new(SqlitePatientRepository::new(&conn));

    let mut patient = valid_patient("ann@x.com");
    let id = service.register(&mut patient).unwrap();

    let loaded = service.get(id).unwrap().unwrap();
    let mut expected = valid_patient("ann@x.com");
    expected.id = Some(id);
    assert_eq!(loaded, expected);
}

#[test]
fn register_sanitizes_text_fields_before_storing() {
    let conn = open_db_in_memory().unwrap();
    let service = PatientService::new(SqlitePatientRepository::new(&conn));

    let mut patient = valid_patient("ann@x.com");
    patient.first_name = "  Ann   Marie ".to_string();
    patient.address = " 1   Rd ".to_string();
    let id = service.register(&mut patient).unwrap();

    let loaded = service.get(id).unwrap().unwrap();
    assert_eq!(loaded.first_name, "Ann Marie");
    assert_eq!(loaded.address, "1 Rd");
}

#[test]
fn scenario_invalid_email_fails_validation_and_skips_store() {
    let conn = open_db_in_memory().unwrap();
    let service = PatientService::new(SqlitePatientRepository::new(&conn));

    let mut patient = valid_patient("not-an-email");
    let err = service.register(&mut patient).unwrap_err();
    match err {
        RepoError::Validation(validation) => {
            assert_eq!(validation.field, "Email");
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    assert_eq!(patient.id, None);
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM patients;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn get_missing_id_is_absent_not_error() {
    let conn = open_db_in_memory().unwrap();
    let service = PatientService::new(SqlitePatientRepository::new(&conn));

    assert!(service.get(42).unwrap().is_none());
}

#[test]
fn delete_then_get_returns_absent_and_second_delete_is_ok() {
    let conn = open_db_in_memory().unwrap();
    let service = PatientService::new(SqlitePatientRepository::new(&conn));

    let mut patient = valid_patient("ann@x.com");
    let id = service.register(&mut patient).unwrap();
    assert!(service.get(id).unwrap().is_some());

    service.delete(id).unwrap();
    assert!(service.get(id).unwrap().is_none());

    // Idempotent: a second delete of the same id is not an error.
    service.delete(id).unwrap();
}

#[test]
fn update_of_missing_id_is_explicit_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = PatientService::new(SqlitePatientRepository::new(&conn));

    let mut patient = valid_patient("ann@x.com");
    patient.id = Some(999);
    let err = service.update(&mut patient).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(999)));
}

#[test]
fn update_is_observable_on_next_read() {
    let conn = open_db_in_memory().unwrap();
    let service = PatientService::new(SqlitePatientRepository::new(&conn));

    let mut patient = valid_patient("ann@x.com");
    let id = service.register(&mut patient).unwrap();

    // Prime both the per-id and list caches.
    assert!(service.get(id).unwrap().is_some());
    assert_eq!(service.get_all().unwrap().len(), 1);

    patient.address = "2 New Rd".to_string();
    service.update(&mut patient).unwrap();

    assert_eq!(service.get(id).unwrap().unwrap().address, "2 New Rd");
    assert_eq!(service.get_all().unwrap()[0].address, "2 New Rd");
}

#[test]
fn duplicate_email_surfaces_as_storage_error() {
    let conn = open_db_in_memory().unwrap();
    let service = PatientService::new(SqlitePatientRepository::new(&conn));

    let mut first = valid_patient("ann@x.com");
    service.register(&mut first).unwrap();

    let mut second = valid_patient("ann@x.com");
    second.first_name = "Bea".to_string();
    let err = service.register(&mut second).unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}
