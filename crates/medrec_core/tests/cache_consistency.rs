//! Read-your-write and hit/miss behavior of the service-owned cache,
//! observed through an instrumented repository that counts store calls.

use chrono::NaiveDate;
use medrec_core::{
    EntityId, Gender, Patient, PatientRepository, PatientService, RepoError, RepoResult,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct StoreCounters {
    find_by_id_calls: Cell<usize>,
    find_all_calls: Cell<usize>,
}

struct CountingRepo {
    rows: RefCell<Vec<Patient>>,
    next_id: Cell<EntityId>,
    counters: Rc<StoreCounters>,
}

impl CountingRepo {
    fn new() -> (Self, Rc<StoreCounters>) {
        let counters = Rc::new(StoreCounters::default());
        let repo = Self {
            rows: RefCell::new(Vec::new()),
            next_id: Cell::new(1),
            counters: Rc::clone(&counters),
        };
        (repo, counters)
    }
}

impl PatientRepository for CountingRepo {
    fn create(&self, patient: &Patient) -> RepoResult<EntityId> {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let mut stored = patient.clone();
        stored.id = Some(id);
        self.rows.borrow_mut().push(stored);
        Ok(id)
    }

    fn find_by_id(&self, id: EntityId) -> RepoResult<Option<Patient>> {
        self.counters
            .find_by_id_calls
            .set(self.counters.find_by_id_calls.get() + 1);
        Ok(self
            .rows
            .borrow()
            .iter()
            .find(|row| row.id == Some(id))
            .cloned())
    }

    fn find_all(&self) -> RepoResult<Vec<Patient>> {
        self.counters
            .find_all_calls
            .set(self.counters.find_all_calls.get() + 1);
        Ok(self.rows.borrow().clone())
    }

    fn update(&self, patient: &Patient) -> RepoResult<()> {
        let id = patient
            .id
            .ok_or_else(|| RepoError::InvalidData("id missing".to_string()))?;
        let mut rows = self.rows.borrow_mut();
        match rows.iter_mut().find(|row| row.id == Some(id)) {
            Some(row) => {
                *row = patient.clone();
                Ok(())
            }
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn delete(&self, id: EntityId) -> RepoResult<()> {
        self.rows.borrow_mut().retain(|row| row.id != Some(id));
        Ok(())
    }
}

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
fn scenario_second_get_all_hits_cache_with_no_store_access() {
    let (repo, counters) = CountingRepo::new();
    let service = PatientService::new(repo);
    service.register(&mut valid_patient("a@x.com")).unwrap();

    let first = service.get_all().unwrap();
    let second = service.get_all().unwrap();

    assert_eq!(first, second);
    assert_eq!(counters.find_all_calls.get(), 1);
}

#[test]
fn get_by_id_fills_cache_and_skips_store_on_repeat() {
    let (repo, counters) = CountingRepo::new();
    let service = PatientService::new(repo);
    let mut patient = valid_patient("a@x.com");
    let id = service.register(&mut patient).unwrap();

    assert!(service.get(id).unwrap().is_some());
    assert!(service.get(id).unwrap().is_some());
    assert!(service.get(id).unwrap().is_some());

    assert_eq!(counters.find_by_id_calls.get(), 1);
    assert_eq!(service.cache_status().item_count, 1);
}

#[test]
fn absent_ids_are_not_cached() {
    let (repo, counters) = CountingRepo::new();
    let service = PatientService::new(repo);

    assert!(service.get(42).unwrap().is_none());
    assert!(service.get(42).unwrap().is_none());

    // Every miss on an absent id re-checks the store.
    assert_eq!(counters.find_by_id_calls.get(), 2);
    assert_eq!(service.cache_status().item_count, 0);
}

#[test]
fn register_does_not_cache_the_new_row() {
    let (repo, _counters) = CountingRepo::new();
    let service = PatientService::new(repo);
    service.register(&mut valid_patient("a@x.com")).unwrap();

    let status = service.cache_status();
    assert_eq!(status.item_count, 0);
    assert_eq!(status.list_count, 0);
}

#[test]
fn mutations_invalidate_the_list_snapshot() {
    let (repo, counters) = CountingRepo::new();
    let service = PatientService::new(repo);
    let mut first = valid_patient("a@x.com");
    let first_id = service.register(&mut first).unwrap();

    assert_eq!(service.get_all().unwrap().len(), 1);
    assert_eq!(service.cache_status().list_count, 1);

    // register
    service.register(&mut valid_patient("b@x.com")).unwrap();
    assert_eq!(service.cache_status().list_count, 0);
    assert_eq!(service.get_all().unwrap().len(), 2);

    // update
    first.address = "2 New Rd".to_string();
    service.update(&mut first).unwrap();
    let listed = service.get_all().unwrap();
    assert_eq!(
        listed
            .iter()
            .find(|p| p.id == Some(first_id))
            .unwrap()
            .address,
        "2 New Rd"
    );

    // delete
    service.delete(first_id).unwrap();
    assert_eq!(service.get_all().unwrap().len(), 1);

    // Each of the four fills above went to the store exactly once.
    assert_eq!(counters.find_all_calls.get(), 4);
}

#[test]
fn update_drops_the_stale_per_id_snapshot() {
    let (repo, counters) = CountingRepo::new();
    let service = PatientService::new(repo);
    let mut patient = valid_patient("a@x.com");
    let id = service.register(&mut patient).unwrap();

    assert_eq!(service.get(id).unwrap().unwrap().address, "1 Rd");
    assert_eq!(counters.find_by_id_calls.get(), 1);

    patient.address = "2 New Rd".to_string();
    service.update(&mut patient).unwrap();

    assert_eq!(service.get(id).unwrap().unwrap().address, "2 New Rd");
    assert_eq!(counters.find_by_id_calls.get(), 2);
}

#[test]
fn failed_write_leaves_cache_state_unchanged() {
    let (repo, _counters) = CountingRepo::new();
    let service = PatientService::new(repo);
    let mut patient = valid_patient("a@x.com");
    let id = service.register(&mut patient).unwrap();

    // Prime both cache layers.
    assert!(service.get(id).unwrap().is_some());
    assert_eq!(service.get_all().unwrap().len(), 1);
    let before = service.cache_status();

    // A write that fails at the store: update of an id that does not exist.
    let mut missing = valid_patient("c@x.com");
    missing.id = Some(999);
    assert!(matches!(
        service.update(&mut missing).unwrap_err(),
        RepoError::NotFound(999)
    ));

    assert_eq!(service.cache_status(), before);
    assert_eq!(service.get(id).unwrap().unwrap().address, "1 Rd");
}

#[test]
fn validation_failure_never_invalidates_or_touches_the_store() {
    let (repo, counters) = CountingRepo::new();
    let service = PatientService::new(repo);
    service.register(&mut valid_patient("a@x.com")).unwrap();
    assert_eq!(service.get_all().unwrap().len(), 1);

    let mut bad = valid_patient("not-an-email");
    assert!(matches!(
        service.register(&mut bad).unwrap_err(),
        RepoError::Validation(_)
    ));

    // The cached snapshot survived the failed register.
    assert_eq!(service.cache_status().list_count, 1);
    assert_eq!(service.get_all().unwrap().len(), 1);
    assert_eq!(counters.find_all_calls.get(), 1);
}
