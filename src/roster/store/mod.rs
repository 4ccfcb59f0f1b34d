//! # Storage Layer
//!
//! [`RecordStore`] owns the employee collection for a session. It is loaded
//! once from a [`StorageBackend`] slot and mirrors the whole collection back to
//! that slot after every mutation.
//!
//! ## Positional identity
//!
//! Callers address employees by their position in the ordered collection, the
//! same scheme the host UI uses for links and edit targets. Removing a record
//! shifts every later position down by one. Each record also carries a stable
//! [`Uuid`] that can be mapped back to its current position with
//! [`RecordStore::position_of`].
//!
//! ## Implementations
//!
//! - [`fs_backend::FsBackend`]: production storage, one `<key>.json` file per slot
//! - [`mem_backend::MemBackend`]: in-memory storage for testing
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── employees.json   # JSON array of every employee, in display order
//! └── config.json      # RosterConfig
//! ```
//!
//! ## Failure atomicity
//!
//! Validation runs before anything changes. If persisting fails afterwards
//! the in-memory change is rolled back, so memory and slot never disagree.

use crate::error::{Result, RosterError};
use crate::model::{sample_employees, Employee, EmployeeDraft};
use crate::validation::{normalize_email, validate_draft, ValidationMode};
use tracing::{debug, info, warn};
use uuid::Uuid;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;

pub use backend::StorageBackend;

/// Name of the slot holding the serialized collection.
pub const EMPLOYEES_KEY: &str = "employees";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreOptions {
    /// Seed the sample records when the slot is empty.
    pub seed_sample_data: bool,
    pub mode: ValidationMode,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            seed_sample_data: true,
            mode: ValidationMode::Lenient,
        }
    }
}

pub struct RecordStore<B: StorageBackend> {
    pub(crate) backend: B,
    employees: Vec<Employee>,
    mode: ValidationMode,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Open the store, reading the persisted collection.
    ///
    /// An absent slot is a valid state: the store starts with the sample
    /// records (persisting them) or empty, depending on `options`.
    pub fn load(backend: B, options: StoreOptions) -> Result<Self> {
        let mut store = Self {
            backend,
            employees: Vec::new(),
            mode: options.mode,
        };

        match store.backend.get_item(EMPLOYEES_KEY)? {
            Some(raw) => {
                store.employees = serde_json::from_str(&raw)?;
                debug!(count = store.employees.len(), "loaded employees");

                let assigned = store.assign_missing_ids();
                if assigned > 0 {
                    store.save()?;
                    info!(count = assigned, "assigned ids to records stored without one");
                }
            }
            None if options.seed_sample_data => {
                store.employees = sample_employees();
                store.save()?;
                info!(count = store.employees.len(), "seeded sample employees");
            }
            None => debug!("no stored employees, starting empty"),
        }

        Ok(store)
    }

    /// Give every nil-id record a fresh id; returns how many were assigned.
    fn assign_missing_ids(&mut self) -> usize {
        let mut assigned = 0;
        for employee in self.employees.iter_mut().filter(|e| e.id.is_nil()) {
            employee.id = Uuid::new_v4();
            assigned += 1;
        }
        assigned
    }

    /// Serialize the whole collection and overwrite the slot.
    pub fn save(&self) -> Result<()> {
        let raw = serde_json::to_string_pretty(&self.employees)?;
        self.backend.set_item(EMPLOYEES_KEY, &raw)?;
        debug!(count = self.employees.len(), "saved employees");
        Ok(())
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Switch validation for later mutations; stored records are not rechecked.
    pub fn set_mode(&mut self, mode: ValidationMode) {
        self.mode = mode;
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Employee> {
        self.employees.get(index).ok_or(RosterError::NotFound {
            index,
            len: self.employees.len(),
        })
    }

    pub fn position_of(&self, id: &Uuid) -> Option<usize> {
        self.employees.iter().position(|e| &e.id == id)
    }

    pub fn get_by_id(&self, id: &Uuid) -> Result<&Employee> {
        self.employees
            .iter()
            .find(|e| &e.id == id)
            .ok_or(RosterError::UnknownEmployee(*id))
    }

    /// Validate and append. Returns the new record's position.
    pub fn add(&mut self, mut draft: EmployeeDraft) -> Result<usize> {
        if let Err(e) = validate_draft(&mut draft, &self.employees, None, self.mode) {
            warn!(email = %draft.email, error = %e, "rejected new employee");
            return Err(e);
        }

        self.employees.push(draft.into_employee(Uuid::new_v4()));
        if let Err(e) = self.save() {
            self.employees.pop();
            return Err(e);
        }

        let index = self.employees.len() - 1;
        info!(index, "added employee");
        Ok(index)
    }

    /// Replace the record at `index` entirely with `draft`.
    ///
    /// This is a full overwrite: accumulated bonuses are not carried over.
    /// The record keeps its surrogate id.
    pub fn update(&mut self, index: usize, mut draft: EmployeeDraft) -> Result<&Employee> {
        let id = self.get(index)?.id;
        if let Err(e) = validate_draft(&mut draft, &self.employees, Some(index), self.mode) {
            warn!(index, email = %draft.email, error = %e, "rejected employee update");
            return Err(e);
        }

        let previous = std::mem::replace(&mut self.employees[index], draft.into_employee(id));
        if let Err(e) = self.save() {
            self.employees[index] = previous;
            return Err(e);
        }

        info!(index, "updated employee");
        Ok(&self.employees[index])
    }

    /// Delete the record at `index`, shifting every later record down by one.
    pub fn remove(&mut self, index: usize) -> Result<Employee> {
        self.get(index)?;

        let removed = self.employees.remove(index);
        if let Err(e) = self.save() {
            self.employees.insert(index, removed);
            return Err(e);
        }

        info!(index, "removed employee");
        Ok(removed)
    }

    /// Add `amount` to both the salary and the bonus total.
    pub fn apply_bonus(&mut self, index: usize, amount: f64) -> Result<&Employee> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(RosterError::InvalidAmount(amount));
        }
        self.get(index)?;

        let previous = self.employees[index].clone();
        {
            let employee = &mut self.employees[index];
            employee.salary += amount;
            employee.total_bonuses = Some(employee.bonuses() + amount);
        }
        if let Err(e) = self.save() {
            self.employees[index] = previous;
            return Err(e);
        }

        info!(index, amount, "applied bonus");
        Ok(&self.employees[index])
    }

    /// Case-insensitive substring match on name, email and department.
    ///
    /// Results keep their original order and position. A blank query
    /// matches everything.
    pub fn search(&self, query: &str) -> Vec<(usize, &Employee)> {
        let term = query.trim().to_lowercase();
        self.employees
            .iter()
            .enumerate()
            .filter(|(_, e)| {
                term.is_empty()
                    || e.name.to_lowercase().contains(&term)
                    || normalize_email(&e.email).contains(&term)
                    || e.department.to_lowercase().contains(&term)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::mem_backend::MemBackend;
    use super::*;

    fn empty_store() -> RecordStore<MemBackend> {
        let options = StoreOptions {
            seed_sample_data: false,
            ..StoreOptions::default()
        };
        RecordStore::load(MemBackend::new(), options).unwrap()
    }

    fn sample_store() -> RecordStore<MemBackend> {
        RecordStore::load(MemBackend::new(), StoreOptions::default()).unwrap()
    }

    fn draft(n: usize) -> EmployeeDraft {
        EmployeeDraft::new(
            format!("Person {}", n),
            format!("person{}@example.com", n),
            "Ops",
            50_000.0,
        )
    }

    fn persisted(store: &RecordStore<MemBackend>) -> Vec<Employee> {
        let raw = store.backend.get_item(EMPLOYEES_KEY).unwrap().unwrap();
        serde_json::from_str(&raw).unwrap()
    }

    #[test]
    fn empty_slot_is_seeded_and_persisted() {
        let store = sample_store();
        assert_eq!(store.len(), 5);
        assert_eq!(persisted(&store), store.employees());
    }

    #[test]
    fn empty_slot_without_seeding_stays_empty() {
        let store = empty_store();
        assert!(store.is_empty());
        assert_eq!(store.backend.get_item(EMPLOYEES_KEY).unwrap(), None);
    }

    #[test]
    fn existing_slot_is_loaded_as_is() {
        let raw = r#"[{"name":"Ann Lee","email":"ann@x.com","department":"HR","salary":50000,"totalBonuses":2000}]"#;
        let backend = MemBackend::with_item(EMPLOYEES_KEY, raw);
        let store = RecordStore::load(backend, StoreOptions::default()).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.get(0).unwrap().total_bonuses, Some(2000.0));
    }

    #[test]
    fn records_without_ids_get_ids_that_are_written_back() {
        let raw = r#"[{"name":"Ann Lee","email":"ann@x.com","department":"HR","salary":50000},
                      {"name":"Bo Park","email":"bo@x.com","department":"HR","salary":40000}]"#;
        let store =
            RecordStore::load(MemBackend::with_item(EMPLOYEES_KEY, raw), StoreOptions::default())
                .unwrap();

        let ids: Vec<Uuid> = store.employees().iter().map(|e| e.id).collect();
        assert!(ids.iter().all(|id| !id.is_nil()));
        assert_ne!(ids[0], ids[1]);

        let stored: Vec<Uuid> = persisted(&store).iter().map(|e| e.id).collect();
        assert_eq!(stored, ids);
    }

    #[test]
    fn load_with_ids_present_does_not_rewrite_the_slot() {
        let seeded = sample_store();
        let raw = seeded.backend.get_item(EMPLOYEES_KEY).unwrap().unwrap();

        let backend = MemBackend::with_item(EMPLOYEES_KEY, &raw);
        backend.set_simulate_write_error(true);
        let store = RecordStore::load(backend, StoreOptions::default()).unwrap();
        assert_eq!(store.employees(), seeded.employees());
    }

    #[test]
    fn corrupt_slot_is_an_error_not_a_reseed() {
        let backend = MemBackend::with_item(EMPLOYEES_KEY, "{not json");
        let err = RecordStore::load(backend, StoreOptions::default()).err();
        assert!(matches!(err, Some(RosterError::Serialization(_))));
    }

    #[test]
    fn n_adds_yield_n_records_with_last_at_end() {
        let mut store = empty_store();
        for n in 0..4 {
            let index = store.add(draft(n)).unwrap();
            assert_eq!(index, n);
        }
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(3).unwrap().email, "person3@example.com");
        assert_eq!(persisted(&store).len(), 4);
    }

    #[test]
    fn duplicate_add_leaves_collection_unchanged() {
        let mut store = sample_store();
        let before = store.employees().to_vec();

        let dup = EmployeeDraft::new("Other", "Sarah.Johnson@HRMPRO.com", "HR", 1.0);
        let err = store.add(dup).unwrap_err();

        assert!(matches!(err, RosterError::DuplicateEmail(_)));
        assert_eq!(store.employees(), before.as_slice());
        assert_eq!(persisted(&store), before);
    }

    #[test]
    fn add_stores_lowercased_email() {
        let mut store = empty_store();
        let index = store
            .add(EmployeeDraft::new("Ann", "Ann@Example.COM", "HR", 1.0))
            .unwrap();
        assert_eq!(store.get(index).unwrap().email, "ann@example.com");
    }

    #[test]
    fn update_with_own_email_succeeds_and_overwrites() {
        let mut store = sample_store();
        store.apply_bonus(0, 1000.0).unwrap();
        let id = store.get(0).unwrap().id;

        let replacement = EmployeeDraft::new(
            "Sarah J. Johnson",
            "SARAH.JOHNSON@hrmpro.com",
            "Platform",
            130_000.0,
        );
        let updated = store.update(0, replacement).unwrap();

        assert_eq!(updated.name, "Sarah J. Johnson");
        assert_eq!(updated.department, "Platform");
        assert_eq!(updated.total_bonuses, None);
        assert_eq!(updated.id, id);
        assert_eq!(persisted(&store)[0].salary, 130_000.0);
    }

    #[test]
    fn update_to_another_records_email_fails() {
        let mut store = sample_store();
        let replacement = EmployeeDraft::new("Sarah", "david.kim@hrmpro.com", "Eng", 1.0);
        assert!(matches!(
            store.update(0, replacement),
            Err(RosterError::DuplicateEmail(_))
        ));
        assert_eq!(store.get(0).unwrap().name, "Sarah Johnson");
    }

    #[test]
    fn out_of_range_operations_are_not_found() {
        let mut store = sample_store();
        assert!(matches!(
            store.get(5),
            Err(RosterError::NotFound { index: 5, len: 5 })
        ));
        assert!(matches!(
            store.update(7, draft(1)),
            Err(RosterError::NotFound { .. })
        ));
        assert!(matches!(store.remove(5), Err(RosterError::NotFound { .. })));
        assert!(matches!(
            store.apply_bonus(9, 1000.0),
            Err(RosterError::NotFound { .. })
        ));
    }

    #[test]
    fn remove_shifts_later_records_down() {
        let mut store = sample_store();
        let before = store.employees().to_vec();

        let removed = store.remove(2).unwrap();

        assert_eq!(removed, before[2]);
        assert_eq!(store.len(), 4);
        assert_eq!(store.employees()[..2], before[..2]);
        assert_eq!(store.get(2).unwrap(), &before[3]);
        assert_eq!(store.get(3).unwrap(), &before[4]);
        assert_eq!(store.position_of(&before[4].id), Some(3));
    }

    #[test]
    fn two_bonuses_add_two_thousand() {
        let mut store = sample_store();
        let start = store.get(1).unwrap().salary;

        store.apply_bonus(1, 1000.0).unwrap();
        let employee = store.apply_bonus(1, 1000.0).unwrap();

        assert_eq!(employee.salary, start + 2000.0);
        assert_eq!(employee.total_bonuses, Some(2000.0));
        assert_eq!(persisted(&store)[1].total_bonuses, Some(2000.0));
    }

    #[test]
    fn negative_bonus_is_rejected() {
        let mut store = sample_store();
        assert!(matches!(
            store.apply_bonus(0, -1.0),
            Err(RosterError::InvalidAmount(_))
        ));
        assert!(store.apply_bonus(0, f64::NAN).is_err());
        assert_eq!(store.get(0).unwrap().salary, 120_000.0);
    }

    #[test]
    fn failed_persist_rolls_back_every_mutation() {
        let mut store = sample_store();
        let before = store.employees().to_vec();
        store.backend.set_simulate_write_error(true);

        assert!(store.add(draft(1)).is_err());
        assert!(store.update(0, draft(2)).is_err());
        assert!(store.remove(1).is_err());
        assert!(store.apply_bonus(2, 1000.0).is_err());

        assert_eq!(store.employees(), before.as_slice());
    }

    #[test]
    fn search_matches_name_email_and_department() {
        let store = sample_store();

        let eng = store.search("eng");
        assert_eq!(eng.len(), 1);
        assert_eq!(eng[0].0, 0);
        assert_eq!(eng[0].1.name, "Sarah Johnson");

        let by_email = store.search("KIM@");
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].0, 3);

        let by_name = store.search("  chen ");
        assert_eq!(by_name[0].1.department, "Marketing");

        assert!(store.search("nobody").is_empty());
    }

    #[test]
    fn blank_search_returns_everything_in_order() {
        let store = sample_store();
        let all: Vec<usize> = store.search("").into_iter().map(|(i, _)| i).collect();
        assert_eq!(all, vec![0, 1, 2, 3, 4]);
        assert_eq!(store.search("   ").len(), 5);
    }

    #[test]
    fn search_keeps_relative_order() {
        let store = sample_store();
        // Engineering, Marketing, Finance
        let positions: Vec<usize> = store
            .search("IN")
            .into_iter()
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions, vec![0, 1, 3]);
    }

    #[test]
    fn strict_mode_is_applied_by_the_store() {
        let options = StoreOptions {
            seed_sample_data: false,
            mode: ValidationMode::Strict,
        };
        let mut store = RecordStore::load(MemBackend::new(), options).unwrap();
        let err = store
            .add(EmployeeDraft::new("", "a@b.c", "HR", 1.0))
            .unwrap_err();
        assert!(matches!(err, RosterError::Invalid(_)));
        assert!(store.is_empty());

        store.set_mode(ValidationMode::Lenient);
        store.add(EmployeeDraft::new("", "a@b.c", "HR", 1.0)).unwrap();
        assert_eq!(store.len(), 1);
    }
}
