//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every roster operation, whichever UI drives it.
//!
//! The facade:
//! - **Resolves references**: `"3"`, `"EMP-0003"` or a UUID become a
//!   position in the current collection
//! - **Dispatches** to the matching command
//! - **Returns structured types** (`Result<CmdResult>`), never strings for a terminal
//!
//! `RosterApi<B: StorageBackend>` is generic over the storage backend:
//! `RosterApi<FsBackend>` in the binary, `RosterApi<MemBackend>` in tests.

use crate::commands;
use crate::commands::helpers::resolve_ref;
use crate::config::RosterConfig;
use crate::error::{Result, RosterError};
use crate::index::{DisplayIndex, EmployeeRef};
use crate::model::EmployeeDraft;
use crate::store::{RecordStore, StorageBackend};
use std::str::FromStr;
use tracing::debug;

pub struct RosterApi<B: StorageBackend> {
    store: RecordStore<B>,
    paths: commands::RosterPaths,
    config: RosterConfig,
}

impl<B: StorageBackend> RosterApi<B> {
    /// Load the store through `backend` using the settings in `config`.
    pub fn open(backend: B, paths: commands::RosterPaths, config: RosterConfig) -> Result<Self> {
        let store = RecordStore::load(backend, config.store_options())?;
        debug!(data_dir = %paths.data_dir.display(), count = store.len(), "roster opened");
        Ok(Self {
            store,
            paths,
            config,
        })
    }

    pub fn add_employee(&mut self, draft: EmployeeDraft) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, draft)
    }

    pub fn list_employees(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_employees(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn view_employee(&self, reference: &str) -> Result<commands::CmdResult> {
        let index = self.resolve(reference)?;
        commands::view::run(&self.store, index)
    }

    pub fn update_employee(
        &mut self,
        reference: &str,
        draft: EmployeeDraft,
    ) -> Result<commands::CmdResult> {
        let index = self.resolve(reference)?;
        commands::update::run(&mut self.store, index, draft)
    }

    pub fn delete_employee(&mut self, reference: &str) -> Result<commands::CmdResult> {
        let index = self.resolve(reference)?;
        commands::delete::run(&mut self.store, index)
    }

    /// Award a bonus; `amount` falls back to the configured bonus amount.
    pub fn give_bonus(
        &mut self,
        reference: &str,
        amount: Option<f64>,
    ) -> Result<commands::CmdResult> {
        let index = self.resolve(reference)?;
        let amount = amount.unwrap_or(self.config.bonus_amount);
        commands::bonus::run(&mut self.store, index, amount)
    }

    pub fn dashboard(&self) -> Result<commands::CmdResult> {
        commands::dashboard::run(&self.store)
    }

    pub fn report(&self, reference: &str) -> Result<commands::CmdResult> {
        let index = self.resolve(reference)?;
        commands::report::run(&self.store, index)
    }

    /// Read or change the stored config. Whatever the command reports as the
    /// current config also takes effect for this session.
    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.paths, action)?;
        if let Some(config) = &result.config {
            self.store.set_mode(config.validation_mode());
            self.config = config.clone();
            debug!(strict = config.strict, bonus_amount = config.bonus_amount, "config applied");
        }
        Ok(result)
    }

    pub fn paths(&self) -> &commands::RosterPaths {
        &self.paths
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    fn resolve(&self, reference: &str) -> Result<DisplayIndex> {
        let parsed = EmployeeRef::from_str(reference).map_err(RosterError::Api)?;
        resolve_ref(&self.store, &parsed)
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, ListedEmployee, MessageLevel, Profile, RosterPaths};
