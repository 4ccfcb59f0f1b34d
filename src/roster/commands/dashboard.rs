use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};
use crate::views::dashboard_summary;

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    Ok(CmdResult::default().with_summary(dashboard_summary(store.employees())))
}
