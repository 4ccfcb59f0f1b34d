use crate::commands::{CmdResult, ListedEmployee};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &RecordStore<B>, query: &str) -> Result<CmdResult> {
    let listed = store
        .search(query)
        .into_iter()
        .map(|(position, employee)| ListedEmployee::new(position, employee))
        .collect();
    Ok(CmdResult::default().with_listed(listed))
}
