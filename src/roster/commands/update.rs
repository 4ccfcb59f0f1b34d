use crate::commands::{CmdMessage, CmdResult, ListedEmployee};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::model::EmployeeDraft;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    index: DisplayIndex,
    draft: EmployeeDraft,
) -> Result<CmdResult> {
    let updated = store.update(index.position(), draft)?;
    let listed = ListedEmployee::new(index.position(), updated);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee updated ({}): {}",
        index, listed.employee.name
    )));
    Ok(result.with_affected(vec![listed]))
}
