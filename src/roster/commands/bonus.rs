use crate::commands::{CmdMessage, CmdResult, ListedEmployee};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    index: DisplayIndex,
    amount: f64,
) -> Result<CmdResult> {
    let employee = store.apply_bonus(index.position(), amount)?;
    let listed = ListedEmployee::new(index.position(), employee);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Bonus added! New Salary: {}",
        listed.info.formatted_salary
    )));
    Ok(result.with_affected(vec![listed]))
}
