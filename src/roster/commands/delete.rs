use crate::commands::{CmdMessage, CmdResult, ListedEmployee};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{RecordStore, StorageBackend};

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, index: DisplayIndex) -> Result<CmdResult> {
    let removed = store.remove(index.position())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee deleted ({}): {}",
        index, removed.name
    )));
    if index.position() < store.len() {
        result.add_message(CmdMessage::info(format!(
            "Employees after {} moved up by one",
            index
        )));
    }
    Ok(result.with_affected(vec![ListedEmployee::new(index.position(), &removed)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::testing::sample_store;

    #[test]
    fn removes_and_shifts() {
        let mut store = sample_store();
        let result = run(&mut store, "1".parse().unwrap()).unwrap();

        assert_eq!(result.affected[0].employee.name, "Sarah Johnson");
        assert_eq!(result.messages.len(), 2);
        assert_eq!(store.len(), 4);
        assert_eq!(store.get(0).unwrap().name, "Michael Chen");
    }

    #[test]
    fn deleting_the_last_one_moves_nothing() {
        let mut store = sample_store();
        let result = run(&mut store, "5".parse().unwrap()).unwrap();
        assert_eq!(result.messages.len(), 1);
        assert_eq!(
            result.messages[0].content,
            "Employee deleted (5): Jessica Williams"
        );
    }
}
