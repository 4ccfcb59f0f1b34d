use crate::commands::{CmdResult, ListedEmployee};
use crate::error::Result;
use crate::store::{RecordStore, StorageBackend};
use crate::views::dashboard_summary;

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let listed = store
        .employees()
        .iter()
        .enumerate()
        .map(|(position, employee)| ListedEmployee::new(position, employee))
        .collect();

    Ok(CmdResult::default()
        .with_listed(listed)
        .with_summary(dashboard_summary(store.employees())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::testing::{empty_store, sample_store};

    #[test]
    fn lists_everything_in_order() {
        let store = sample_store();
        let result = run(&store).unwrap();

        let numbers: Vec<usize> = result.listed.iter().map(|l| l.index.number()).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
        assert_eq!(result.listed[0].employee.name, "Sarah Johnson");
        assert!(result.listed[0].info.is_high_earner);
        assert!(!result.listed[1].info.is_high_earner);
        assert_eq!(result.summary.unwrap().total_employees, 5);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = empty_store();
        let result = run(&store).unwrap();
        assert!(result.listed.is_empty());
    }
}
