use crate::commands::{CmdMessage, CmdResult, ListedEmployee};
use crate::error::Result;
use crate::model::EmployeeDraft;
use crate::store::{RecordStore, StorageBackend};
use crate::views::employee_code;

pub fn run<B: StorageBackend>(store: &mut RecordStore<B>, draft: EmployeeDraft) -> Result<CmdResult> {
    let position = store.add(draft)?;
    let listed = ListedEmployee::new(position, store.get(position)?);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Employee added ({}): {}",
        employee_code(position),
        listed.employee.name
    )));
    Ok(result.with_affected(vec![listed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::testing::{empty_store, sample_store};
    use crate::error::RosterError;

    #[test]
    fn appends_and_reports_new_index() {
        let mut store = sample_store();
        let draft = EmployeeDraft::new("Ann Lee", "Ann.Lee@hrmpro.com", "Design", 70_000.0);

        let result = run(&mut store, draft).unwrap();

        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].index.number(), 6);
        assert_eq!(result.affected[0].employee.email, "ann.lee@hrmpro.com");
        assert_eq!(result.affected[0].info.initials, "AL");
        assert_eq!(
            result.messages[0].content,
            "Employee added (EMP-0006): Ann Lee"
        );
    }

    #[test]
    fn keeps_join_date() {
        let mut store = empty_store();
        let draft = EmployeeDraft::new("A", "a@x", "HR", 1.0).with_join_date("March 2023");
        run(&mut store, draft).unwrap();
        assert_eq!(store.get(0).unwrap().join_date.as_deref(), Some("March 2023"));
    }

    #[test]
    fn duplicate_is_an_error() {
        let mut store = sample_store();
        let draft = EmployeeDraft::new("X", "DAVID.KIM@hrmpro.com", "HR", 1.0);
        assert!(matches!(
            run(&mut store, draft),
            Err(RosterError::DuplicateEmail(_))
        ));
        assert_eq!(store.len(), 5);
    }
}
