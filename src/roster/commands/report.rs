use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{RecordStore, StorageBackend};

use super::helpers::listed_at;

/// Placeholder for per-employee reports. Nothing is generated.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, index: DisplayIndex) -> Result<CmdResult> {
    let listed = listed_at(store, index)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Generating report for {}...",
        listed.employee.name
    )));
    result.add_message(CmdMessage::warning(
        "Reports are not available yet. A report would include employee details, \
         salary history, performance metrics and attendance records.",
    ));
    Ok(result.with_affected(vec![listed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::helpers::testing::sample_store;
    use crate::commands::MessageLevel;

    #[test]
    fn only_announces() {
        let store = sample_store();
        let before = store.employees().to_vec();

        let result = run(&store, "1".parse().unwrap()).unwrap();

        assert_eq!(result.messages[0].content, "Generating report for Sarah Johnson...");
        assert_eq!(result.messages[1].level, MessageLevel::Warning);
        assert_eq!(store.employees(), before.as_slice());
    }
}
