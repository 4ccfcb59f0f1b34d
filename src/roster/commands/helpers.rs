use crate::commands::ListedEmployee;
use crate::error::{Result, RosterError};
use crate::index::{DisplayIndex, EmployeeRef};
use crate::store::{RecordStore, StorageBackend};

/// Maps any reference onto the position it currently points at.
pub fn resolve_ref<B: StorageBackend>(
    store: &RecordStore<B>,
    reference: &EmployeeRef,
) -> Result<DisplayIndex> {
    match reference {
        EmployeeRef::Index(idx) => {
            store.get(idx.position())?;
            Ok(*idx)
        }
        EmployeeRef::Id(id) => store
            .position_of(id)
            .map(DisplayIndex::from_position)
            .ok_or(RosterError::UnknownEmployee(*id)),
    }
}

pub fn listed_at<B: StorageBackend>(
    store: &RecordStore<B>,
    index: DisplayIndex,
) -> Result<ListedEmployee> {
    let employee = store.get(index.position())?;
    Ok(ListedEmployee::new(index.position(), employee))
}
