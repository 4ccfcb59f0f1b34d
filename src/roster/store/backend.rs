use crate::error::Result;

/// Raw key-value slot storage.
///
/// This trait handles the "how" of persistence (filesystem vs memory), while
/// [`RecordStore`](super::RecordStore) handles the "what": the employee
/// collection, its validation and its invariants. Each slot holds one
/// serialized document and is always overwritten whole.
pub trait StorageBackend {
    /// Read a slot. Returns Ok(None) when nothing was ever written to it.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite a slot.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a slot. Removing a missing slot is not an error.
    fn remove_item(&self, key: &str) -> Result<()>;
}
