use crate::commands::{CmdResult, Profile};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::{RecordStore, StorageBackend};
use crate::views::{activity_timeline, employee_code};

use super::helpers::listed_at;

pub fn run<B: StorageBackend>(store: &RecordStore<B>, index: DisplayIndex) -> Result<CmdResult> {
    let listed = listed_at(store, index)?;
    let profile = Profile {
        code: employee_code(index.position()),
        timeline: activity_timeline(&listed.employee),
        listed,
    };
    Ok(CmdResult::default().with_profile(profile))
}
