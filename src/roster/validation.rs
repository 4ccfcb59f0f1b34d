//! Validation shared by add and update.
//!
//! Only email uniqueness is checked by default, so records kept by older
//! hosts always load and edit cleanly. [`ValidationMode::Strict`] also rejects
//! empty names/departments and negative salaries.

use crate::error::{Result, RosterError};
use crate::model::{Employee, EmployeeDraft};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    #[default]
    Lenient,
    Strict,
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Normalizes `draft` in place and checks it against `existing`.
///
/// `replacing` is the position being overwritten by an update; that record's
/// own email does not count as a duplicate.
pub fn validate_draft(
    draft: &mut EmployeeDraft,
    existing: &[Employee],
    replacing: Option<usize>,
    mode: ValidationMode,
) -> Result<()> {
    draft.name = draft.name.trim().to_string();
    draft.email = normalize_email(&draft.email);
    draft.department = draft.department.trim().to_string();

    if !draft.salary.is_finite() {
        return Err(RosterError::Invalid(format!(
            "salary must be a number, got {}",
            draft.salary
        )));
    }

    if mode == ValidationMode::Strict {
        check_strict(draft)?;
    }

    let taken = existing
        .iter()
        .enumerate()
        .filter(|(position, _)| Some(*position) != replacing)
        .any(|(_, employee)| normalize_email(&employee.email) == draft.email);

    if taken {
        return Err(RosterError::DuplicateEmail(draft.email.clone()));
    }

    Ok(())
}

fn check_strict(draft: &EmployeeDraft) -> Result<()> {
    if draft.name.is_empty() {
        return Err(RosterError::Invalid("name cannot be empty".into()));
    }
    if draft.department.is_empty() {
        return Err(RosterError::Invalid("department cannot be empty".into()));
    }
    if draft.salary < 0.0 {
        return Err(RosterError::Invalid(format!(
            "salary cannot be negative, got {}",
            draft.salary
        )));
    }
    Ok(())
}
