//! User-facing employee references.
//!
//! The store addresses records by 0-based position. People (and links) use
//! 1-based numbers instead: `3`, or the profile code `EMP-0003`. A full UUID
//! also works and is resolved against the store's surrogate ids.

use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A 1-based position as shown in listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// The 0-based store position.
    pub fn position(&self) -> usize {
        self.0 - 1
    }

    pub fn number(&self) -> usize {
        self.0
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.get(..4) {
            Some(prefix) if prefix.eq_ignore_ascii_case("emp-") => &trimmed[4..],
            _ => trimmed,
        };
        match digits.parse::<usize>() {
            Ok(0) => Err(format!("Employee numbers start at 1: {}", s)),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid employee reference: {}", s)),
        }
    }
}

/// Anything a caller can use to point at one employee.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmployeeRef {
    Index(DisplayIndex),
    Id(Uuid),
}

impl fmt::Display for EmployeeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmployeeRef::Index(idx) => write!(f, "{}", idx),
            EmployeeRef::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for EmployeeRef {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(id) = Uuid::parse_str(s.trim()) {
            return Ok(EmployeeRef::Id(id));
        }
        DisplayIndex::from_str(s).map(EmployeeRef::Index)
    }
}
