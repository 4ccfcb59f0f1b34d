use crate::config::RosterConfig;
use crate::index::DisplayIndex;
use crate::model::Employee;
use crate::views::{DashboardSummary, DisplayInfo, TimelineEntry};
use std::path::PathBuf;

pub mod add;
pub mod bonus;
pub mod config;
pub mod dashboard;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod report;
pub mod search;
pub mod update;
pub mod view;

#[derive(Debug, Clone)]
pub struct RosterPaths {
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// An employee together with where it currently sits in the collection.
#[derive(Debug, Clone)]
pub struct ListedEmployee {
    pub index: DisplayIndex,
    pub employee: Employee,
    pub info: DisplayInfo,
}

impl ListedEmployee {
    pub fn new(position: usize, employee: &Employee) -> Self {
        Self {
            index: DisplayIndex::from_position(position),
            employee: employee.clone(),
            info: crate::views::display_info(employee),
        }
    }
}

/// Everything the profile page shows for one employee.
#[derive(Debug, Clone)]
pub struct Profile {
    pub listed: ListedEmployee,
    pub code: String,
    pub timeline: Vec<TimelineEntry>,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<ListedEmployee>,
    pub listed: Vec<ListedEmployee>,
    pub summary: Option<DashboardSummary>,
    pub profile: Option<Profile>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, employees: Vec<ListedEmployee>) -> Self {
        self.affected = employees;
        self
    }

    pub fn with_listed(mut self, employees: Vec<ListedEmployee>) -> Self {
        self.listed = employees;
        self
    }

    pub fn with_summary(mut self, summary: DashboardSummary) -> Self {
        self.summary = Some(summary);
        self
    }

    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }
}
