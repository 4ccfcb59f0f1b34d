use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shown wherever an employee has no recorded join date.
pub const DEFAULT_JOIN_DATE: &str = "January 2024";

/// Amount added by a bonus when the caller does not pick one.
pub const DEFAULT_BONUS: f64 = 1000.0;

/// Salaries strictly above this mark an employee as a high earner.
pub const HIGH_EARNER_THRESHOLD: f64 = 100_000.0;

const SAMPLE_EMPLOYEES: [(&str, &str, &str, f64); 5] = [
    (
        "Sarah Johnson",
        "sarah.johnson@hrmpro.com",
        "Engineering",
        120_000.0,
    ),
    (
        "Michael Chen",
        "michael.chen@hrmpro.com",
        "Marketing",
        85_000.0,
    ),
    (
        "Emily Rodriguez",
        "emily.rodriguez@hrmpro.com",
        "Sales",
        95_000.0,
    ),
    ("David Kim", "david.kim@hrmpro.com", "Finance", 110_000.0),
    (
        "Jessica Williams",
        "jessica.williams@hrmpro.com",
        "HR",
        78_000.0,
    ),
];

/// A single employee record as persisted in the `employees` slot.
///
/// Field names serialize in camelCase so the slot stays readable by (and
/// loadable from) the browser layout: `name, email, department, salary`
/// plus the optional `joinDate` and `totalBonuses`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Stable surrogate key. Records written without one deserialize as nil
    /// and are given a persisted id when the store loads them.
    #[serde(default)]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_bonuses: Option<f64>,
}

impl Employee {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            department: department.into(),
            salary,
            join_date: None,
            total_bonuses: None,
        }
    }

    pub fn join_date_or_default(&self) -> &str {
        self.join_date.as_deref().unwrap_or(DEFAULT_JOIN_DATE)
    }

    pub fn bonuses(&self) -> f64 {
        self.total_bonuses.unwrap_or(0.0)
    }
}

/// User input for creating or replacing an employee.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub department: String,
    pub salary: f64,
    pub join_date: Option<String>,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: impl Into<String>,
        salary: f64,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            department: department.into(),
            salary,
            join_date: None,
        }
    }

    pub fn with_join_date(mut self, join_date: impl Into<String>) -> Self {
        self.join_date = Some(join_date.into());
        self
    }

    /// Builds the record that replaces (or is appended for) this draft.
    /// Bonus history is never carried over: an edit is a full overwrite.
    pub(crate) fn into_employee(self, id: Uuid) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            department: self.department,
            salary: self.salary,
            join_date: self.join_date,
            total_bonuses: None,
        }
    }
}

/// The five records a fresh store starts with.
pub fn sample_employees() -> Vec<Employee> {
    SAMPLE_EMPLOYEES
        .iter()
        .map(|(name, email, department, salary)| {
            Employee::new(*name, *email, *department, *salary)
        })
        .collect()
}

/// Turns `2023-03-14` or `2023-03` into `March 2023`; anything else is kept verbatim.
pub fn normalize_join_date(input: &str) -> String {
    let trimmed = input.trim();
    let parsed = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", trimmed), "%Y-%m-%d"));
    match parsed {
        Ok(date) => date.format("%B %Y").to_string(),
        Err(_) => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_records_without_optional_fields_deserialize() {
        let json = r#"{"name":"Ann Lee","email":"ann@x.com","department":"HR","salary":50000}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.name, "Ann Lee");
        assert!(employee.id.is_nil());
        assert_eq!(employee.join_date, None);
        assert_eq!(employee.total_bonuses, None);
        assert_eq!(employee.join_date_or_default(), "January 2024");
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_fields() {
        let mut employee = Employee::new("Ann Lee", "ann@x.com", "HR", 50_000.0);
        let json = serde_json::to_string(&employee).unwrap();
        assert!(!json.contains("joinDate"));
        assert!(!json.contains("totalBonuses"));

        employee.join_date = Some("March 2023".into());
        employee.total_bonuses = Some(1000.0);
        let json = serde_json::to_string(&employee).unwrap();
        assert!(json.contains("\"joinDate\":\"March 2023\""));
        assert!(json.contains("\"totalBonuses\":1000.0"));
    }

    #[test]
    fn sample_data_has_five_distinct_departments() {
        let samples = sample_employees();
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].name, "Sarah Johnson");
        assert_eq!(samples[4].department, "HR");
    }

    #[test]
    fn join_dates_are_normalized_to_month_and_year() {
        assert_eq!(normalize_join_date("2023-03-14"), "March 2023");
        assert_eq!(normalize_join_date("2021-11"), "November 2021");
        assert_eq!(normalize_join_date(" Spring 2020 "), "Spring 2020");
    }
}
