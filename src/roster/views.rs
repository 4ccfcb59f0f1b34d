//! # Derived Views
//!
//! Pure projections over the current store state, recomputed on demand and
//! never persisted: the dashboard aggregates, per-employee display data, and
//! the synthesized activity timeline shown on a profile.

use crate::model::{Employee, HIGH_EARNER_THRESHOLD};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub total_employees: usize,
    pub monthly_payroll: f64,
    pub department_count: usize,
}

pub fn dashboard_summary(employees: &[Employee]) -> DashboardSummary {
    let departments: HashSet<&str> = employees.iter().map(|e| e.department.as_str()).collect();
    DashboardSummary {
        total_employees: employees.len(),
        monthly_payroll: employees.iter().map(|e| e.salary).sum(),
        department_count: departments.len(),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayInfo {
    pub initials: String,
    pub is_high_earner: bool,
    pub formatted_salary: String,
    pub annual_salary: f64,
    pub formatted_annual_salary: String,
    pub formatted_bonuses: String,
    pub join_date: String,
}

pub fn display_info(employee: &Employee) -> DisplayInfo {
    let annual_salary = employee.salary * 12.0;
    DisplayInfo {
        initials: initials(&employee.name),
        is_high_earner: is_high_earner(employee.salary),
        formatted_salary: format_currency(employee.salary),
        annual_salary,
        formatted_annual_salary: format_currency(annual_salary),
        formatted_bonuses: format_currency(employee.bonuses()),
        join_date: employee.join_date_or_default().to_string(),
    }
}

/// Strictly greater than the threshold: exactly 100000 is not a high earner.
pub fn is_high_earner(salary: f64) -> bool {
    salary > HIGH_EARNER_THRESHOLD
}

/// First letter of every space-separated token, uppercased.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// `EMP-0001` style code for a 0-based position.
pub fn employee_code(position: usize) -> String {
    format!("EMP-{:04}", position + 1)
}

/// Dollar amount with en-US digit grouping and at most three decimals,
/// e.g. `$120,000` or `$1,234.5`.
pub fn format_currency(amount: f64) -> String {
    format!("${}", format_number(amount))
}

fn format_number(value: f64) -> String {
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if value < 0.0 && (grouped != "0" || !frac_part.is_empty()) {
        "-"
    } else {
        ""
    };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimelineKind {
    EmployeeAdded,
    SalaryUpdated,
    BonusReceived,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineEntry {
    pub kind: TimelineKind,
    pub title: String,
    pub description: String,
    pub date: String,
}

/// Synthesized activity list for a profile. There is no event log behind
/// it; entries are derived from the record's current fields.
pub fn activity_timeline(employee: &Employee) -> Vec<TimelineEntry> {
    let mut entries = Vec::with_capacity(3);

    if employee.bonuses() > 0.0 {
        entries.push(TimelineEntry {
            kind: TimelineKind::BonusReceived,
            title: "Bonus Received".to_string(),
            description: format!("Total bonuses: {}", format_currency(employee.bonuses())),
            date: "Recent".to_string(),
        });
    }

    entries.push(TimelineEntry {
        kind: TimelineKind::EmployeeAdded,
        title: "Employee Added".to_string(),
        description: "Profile created in the system".to_string(),
        date: employee.join_date_or_default().to_string(),
    });
    entries.push(TimelineEntry {
        kind: TimelineKind::SalaryUpdated,
        title: "Salary Updated".to_string(),
        description: format!("Current salary: {}", format_currency(employee.salary)),
        date: "Recent".to_string(),
    });

    entries
}
