use colored::Colorize;
use roster::api::{CmdMessage, ListedEmployee, MessageLevel, Profile};
use roster::config::RosterConfig;
use roster::views::{format_currency, DashboardSummary, TimelineKind};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const NAME_WIDTH: usize = 24;
const EMAIL_WIDTH: usize = 32;
const DEPARTMENT_WIDTH: usize = 14;
const SALARY_WIDTH: usize = 12;
const HIGH_EARNER_MARKER: &str = "★";

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub fn print_summary(summary: &DashboardSummary) {
    println!(
        "{} {}   {} {}   {} {}",
        "Employees:".dimmed(),
        summary.total_employees.to_string().bold(),
        "Monthly payroll:".dimmed(),
        format_currency(summary.monthly_payroll).bold(),
        "Departments:".dimmed(),
        summary.department_count.to_string().bold(),
    );
}

pub fn print_employees(employees: &[ListedEmployee]) {
    if employees.is_empty() {
        println!("No employees found.");
        return;
    }

    for listed in employees {
        let idx_str = format!("{:>4}. ", listed.index.number());
        let name = pad_to_width(&listed.employee.name, NAME_WIDTH);
        let email = pad_to_width(&listed.employee.email, EMAIL_WIDTH);
        let department = pad_to_width(&listed.employee.department, DEPARTMENT_WIDTH);
        let salary = format!(
            "{:>width$}",
            listed.info.formatted_salary,
            width = SALARY_WIDTH
        );
        let marker = if listed.info.is_high_earner {
            format!(" {}", HIGH_EARNER_MARKER.yellow())
        } else {
            String::new()
        };

        println!(
            "{}{} {} {} {}{}",
            idx_str.yellow(),
            name.bold(),
            email.dimmed(),
            department,
            salary.green(),
            marker
        );
    }
}

pub fn print_profile(profile: &Profile) {
    let employee = &profile.listed.employee;
    let info = &profile.listed.info;

    let star = if info.is_high_earner {
        format!(" {}", HIGH_EARNER_MARKER.yellow())
    } else {
        String::new()
    };
    println!("[{}] {}{}", info.initials.bold(), employee.name.bold(), star);
    println!("{}", employee.email.dimmed());
    let badge = if info.is_high_earner {
        format!("  {}", "High Earner".yellow())
    } else {
        String::new()
    };
    println!("{}{}  {}", employee.department.cyan(), badge, "Active".green());
    println!("--------------------------------");

    print_field("Employee ID", &profile.code);
    print_field("Id", &employee.id.to_string());
    print_field("Department", &employee.department);
    print_field("Join Date", &info.join_date);
    print_field("Monthly Salary", &info.formatted_salary);
    print_field("Annual Salary", &info.formatted_annual_salary);
    print_field("Total Bonuses", &info.formatted_bonuses);

    println!();
    println!("{}", "Activity".bold());
    for entry in &profile.timeline {
        let icon = match entry.kind {
            TimelineKind::BonusReceived => "+",
            TimelineKind::EmployeeAdded => "*",
            TimelineKind::SalaryUpdated => "$",
        };
        println!(
            "  {} {} - {} {}",
            icon.yellow(),
            entry.title.bold(),
            entry.description,
            format!("({})", entry.date).dimmed()
        );
    }
}

pub fn print_config(config: &RosterConfig) {
    for key in RosterConfig::KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn print_field(label: &str, value: &str) {
    let label = format!("{:<16}", format!("{}:", label));
    println!("{}{}", label.dimmed(), value);
}

/// Truncates with an ellipsis or pads with spaces to exactly `width` columns.
fn pad_to_width(s: &str, width: usize) -> String {
    let truncated = truncate_to_width(s, width);
    let padding = width.saturating_sub(truncated.width());
    format!("{}{}", truncated, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
