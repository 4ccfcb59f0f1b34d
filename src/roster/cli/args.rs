use clap::{Args, Parser, Subcommand};
use roster::model::{normalize_join_date, EmployeeDraft};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Keep track of employees, salaries and bonuses", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding employees.json and config.json
    /// (defaults to $ROSTER_DATA_DIR, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List employees
    #[command(alias = "ls")]
    List {
        /// Only show employees matching this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search by name, email or department
    Search {
        #[arg(required = true, num_args = 1..)]
        terms: Vec<String>,
    },

    /// Add an employee
    #[command(alias = "n")]
    Add(EmployeeFields),

    /// Replace an employee's details
    #[command(alias = "e")]
    Edit {
        /// Employee number (e.g. 3 or EMP-0003) or id
        reference: String,

        #[command(flatten)]
        fields: EmployeeFields,
    },

    /// Delete an employee (later employees are renumbered)
    #[command(alias = "rm")]
    Delete {
        /// Employee number (e.g. 3 or EMP-0003) or id
        reference: String,
    },

    /// Give an employee a bonus
    #[command(alias = "b")]
    Bonus {
        /// Employee number (e.g. 3 or EMP-0003) or id
        reference: String,

        /// Bonus amount (defaults to the configured bonus-amount)
        #[arg(short, long, allow_negative_numbers = true)]
        amount: Option<f64>,
    },

    /// Show an employee's profile
    #[command(alias = "v")]
    View {
        /// Employee number (e.g. 3 or EMP-0003) or id
        reference: String,
    },

    /// Show headcount, payroll and department totals
    #[command(alias = "stats")]
    Dashboard,

    /// Generate a report for an employee
    Report {
        /// Employee number (e.g. 3 or EMP-0003) or id
        reference: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (bonus-amount, strict, seed-samples)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Args, Debug, Clone)]
pub struct EmployeeFields {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Email address (must be unique, case-insensitive)
    #[arg(long)]
    pub email: String,

    /// Department
    #[arg(long)]
    pub department: String,

    /// Monthly salary
    #[arg(long, allow_negative_numbers = true)]
    pub salary: f64,

    /// Join date, e.g. 2023-03-14 or 2023-03
    #[arg(long)]
    pub join_date: Option<String>,
}

impl EmployeeFields {
    pub fn into_draft(self) -> EmployeeDraft {
        let draft = EmployeeDraft::new(self.name, self.email, self.department, self.salary);
        match self.join_date {
            Some(date) => draft.with_join_date(normalize_join_date(&date)),
            None => draft,
        }
    }
}
