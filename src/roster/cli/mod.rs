//! Terminal front end: argument parsing and output formatting.
//! Nothing in here is part of the library API.

pub mod args;
pub mod print;
