//! # Roster Architecture
//!
//! Roster is a **UI-agnostic employee-records library**. The bundled CLI is
//! one host for it; a browser front end or a web service could drive the very
//! same API.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Resolves references ("3", "EMP-0003", UUID) → positions  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per user action, returns CmdResult            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Store (store/) + Derived Views (views.rs)           │
//! │  - Owned employee collection mirrored to a key-value slot   │
//! │  - Pure dashboard / profile projections                     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Identity
//!
//! Employees are addressed by position, exactly as listings number them.
//! Deleting an employee renumbers everyone after it. Each record also has a
//! stable UUID for callers that need an address which survives deletes.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes plain Rust arguments, returns
//! `Result<CmdResult>`, never prints and never exits. Diagnostics are
//! `tracing` events; installing a subscriber is the host's job (see
//! [`logging`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per user action
//! - [`store`]: Record store, storage backends
//! - [`model`]: `Employee`, `EmployeeDraft`, sample data
//! - [`validation`]: Email normalization/uniqueness and strict mode
//! - [`views`]: Dashboard, display info, activity timeline, currency formatting
//! - [`index`]: User-facing employee references
//! - [`config`]: Configuration stored beside the data
//! - [`logging`]: Subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
pub mod views;
