//! # Tudu Architecture
//!
//! Tudu is a **UI-agnostic todo library**. The binary wires two thin
//! front-ends (a one-shot subcommand CLI and an interactive menu) over the
//! same core; the core itself never touches a terminal.
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Front-ends (main.rs, args.rs, menu.rs, cli/)               │
//! │  - Parses arguments, runs prompts, formats output           │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Services (query, stats, undo, dates)                       │
//! │  - Stateless reads over a store snapshot, plus the          │
//! │    single-slot undo register and the due-date resolver      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store)                                            │
//! │  - Owns the live collection, assigns ids, all mutation      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the services inward, code takes regular Rust arguments, returns
//! `Result` types, never writes to stdout/stderr, and never assumes a
//! terminal. The same core could back a TUI or an HTTP handler.
//!
//! Everything is in-memory for the lifetime of the process. There is no
//! persistence: exiting discards the collection, by design.
//!
//! ## Module Overview
//!
//! - [`model`]: Core data types (`Todo`, `Priority`) and validation
//! - [`store`]: The owning collection with id assignment
//! - [`query`]: Search, filters, combined filter, and sorts
//! - [`stats`]: Completion, breakdown, and overdue aggregations
//! - [`undo`]: Single-level undo register
//! - [`dates`]: Due-date shortcut resolver
//! - [`error`]: Error types

pub mod dates;
pub mod error;
pub mod model;
pub mod query;
pub mod stats;
pub mod store;
pub mod undo;
