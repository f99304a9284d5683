//! # School Registry Architecture
//!
//! School Registry is a **UI-agnostic directory library**: schools are registered
//! through a validated form and browsed through a searchable, filterable, sortable
//! view. The `schoolreg` binary is one client of this library, not the library itself.
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
//! │  - Normalizes inputs (sort keys, state filter → ViewState)  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Registration and listing flows                           │
//! │  - Built on pure validation and directory functions         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - SchoolStore trait: read_all / write_all                  │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Data Flow
//!
//! A submission is validated ([`validation`]). On success it is appended to the
//! stored collection, which is written back whole. Listing re-reads the collection
//! and re-derives the ordered view with [`directory::process`]; there is no cached
//! view state.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Registration, listing and config flows
//! - [`directory`]: Search/filter/sort pipeline and view state
//! - [`validation`]: Registration form rules
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`School`, `NewSchool`, `SchoolId`)
//! - [`config`]: Configuration management
//! - [`init`]: Store root resolution and context wiring
//! - [`logging`]: `tracing` subscriber setup for binaries
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod directory;
pub mod error;
pub mod init;
pub mod logging;
pub mod model;
pub mod store;
pub mod validation;
