//! # CLI Behavior
//!
//! The CLI is a thin client over [`school_registry::api::RegistryApi`].
//!
//! - `schoolreg add --name ... --email ...` registers a school. Fields left out are
//!   submitted empty so every problem is reported per field in one go.
//! - `schoolreg list` (or just `schoolreg`) prints the directory. `--search`,
//!   `--state` and `--sort` map onto the view state; each run starts from defaults,
//!   with the sort taken from the `default-sort` config key.
//! - `schoolreg states` prints the values accepted by `--state`.
//! - `schoolreg config [KEY [VALUE]]` shows or changes configuration.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch and per-command handlers
//! - `print`: Output formatting (cards, messages, colors)
//! - `setup`: Argument parsing via clap

mod commands;
mod print;
pub mod setup;

pub use commands::{report_error, run};
