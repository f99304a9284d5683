//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single
//! entry point for registry operations, whatever UI drives them.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (e.g. textual sort keys and state filters into a [`ViewState`])
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no I/O of its own and holds no derived state: every listing re-reads
//! the store and re-derives the view.
//!
//! ## Generic Over SchoolStore
//!
//! `RegistryApi<S: SchoolStore>` is generic over the storage backend:
//! - Production: `RegistryApi<FileStore>`
//! - Testing: `RegistryApi<InMemoryStore>`

use crate::commands;
use crate::directory::{SortKey, StateFilter, ViewState};
use crate::error::Result;
use crate::model::{ImageUpload, NewSchool};
use crate::store::SchoolStore;

/// The main API facade for registry operations.
pub struct RegistryApi<S: SchoolStore> {
    store: S,
    paths: commands::RegistryPaths,
}

impl<S: SchoolStore> RegistryApi<S> {
    pub fn new(store: S, paths: commands::RegistryPaths) -> Self {
        Self { store, paths }
    }

    pub fn register_school(
        &mut self,
        fields: NewSchool,
        image: Option<ImageUpload>,
    ) -> Result<commands::CmdResult> {
        commands::register::run(&mut self.store, fields, image)
    }

    pub fn list_schools(&self, view: &ViewState) -> Result<commands::CmdResult> {
        commands::list::run(&self.store, view)
    }

    /// Builds the view state from textual controls and lists.
    ///
    /// `sort` falls back to `default_sort` when absent; `state` of `None` or `"all"`
    /// disables the equality filter.
    pub fn browse(
        &self,
        query: Option<&str>,
        state: Option<&str>,
        sort: Option<&str>,
        default_sort: SortKey,
    ) -> Result<commands::CmdResult> {
        let sort = match sort {
            Some(s) => s.parse()?,
            None => default_sort,
        };
        let filter = state.map(StateFilter::from).unwrap_or_default();
        let view = ViewState::new(query.unwrap_or_default(), filter, sort);
        self.list_schools(&view)
    }

    pub fn states(&self) -> Result<commands::CmdResult> {
        commands::states::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn paths(&self) -> &commands::RegistryPaths {
        &self.paths
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RegistryPaths};
