//! # Storage Layer
//!
//! The registry treats persistence as an injected collaborator: the [`SchoolStore`]
//! trait exposes the whole collection as a single read/write endpoint. Callers
//! read everything, derive a new collection, and write it back in one replace.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON document on disk
//!   - Collection stored in `schools.json` (JSON array)
//!   - Images copied to `images/{id}.{ext}`
//!   - Writes go to a temp file that is renamed over the document
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!   - Optional failure injection for exercising storage errors
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! <home>/
//! ├── schools.json        # All registered schools (JSON array)
//! ├── images/{id}.png     # Uploaded images, one per school
//! └── config.json         # Registry configuration
//! ```

use crate::error::Result;
use crate::model::{ImageUpload, School, SchoolId};

pub mod fs;
pub mod memory;

/// Read/write-all access to the persisted collection.
pub trait SchoolStore {
    /// Returns every stored school in insertion order.
    fn read_all(&self) -> Result<Vec<School>>;

    /// Replaces the stored collection with `schools`.
    fn write_all(&mut self, schools: &[School]) -> Result<()>;

    /// Persists an uploaded image and returns the reference saved on the record.
    fn store_image(&mut self, id: SchoolId, image: &ImageUpload) -> Result<String>;

    /// Deletes an image saved by [`SchoolStore::store_image`]. Missing images are not an error.
    fn remove_image(&mut self, reference: &str) -> Result<()>;
}
