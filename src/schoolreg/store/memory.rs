use super::SchoolStore;
use crate::error::{Result, StorageError};
use crate::model::{ImageUpload, School, SchoolId};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    schools: Vec<School>,
    images: HashMap<String, Vec<u8>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_schools(schools: Vec<School>) -> Self {
        Self {
            schools,
            ..Self::default()
        }
    }

    /// Makes every subsequent `read_all` fail.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Makes every subsequent `write_all` and `store_image` fail.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn image(&self, reference: &str) -> Option<&[u8]> {
        self.images.get(reference).map(Vec::as_slice)
    }

    fn check_write(&self) -> Result<()> {
        if self.fail_writes {
            return Err(StorageError::Unavailable("write rejected".to_string()).into());
        }
        Ok(())
    }
}

impl SchoolStore for InMemoryStore {
    fn read_all(&self) -> Result<Vec<School>> {
        if self.fail_reads {
            return Err(StorageError::Unavailable("read rejected".to_string()).into());
        }
        Ok(self.schools.clone())
    }

    fn write_all(&mut self, schools: &[School]) -> Result<()> {
        self.check_write()?;
        self.schools = schools.to_vec();
        Ok(())
    }

    fn store_image(&mut self, id: SchoolId, image: &ImageUpload) -> Result<String> {
        self.check_write()?;
        let ext = image.extension().unwrap_or_else(|| "img".to_string());
        let reference = format!("memory://images/{}.{}", id, ext);
        self.images.insert(reference.clone(), image.bytes.clone());
        Ok(reference)
    }

    fn remove_image(&mut self, reference: &str) -> Result<()> {
        self.images.remove(reference);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewSchool;

    /// A form submission that passes validation.
    pub fn valid_submission(name: &str, city: &str, state: &str) -> NewSchool {
        NewSchool {
            name: name.to_string(),
            address: format!("{} Campus Road", name),
            city: city.to_string(),
            state: state.to_string(),
            contact: "9876543210".to_string(),
            email_id: "office@school.edu".to_string(),
        }
    }

    pub struct StoreFixture {
        pub store: InMemoryStore,
        next_id: i64,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                next_id: 1,
            }
        }

        pub fn with_school(mut self, name: &str, city: &str, state: &str) -> Self {
            let school = School::new(
                SchoolId(self.next_id),
                valid_submission(name, city, state),
                None,
            );
            self.next_id += 1;
            self.store.schools.push(school);
            self
        }

        pub fn with_schools(mut self, count: usize) -> Self {
            for i in 0..count {
                let name = format!("Test School {}", i + 1);
                self = self.with_school(&name, "Metro", "XY");
            }
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::error::RegistryError;

    #[test]
    fn write_all_replaces_collection() {
        let mut store = StoreFixture::new().with_schools(3).store;
        assert_eq!(store.read_all().unwrap().len(), 3);

        store.write_all(&[]).unwrap();
        assert!(store.read_all().unwrap().is_empty());
    }

    #[test]
    fn failing_store_reports_storage_errors() {
        let mut store = InMemoryStore::new().failing_reads().failing_writes();
        assert!(matches!(
            store.read_all(),
            Err(RegistryError::Storage(StorageError::Unavailable(_)))
        ));
        assert!(store.write_all(&[]).unwrap_err().is_storage());
    }

    #[test]
    fn keeps_image_bytes_by_reference() {
        let mut store = InMemoryStore::new();
        let reference = store
            .store_image(SchoolId(7), &ImageUpload::new("a.jpg", vec![1, 2, 3]))
            .unwrap();
        assert_eq!(reference, "memory://images/7.jpg");
        assert_eq!(store.image(&reference), Some(&[1u8, 2, 3][..]));

        store.remove_image(&reference).unwrap();
        assert_eq!(store.image(&reference), None);
    }
}
