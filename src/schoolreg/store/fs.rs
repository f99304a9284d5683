use super::SchoolStore;
use crate::error::{Result, StorageError};
use crate::model::{ImageUpload, School, SchoolId};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const DATA_FILENAME: &str = "schools.json";
const IMAGES_DIR: &str = "images";

pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn data_file(&self) -> PathBuf {
        self.root.join(DATA_FILENAME)
    }

    /// Resolves an image reference returned by [`SchoolStore::store_image`] to a path.
    pub fn image_path(&self, reference: &str) -> PathBuf {
        self.root.join(reference)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(StorageError::Io)?;
        }
        Ok(())
    }
}

impl SchoolStore for FileStore {
    fn read_all(&self) -> Result<Vec<School>> {
        let data_file = self.data_file();
        if !data_file.exists() {
            debug!(path = %data_file.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&data_file).map_err(StorageError::Io)?;
        let schools: Vec<School> =
            serde_json::from_str(&content).map_err(StorageError::Serialization)?;
        debug!(count = schools.len(), "read schools");
        Ok(schools)
    }

    fn write_all(&mut self, schools: &[School]) -> Result<()> {
        self.ensure_dir(&self.root)?;

        let content = serde_json::to_string_pretty(schools).map_err(StorageError::Serialization)?;
        // Same directory as the target so the rename stays on one filesystem.
        let tmp = self.root.join(format!("{}.tmp", DATA_FILENAME));
        fs::write(&tmp, content).map_err(StorageError::Io)?;
        fs::rename(&tmp, self.data_file()).map_err(StorageError::Io)?;

        debug!(count = schools.len(), "wrote schools");
        Ok(())
    }

    fn store_image(&mut self, id: SchoolId, image: &ImageUpload) -> Result<String> {
        let dir = self.root.join(IMAGES_DIR);
        self.ensure_dir(&dir)?;

        let ext = image.extension().unwrap_or_else(|| "img".to_string());
        let reference = format!("{}/{}.{}", IMAGES_DIR, id, ext);
        fs::write(self.root.join(&reference), &image.bytes).map_err(StorageError::Io)?;

        debug!(%reference, bytes = image.bytes.len(), "stored image");
        Ok(reference)
    }

    fn remove_image(&mut self, reference: &str) -> Result<()> {
        match fs::remove_file(self.image_path(reference)) {
            Ok(()) => {
                debug!(%reference, "removed image");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e).into()),
        }
    }
}
