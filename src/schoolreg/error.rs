use crate::validation::ValidationErrors;
use thiserror::Error;

/// Failure to read or write the backing collection.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Api Error: {0}")]
    Api(String),
}

impl RegistryError {
    /// Storage failures are the retryable kind: the input was fine, the store wasn't.
    pub fn is_storage(&self) -> bool {
        matches!(self, RegistryError::Storage(_))
    }
}

impl From<ValidationErrors> for RegistryError {
    fn from(errors: ValidationErrors) -> Self {
        RegistryError::Validation(errors)
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Storage(StorageError::Io(err))
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Storage(StorageError::Serialization(err))
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
