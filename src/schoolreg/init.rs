use crate::api::{RegistryApi, RegistryPaths};
use crate::config::RegistryConfig;
use crate::error::{RegistryError, Result};
use crate::store::fs::FileStore;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const HOME_ENV: &str = "SCHOOLREG_HOME";

pub struct RegistryContext {
    pub api: RegistryApi<FileStore>,
    pub config: RegistryConfig,
}

/// Picks the store root: explicit path, then `SCHOOLREG_HOME`, then the platform data dir.
pub fn resolve_home(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(env_home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(env_home));
    }
    ProjectDirs::from("com", "schoolreg", "schoolreg")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| RegistryError::Api("Could not determine data directory".to_string()))
}

pub fn initialize(home: PathBuf) -> RegistryContext {
    let config = RegistryConfig::load(&home).unwrap_or_default();
    debug!(home = %home.display(), sort = %config.default_sort, "initialized registry");

    let store = FileStore::new(home.clone());
    let api = RegistryApi::new(store, RegistryPaths { home });

    RegistryContext { api, config }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_home_wins() {
        let temp = TempDir::new().unwrap();
        let home = resolve_home(Some(temp.path())).unwrap();
        assert_eq!(home, temp.path());
    }

    #[test]
    fn initialize_loads_saved_config() {
        let temp = TempDir::new().unwrap();
        let mut config = RegistryConfig::default();
        config.set("default-sort", "state-asc").unwrap();
        config.save(temp.path()).unwrap();

        let ctx = initialize(temp.path().to_path_buf());
        assert_eq!(ctx.config.default_sort, "state-asc");
        assert_eq!(ctx.api.paths().home, temp.path());
        assert_eq!(ctx.api.store().root(), temp.path());
    }

    #[test]
    fn initialize_with_empty_home_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path().join("fresh"));
        assert_eq!(ctx.config, RegistryConfig::default());
    }
}
