use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShelfConfig {
    #[serde(default)]
    pub catalog: CatalogSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    /// Records file, relative to the project root.
    #[serde(default = "default_records")]
    pub records: String,

    #[serde(default = "default_id_length")]
    pub id_length: usize,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_records() -> String {
    "records.yml".to_string()
}

fn default_id_length() -> usize {
    5
}

fn default_port() -> u16 {
    4000
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            records: default_records(),
            id_length: default_id_length(),
            port: default_port(),
        }
    }
}

impl ShelfConfig {
    /// Load config by searching upward for `.bookshelf.yml`. Returns the
    /// config and the project root (the config file's directory).
    pub fn load(start_path: &Path) -> Result<(Self, PathBuf)> {
        let config_path = Self::find_config_file(start_path)
            .ok_or_else(|| CatalogError::Config("No .bookshelf.yml found".to_string()))?;
        let content = std::fs::read_to_string(&config_path)?;
        let config: ShelfConfig = serde_yaml::from_str(&content)?;
        let project_root = config_path
            .parent()
            .ok_or_else(|| CatalogError::Config("Config file has no parent directory".to_string()))?
            .to_path_buf();
        Ok((config, project_root))
    }

    /// Like [`load`](Self::load), but falls back to defaults (and no
    /// records file on disk) when no config exists. Read paths work out of
    /// the box against the built-in seed.
    pub fn load_or_default(start_path: &Path) -> Result<(Self, PathBuf)> {
        match Self::find_config_file(start_path) {
            Some(_) => Self::load(start_path),
            None => Ok((Self::default(), start_path.to_path_buf())),
        }
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path.to_path_buf();
        loop {
            let config_path = current.join(".bookshelf.yml");
            if config_path.exists() {
                return Some(config_path);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    pub fn records_path(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.catalog.records)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
