use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::models::RawProduct;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("catalog {path} is not a JSON array of records: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Source of catalog records. Called once per accepted search request.
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<RawProduct>, CatalogError>;
}

/// Catalog stored as a JSON array in a local file, re-read on every load.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    fn load(&self) -> Result<Vec<RawProduct>, CatalogError> {
        let raw = std::fs::read_to_string(&self.path).map_err(|source| CatalogError::Io {
            path: self.path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| CatalogError::Parse {
            path: self.path.clone(),
            source,
        })
    }
}

/// Fixed set of records held in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: Vec<RawProduct>,
}

impl InMemoryCatalog {
    pub fn new(records: Vec<RawProduct>) -> Self {
        Self { records }
    }

    /// Builds a catalog from a JSON array literal, mostly for fixtures.
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value).map(Self::new)
    }
}

impl CatalogSource for InMemoryCatalog {
    fn load(&self) -> Result<Vec<RawProduct>, CatalogError> {
        Ok(self.records.clone())
    }
}
