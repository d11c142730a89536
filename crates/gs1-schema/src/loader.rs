//! # Schema Loading
//!
//! Schemas are fetched by id through a [`JsonSchemaLoader`]. Returning no
//! bytes means "unknown schema"; the validator then falls back to the
//! generic schema instead of failing.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Source of JSON Schema documents.
pub trait JsonSchemaLoader: Send + Sync {
    /// The schema document for `schema_id`, or empty when unknown.
    fn load(&self, schema_id: &str) -> Vec<u8>;
}

impl<F> JsonSchemaLoader for F
where
    F: Fn(&str) -> Vec<u8> + Send + Sync,
{
    fn load(&self, schema_id: &str) -> Vec<u8> {
        self(schema_id)
    }
}

/// Knows no schemas; every credential gets the generic schema.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSchemaLoader;

impl JsonSchemaLoader for NoSchemaLoader {
    fn load(&self, _schema_id: &str) -> Vec<u8> {
        Vec::new()
    }
}

/// Schemas held in memory, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct MemorySchemaLoader {
    schemas: HashMap<String, Vec<u8>>,
}

impl MemorySchemaLoader {
    /// An empty loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a schema document under `schema_id`.
    pub fn insert(&mut self, schema_id: impl Into<String>, document: impl Into<Vec<u8>>) {
        self.schemas.insert(schema_id.into(), document.into());
    }
}

impl JsonSchemaLoader for MemorySchemaLoader {
    fn load(&self, schema_id: &str) -> Vec<u8> {
        self.schemas.get(schema_id).cloned().unwrap_or_default()
    }
}

/// Schemas read from `*.schema.json` files in a directory. A schema id is
/// mapped to `<last path segment>.schema.json`, so
/// `https://id.gs1.org/vc/schema/v1/key` reads `key.schema.json`.
#[derive(Debug, Clone)]
pub struct DirectorySchemaLoader {
    dir: PathBuf,
}

impl DirectorySchemaLoader {
    /// Loader over `dir`.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// File a schema id maps to.
    pub fn path_for(&self, schema_id: &str) -> Option<PathBuf> {
        let name = schema_id.trim_end_matches('/').rsplit('/').next()?;
        if name.is_empty() || name.contains("..") || name.contains('\\') {
            return None;
        }
        Some(self.dir.join(format!("{name}.schema.json")))
    }
}

impl JsonSchemaLoader for DirectorySchemaLoader {
    fn load(&self, schema_id: &str) -> Vec<u8> {
        let Some(path) = self.path_for(schema_id) else {
            return Vec::new();
        };
        match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(schema_id, path = %path.display(), error = %e, "schema not found");
                Vec::new()
            }
        }
    }
}
