//! # Directory Credential Loader
//!
//! Resolves parent credentials from the `*.json` files of one directory,
//! indexed by their `id`. Files that do not hold a credential are skipped
//! with a warning so a chain directory can also keep presentations and
//! notes.

use std::future::Future;
use std::path::{Path, PathBuf};

use anyhow::Context;

use gs1_vc::VerifiableCredential;
use gs1_verify::{CredentialLoader, MemoryCredentialLoader};

/// Credentials read from a directory.
#[derive(Debug, Clone, Default)]
pub struct DirectoryCredentialLoader {
    credentials: MemoryCredentialLoader,
}

impl DirectoryCredentialLoader {
    /// Read every credential in `dir`.
    pub fn open(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("reading chain directory {}", dir.display()))?;

        let mut paths: Vec<PathBuf> = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut credentials = MemoryCredentialLoader::new();
        for path in &paths {
            match read_credential(path) {
                Ok(credential) => {
                    if !credentials.insert(credential) {
                        tracing::warn!(path = %path.display(), "credential has no id, skipped");
                    }
                }
                Err(e) => tracing::warn!(path = %path.display(), error = %e, "not a credential, skipped"),
            }
        }
        tracing::info!(dir = %dir.display(), credentials = credentials.len(), "chain directory loaded");
        Ok(Self { credentials })
    }

    /// Number of credentials found.
    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    /// True when the directory held no credential.
    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

impl CredentialLoader for DirectoryCredentialLoader {
    fn load(&self, uri: &str) -> impl Future<Output = anyhow::Result<VerifiableCredential>> + Send {
        self.credentials.load(uri)
    }
}

/// Parse the credential stored in `path`.
pub fn read_credential(path: &Path) -> anyhow::Result<VerifiableCredential> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    VerifiableCredential::from_json(&text).with_context(|| format!("parsing {}", path.display()))
}
