//! On-device fallback store.
//!
//! One JSON file holds the serialized registration array. It is read and
//! written wholesale; a missing or empty file reads as an empty collection.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use enjaz_core::storage::{RegistrationStore, Result};
use enjaz_core::Registration;

/// File name of the local fallback document.
pub const DEFAULT_FALLBACK_PATH: &str = "enjaz_registrations.json";

/// Whole-collection store backed by a local JSON file.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    path: PathBuf,
}

impl LocalFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for LocalFileStore {
    fn default() -> Self {
        Self::new(DEFAULT_FALLBACK_PATH)
    }
}

#[async_trait]
impl RegistrationStore for LocalFileStore {
    async fn read_all(&self) -> Result<Vec<Registration>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&contents)?)
    }

    async fn replace_all(&self, registrations: &[Registration]) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Write a sibling file and rename it so readers never see a partial array.
        let json = serde_json::to_vec(registrations)?;
        let tmp = self.path.with_extension("json.tmp");
        tokio::fs::write(&tmp, json).await?;
        tokio::fs::rename(&tmp, &self.path).await?;

        tracing::debug!(
            path = %self.path.display(),
            total = registrations.len(),
            "Replaced local fallback document"
        );
        Ok(())
    }
}
