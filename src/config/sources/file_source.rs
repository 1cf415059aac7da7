//! Generic async file-based mask set source with SHA256 change detection.
//!
//! [`FileSource`] implements [`ConfigSource`] for any file format by
//! accepting a deserialization function at construction time. It reads
//! the file asynchronously via Tokio, validates the result, and logs a
//! SHA256 hash of the content to identify which version was loaded.

use std::path::PathBuf;

use async_trait::async_trait;

use super::sha256_hex;
use crate::config::model::MaskFile;
use crate::config::validation::validate;
use crate::config::ConfigSource;
use crate::error::UrlMaskError;

type DeserializeFn = fn(&str) -> Result<MaskFile, Box<dyn std::error::Error + Send + Sync>>;

pub struct FileSource {
    path: PathBuf,
    name: &'static str,
    deserialize: DeserializeFn,
}

impl FileSource {
    #[must_use]
    pub fn new(path: PathBuf, name: &'static str, deserialize: DeserializeFn) -> Self {
        Self {
            path,
            name,
            deserialize,
        }
    }

    async fn read_content(&self) -> Result<String, UrlMaskError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                UrlMaskError::ConfigFileNotFound {
                    path: self.path.clone(),
                }
            } else {
                UrlMaskError::Io(e)
            }
        })
    }
}

#[async_trait]
impl ConfigSource for FileSource {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn load(&self) -> Result<MaskFile, UrlMaskError> {
        let content = self.read_content().await?;

        let file = (self.deserialize)(&content).map_err(|e| UrlMaskError::ConfigParse {
            path: self.path.display().to_string(),
            source: e,
        })?;

        if let Err(errors) = validate(&file) {
            return Err(UrlMaskError::ConfigValidation { errors });
        }

        tracing::debug!(
            path = %self.path.display(),
            format = self.name,
            masks = file.masks.len(),
            version = %sha256_hex(content.as_bytes()),
            "mask set loaded"
        );
        Ok(file)
    }
}
