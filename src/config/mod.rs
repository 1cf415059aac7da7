//! Mask set loading and validation.
//!
//! Defines the [`ConfigSource`] trait for pluggable mask set backends.
//! Submodules provide the data model, validation logic, and concrete
//! file sources.

pub mod model;
pub mod sources;
pub mod validation;

use async_trait::async_trait;

use crate::error::UrlMaskError;
use model::MaskFile;

// async_trait is required here because ConfigSource is used as Box<dyn ConfigSource>
// and native async fn in traits (Rust 1.75+) does not support dyn dispatch.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    fn name(&self) -> &'static str;
    async fn load(&self) -> Result<MaskFile, UrlMaskError>;
}
