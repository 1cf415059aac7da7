//! Concrete [`ConfigSource`](super::ConfigSource) implementations.
//!
//! Provides file-based sources (YAML, JSON, TOML) gated by feature flags,
//! the [`for_path`] constructor that picks one by extension, and the
//! [`parse_config_str`] helper for format-specific deserialization.

pub mod file_source;

#[cfg(feature = "yaml")]
pub mod yaml;

#[cfg(feature = "json")]
pub mod json;

#[cfg(feature = "toml")]
pub mod toml_source;

use std::path::Path;

use sha2::{Digest, Sha256};

use crate::config::model::MaskFile;
use crate::config::ConfigSource;
use crate::error::UrlMaskError;

/// Parse a mask set string based on file extension.
pub fn parse_config_str(
    ext: &str,
    content: &str,
    path_display: &str,
) -> Result<MaskFile, UrlMaskError> {
    match ext {
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => serde_yml::from_str(content).map_err(|e| UrlMaskError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "json")]
        "json" => serde_json::from_str(content).map_err(|e| UrlMaskError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        #[cfg(feature = "toml")]
        "toml" => toml::from_str(content).map_err(|e| UrlMaskError::ConfigParse {
            path: path_display.to_string(),
            source: Box::new(e),
        }),

        other => Err(UrlMaskError::UnsupportedFormat(other.to_string())),
    }
}

/// Pick a file source for `path` from its extension.
pub fn for_path(path: &Path) -> Result<Box<dyn ConfigSource>, UrlMaskError> {
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let path = path.to_path_buf();
    match ext {
        #[cfg(feature = "yaml")]
        "yaml" | "yml" => Ok(Box::new(yaml::new(path))),

        #[cfg(feature = "json")]
        "json" => Ok(Box::new(json::new(path))),

        #[cfg(feature = "toml")]
        "toml" => Ok(Box::new(toml_source::new(path))),

        other => Err(UrlMaskError::UnsupportedFormat(other.to_string())),
    }
}

/// Compute a lowercase hex-encoded SHA-256 digest.
#[must_use]
pub fn sha256_hex(data: &[u8]) -> String {
    format!("{:x}", Sha256::digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_extension_is_rejected() {
        let err = parse_config_str("ini", "", "masks.ini").unwrap_err();
        assert!(matches!(err, UrlMaskError::UnsupportedFormat(ref ext) if ext == "ini"));
        assert!(for_path(Path::new("masks.ini")).is_err());
    }

    #[test]
    fn sha256_is_stable() {
        assert_eq!(
            sha256_hex(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_accepts_string_and_table_masks() {
        let content = r#"
masks:
  - name: api
    mask: "https://**.example.com/api/**"
  - name: admin
    mask:
      hostname: admin.example.com
      path: "/**"
    description: Admin console
"#;
        let file = parse_config_str("yaml", content, "inline.yaml").unwrap();
        assert_eq!(file.masks.len(), 2);
        assert_eq!(file.masks[1].description.as_deref(), Some("Admin console"));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn yaml_rejects_non_mask_values() {
        let content = "masks:\n  - name: bad\n    mask: 42\n";
        assert!(parse_config_str("yaml", content, "inline.yaml").is_err());
    }
}
