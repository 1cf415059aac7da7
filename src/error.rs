//! Unified error types for urlmask.
//!
//! Defines [`UrlMaskError`] (the main crate error enum) and
//! [`ValidationError`] for mask set validation failures. Both use
//! `thiserror` for `Display` and `Error` derives. A URL that no mask
//! matches is not an error; it is an ordinary `None`.

use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub mask: String,
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "  mask {}: {}: {}", self.mask, self.field, self.message)?;
        if let Some(ref suggestion) = self.suggestion {
            write!(f, " ({suggestion})")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

fn format_errors(errors: &[ValidationError]) -> String {
    use std::fmt::Write;
    let mut buf = String::new();
    for (i, e) in errors.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        // write! to String is infallible (only fails on OOM which is unrecoverable)
        let _ = write!(buf, "{e}");
    }
    buf
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum UrlMaskError {
    #[error("Invalid mask: {0}")]
    InvalidMaskShape(String),

    #[error("Mask file not found: {}", path.display())]
    ConfigFileNotFound { path: PathBuf },

    #[error("Mask file parse error in {path}:\n  {source}")]
    ConfigParse {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Mask file validation failed:\n{}", format_errors(.errors))]
    ConfigValidation { errors: Vec<ValidationError> },

    #[error("Unsupported mask file format: '{0}'")]
    UnsupportedFormat(String),

    #[error("No masks given.\n\n  {hint}")]
    NoMasks { hint: String },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}
