//! `urlmask validate` — check a mask set file for errors.
//!
//! Parses and validates the file, reporting results in either
//! human-readable text or machine-readable JSON format.

use crate::cli::{ValidateArgs, ValidateFormat};
use crate::config::sources::{parse_config_str, sha256_hex};
use crate::config::validation;
use crate::error::UrlMaskError;

pub fn execute(args: &ValidateArgs) -> Result<(), UrlMaskError> {
    let path = &args.config;

    if !path.exists() {
        return Err(UrlMaskError::ConfigFileNotFound { path: path.clone() });
    }

    let content = std::fs::read_to_string(path)?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    let file = parse_config_str(ext, &content, &path.display().to_string())?;

    if let Err(errors) = validation::validate(&file) {
        match args.format {
            ValidateFormat::Text => {
                eprintln!("\u{2717} {} has {} errors\n", path.display(), errors.len());
                for error in &errors {
                    eprintln!("{error}");
                }
            }
            ValidateFormat::Json => {
                let json_errors: Vec<serde_json::Value> = errors
                    .iter()
                    .map(|e| {
                        serde_json::json!({
                            "mask": e.mask,
                            "field": e.field,
                            "message": e.message,
                            "suggestion": e.suggestion,
                        })
                    })
                    .collect();
                println!(
                    "{}",
                    serde_json::json!({
                        "valid": false,
                        "errors": json_errors,
                    })
                );
            }
        }
        return Err(UrlMaskError::ConfigValidation { errors });
    }

    match args.format {
        ValidateFormat::Text => {
            println!(
                "\u{2713} {}",
                validation::format_validation_report(&path.display().to_string(), &file)
            );
        }
        ValidateFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "valid": true,
                    "masks": file.masks.len(),
                    "version": sha256_hex(content.as_bytes()),
                })
            );
        }
    }

    Ok(())
}
