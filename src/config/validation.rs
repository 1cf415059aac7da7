//! Mask set validation with detailed error reporting.
//!
//! The [`validate`] function checks a parsed [`MaskFile`] for
//! structural errors such as an empty mask list, missing or duplicate
//! names, and wildcards placed where the matcher would read them as
//! literal characters. Returns a list of [`ValidationError`] values
//! with per-field suggestions.

use super::model::MaskFile;
use crate::error::ValidationError;
use crate::mask::{AsMask, FieldKind, MaskInput, WILDCARD};

/// Validate a hostname mask. Returns `Ok(())` or a human-readable error.
pub fn validate_hostname(hostname: &str) -> Result<(), String> {
    if hostname == WILDCARD || hostname == "**" || !hostname.contains('*') {
        return Ok(());
    }
    let (lead, suffix) = hostname.split_once('.').unwrap_or((hostname, ""));
    if (lead == "*" || lead == "**") && !suffix.is_empty() && !suffix.contains('*') {
        return Ok(());
    }
    Err(format!(
        "'{hostname}' uses '*' outside a leading label and will only match literally"
    ))
}

/// Validate a path mask. Returns `Ok(())` or a human-readable error.
pub fn validate_path(path: &str) -> Result<(), String> {
    if path == WILDCARD || path == "**" {
        return Ok(());
    }
    if !path.starts_with('/') {
        return Err(format!("path must start with '/' (did you mean '/{path}'?)"));
    }
    let prefix = path
        .strip_suffix("/**")
        .or_else(|| path.strip_suffix("/*"))
        .unwrap_or(path);
    if prefix.contains('*') {
        return Err(format!(
            "'{path}' uses '*' outside the final segment and will only match literally"
        ));
    }
    Ok(())
}

/// Validate a port mask. Returns `Ok(())` or a human-readable error.
pub fn validate_port(port: &str) -> Result<(), String> {
    validate_glob(port)?;
    let digits = port.trim_matches('*');
    let valid = if port.contains('*') {
        digits.chars().all(|c| c.is_ascii_digit())
    } else {
        digits.parse::<u16>().is_ok()
    };
    if valid {
        Ok(())
    } else {
        Err(format!("'{port}' is not a valid port number"))
    }
}

/// Validate a field using simple globbing. Returns `Ok(())` or a human-readable error.
pub fn validate_glob(value: &str) -> Result<(), String> {
    let inner = value.strip_prefix('*').unwrap_or(value);
    let inner = inner.strip_suffix('*').unwrap_or(inner);
    let is_both_ends = value.len() > 1 && value.starts_with('*') && value.ends_with('*');
    if inner.contains('*') || is_both_ends {
        Err(format!(
            "'{value}' only supports a leading or a trailing '*', others match literally"
        ))
    } else {
        Ok(())
    }
}

fn validate_field(kind: FieldKind, value: &str) -> Result<(), String> {
    match kind {
        FieldKind::Hostname => validate_hostname(value),
        FieldKind::Path => validate_path(value),
        FieldKind::Port => validate_port(value),
        FieldKind::Protocol
        | FieldKind::Username
        | FieldKind::Password
        | FieldKind::Query
        | FieldKind::Fragment => validate_glob(value),
    }
}

pub fn validate(file: &MaskFile) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if file.masks.is_empty() {
        errors.push(ValidationError {
            mask: "(root)".into(),
            field: "masks".into(),
            message: "at least one mask must be defined".into(),
            suggestion: None,
        });
        return Err(errors);
    }

    let mut seen_names = std::collections::HashSet::new();

    for (i, entry) in file.masks.iter().enumerate() {
        let mask_id = if entry.name.is_empty() {
            format!("masks[{i}]")
        } else {
            entry.name.clone()
        };

        if entry.name.trim().is_empty() {
            errors.push(ValidationError {
                mask: mask_id.clone(),
                field: "name".into(),
                message: "name cannot be empty".into(),
                suggestion: None,
            });
        } else if !seen_names.insert(entry.name.as_str()) {
            errors.push(ValidationError {
                mask: mask_id.clone(),
                field: "name".into(),
                message: "duplicate mask name".into(),
                suggestion: None,
            });
        }

        if let MaskInput::Text(text) = &entry.mask {
            if text.trim().is_empty() {
                errors.push(ValidationError {
                    mask: mask_id.clone(),
                    field: "mask".into(),
                    message: "mask string cannot be empty".into(),
                    suggestion: Some("use '*' to match every URL".into()),
                });
                continue;
            }
        }

        let record = entry.mask.to_mask();
        for (kind, value) in record.fields() {
            let Some(value) = value else { continue };
            if let Err(msg) = validate_field(kind, value) {
                errors.push(ValidationError {
                    mask: mask_id.clone(),
                    field: kind.name().into(),
                    suggestion: suggest(kind, value),
                    message: msg,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn suggest(kind: FieldKind, value: &str) -> Option<String> {
    match kind {
        FieldKind::Path if !value.starts_with('/') && !value.contains('*') => {
            Some(format!("did you mean '/{value}'?"))
        }
        FieldKind::Hostname if value.starts_with('*') => {
            let rest = value.trim_start_matches('*');
            let stars = &value[..value.len() - rest.len()];
            if stars.len() > 2 || rest.starts_with('.') || rest.contains('*') {
                return None;
            }
            Some(format!("did you mean '{stars}.{rest}'?"))
        }
        _ => None,
    }
}

#[must_use]
pub fn format_validation_report(path: &str, file: &MaskFile) -> String {
    let mut lines = vec![format!("  {} masks\n", file.masks.len())];

    for entry in &file.masks {
        let mask = entry.mask.to_mask();
        let canonical = crate::mask::serialize(&mask, Some(WILDCARD));
        let canonical = if canonical.is_empty() {
            WILDCARD.to_string()
        } else {
            canonical
        };
        lines.push(format!("  {}  -> {}", entry.name, canonical));
        if let Some(ref description) = entry.description {
            lines.push(format!("    {description}"));
        }
    }

    format!("{} is valid\n{}", path, lines.join("\n"))
}
