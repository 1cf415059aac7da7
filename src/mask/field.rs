//! Per-field wildcard matching.
//!
//! Every field kind evaluates a mask value against a URL value through
//! the [`FieldRule`] trait and yields a [`FieldOutcome`]:
//!
//! - [`GlobRule`] (protocol, credentials, port, query, fragment): `*`,
//!   `X*` (prefix) and `*X` (suffix). Any other `*` is a literal character.
//! - [`HostnameRule`]: labels are compared right to left. A leading `*`
//!   label needs at least one extra label, `**` accepts zero or more.
//! - [`PathRule`]: compared left to right. A trailing `/*` segment needs
//!   the slash, `/**` also accepts the bare prefix.
//!
//! A literal mask is a `Perfect` match only on exact, case-sensitive
//! equality. Absent against absent counts as equal.

use super::record::{FieldKind, WILDCARD};

const DOUBLE_WILDCARD: &str = "**";

/// Result of matching one field. Only `Mismatch` vetoes a record match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldOutcome {
    /// Literal equality.
    Perfect,
    /// Satisfied through a wildcard.
    Wildcard,
    Mismatch,
}

impl FieldOutcome {
    /// Specificity contributed to the record score, `None` for a mismatch.
    #[must_use]
    pub const fn score(self) -> Option<u8> {
        match self {
            Self::Perfect => Some(1),
            Self::Wildcard => Some(0),
            Self::Mismatch => None,
        }
    }

    #[must_use]
    pub const fn is_match(self) -> bool {
        !matches!(self, Self::Mismatch)
    }

    const fn from_wildcard(matched: bool) -> Self {
        if matched {
            Self::Wildcard
        } else {
            Self::Mismatch
        }
    }
}

pub trait FieldRule: Send + Sync {
    fn evaluate(&self, mask: Option<&str>, url: Option<&str>) -> FieldOutcome;
}

/// Prefix/suffix globbing for fields without structure.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobRule;

/// Suffix-anchored label matching for hostnames.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostnameRule;

/// Prefix-anchored segment matching for paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathRule;

impl FieldKind {
    #[must_use]
    pub fn rule(self) -> &'static dyn FieldRule {
        match self {
            Self::Hostname => &HostnameRule,
            Self::Path => &PathRule,
            Self::Protocol
            | Self::Username
            | Self::Password
            | Self::Port
            | Self::Query
            | Self::Fragment => &GlobRule,
        }
    }
}

/// Match a single mask field against the corresponding URL field.
#[must_use]
pub fn fuzzy_match(mask: Option<&str>, url: Option<&str>, kind: FieldKind) -> FieldOutcome {
    kind.rule().evaluate(mask, url)
}

fn literal(mask: Option<&str>, url: Option<&str>) -> FieldOutcome {
    if mask == url {
        FieldOutcome::Perfect
    } else {
        FieldOutcome::Mismatch
    }
}

impl FieldRule for GlobRule {
    fn evaluate(&self, mask: Option<&str>, url: Option<&str>) -> FieldOutcome {
        let Some(pattern) = mask else {
            return literal(mask, url);
        };
        if pattern == WILDCARD {
            return FieldOutcome::Wildcard;
        }
        if let Some(prefix) = pattern.strip_suffix('*').filter(|p| !p.contains('*')) {
            return FieldOutcome::from_wildcard(url.is_some_and(|u| u.starts_with(prefix)));
        }
        if let Some(suffix) = pattern.strip_prefix('*').filter(|s| !s.contains('*')) {
            return FieldOutcome::from_wildcard(url.is_some_and(|u| u.ends_with(suffix)));
        }
        literal(mask, url)
    }
}

impl FieldRule for HostnameRule {
    fn evaluate(&self, mask: Option<&str>, url: Option<&str>) -> FieldOutcome {
        let Some(pattern) = mask else {
            return literal(mask, url);
        };
        if pattern == WILDCARD || pattern == DOUBLE_WILDCARD {
            return FieldOutcome::Wildcard;
        }

        let (lead, suffix) = pattern.split_once('.').unwrap_or((pattern, ""));
        let min_extra_labels = match lead {
            WILDCARD => 1,
            DOUBLE_WILDCARD => 0,
            _ => return literal(mask, url),
        };
        if suffix.is_empty() || suffix.contains('*') {
            return literal(mask, url);
        }
        let Some(host) = url else {
            return FieldOutcome::Mismatch;
        };

        let mut host_labels = host.rsplit('.');
        let suffix_matches = suffix
            .rsplit('.')
            .all(|label| host_labels.next() == Some(label));
        // Empty labels (".example.com", "a..example.com") are not subdomains.
        let mut extra_labels = 0;
        for label in host_labels {
            if label.is_empty() {
                return FieldOutcome::Mismatch;
            }
            extra_labels += 1;
        }

        FieldOutcome::from_wildcard(suffix_matches && extra_labels >= min_extra_labels)
    }
}

impl FieldRule for PathRule {
    fn evaluate(&self, mask: Option<&str>, url: Option<&str>) -> FieldOutcome {
        let Some(pattern) = mask else {
            return literal(mask, url);
        };
        if pattern == WILDCARD || pattern == DOUBLE_WILDCARD {
            return FieldOutcome::Wildcard;
        }

        let (prefix, boundary_inclusive) = if let Some(prefix) = pattern.strip_suffix("/**") {
            (prefix, true)
        } else if let Some(prefix) = pattern.strip_suffix("/*") {
            (prefix, false)
        } else {
            return literal(mask, url);
        };
        if prefix.contains('*') {
            return literal(mask, url);
        }

        let path = url.unwrap_or_default();
        let under_prefix = path
            .strip_prefix(prefix)
            .is_some_and(|rest| rest.starts_with('/'));
        let at_prefix = boundary_inclusive && path == prefix;

        FieldOutcome::from_wildcard(under_prefix || at_prefix)
    }
}
