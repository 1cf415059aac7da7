//! The eight-field URL record shared by URLs and masks.
//!
//! A [`UrlRecord`] holds `protocol`, `username`, `password`, `hostname`,
//! `port`, `path`, `query` and `fragment`, each of which is either a
//! value or absent. The same type describes a concrete URL (the match
//! target) and a mask (a pattern whose fields may hold wildcards).
//! Records never change after construction: every transformation
//! returns a new value.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker matching any value of a field, including absence.
pub const WILDCARD: &str = "*";

/// One of the eight URL components, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKind {
    Protocol,
    Username,
    Password,
    Hostname,
    Port,
    Path,
    Query,
    Fragment,
}

impl FieldKind {
    pub const ALL: [Self; 8] = [
        Self::Protocol,
        Self::Username,
        Self::Password,
        Self::Hostname,
        Self::Port,
        Self::Path,
        Self::Query,
        Self::Fragment,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Username => "username",
            Self::Password => "password",
            Self::Hostname => "hostname",
            Self::Port => "port",
            Self::Path => "path",
            Self::Query => "query",
            Self::Fragment => "fragment",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct UrlRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    protocol: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    password: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    hostname: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    port: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    query: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    fragment: Option<String>,
}

impl UrlRecord {
    /// A record with every field absent.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// The all-wildcard mask: matches any URL with score 0.
    #[must_use]
    pub fn wildcard() -> Self {
        Self::filled(WILDCARD)
    }

    /// A record with every field set to `value`.
    #[must_use]
    pub fn filled(value: &str) -> Self {
        Self::empty().fill_absent(value)
    }

    /// Overlay every present field of `partial` onto the all-wildcard template.
    #[must_use]
    pub fn build_mask(partial: &Self) -> Self {
        Self::wildcard().overlay(partial)
    }

    #[must_use]
    pub fn get(&self, kind: FieldKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    #[must_use]
    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    #[must_use]
    pub fn hostname(&self) -> Option<&str> {
        self.hostname.as_deref()
    }

    #[must_use]
    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }

    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.fragment.as_deref()
    }

    /// Return a copy with `kind` set to `value`.
    #[must_use]
    pub fn with(mut self, kind: FieldKind, value: impl Into<String>) -> Self {
        *self.slot_mut(kind) = Some(value.into());
        self
    }

    /// Return a copy with `kind` absent.
    #[must_use]
    pub fn without(mut self, kind: FieldKind) -> Self {
        *self.slot_mut(kind) = None;
        self
    }

    /// Return a copy where every field present in `other` replaces ours.
    #[must_use]
    pub fn overlay(mut self, other: &Self) -> Self {
        for kind in FieldKind::ALL {
            if let Some(value) = other.get(kind) {
                *self.slot_mut(kind) = Some(value.to_string());
            }
        }
        self
    }

    /// Return a copy where every absent field is set to `value`.
    #[must_use]
    pub fn fill_absent(mut self, value: &str) -> Self {
        for kind in FieldKind::ALL {
            let slot = self.slot_mut(kind);
            if slot.is_none() {
                *slot = Some(value.to_string());
            }
        }
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        FieldKind::ALL.iter().all(|kind| self.get(*kind).is_none())
    }

    /// Iterate `(kind, value)` pairs in canonical order.
    pub fn fields(&self) -> impl Iterator<Item = (FieldKind, Option<&str>)> + '_ {
        FieldKind::ALL.into_iter().map(|kind| (kind, self.get(kind)))
    }

    const fn slot(&self, kind: FieldKind) -> &Option<String> {
        match kind {
            FieldKind::Protocol => &self.protocol,
            FieldKind::Username => &self.username,
            FieldKind::Password => &self.password,
            FieldKind::Hostname => &self.hostname,
            FieldKind::Port => &self.port,
            FieldKind::Path => &self.path,
            FieldKind::Query => &self.query,
            FieldKind::Fragment => &self.fragment,
        }
    }

    fn slot_mut(&mut self, kind: FieldKind) -> &mut Option<String> {
        match kind {
            FieldKind::Protocol => &mut self.protocol,
            FieldKind::Username => &mut self.username,
            FieldKind::Password => &mut self.password,
            FieldKind::Hostname => &mut self.hostname,
            FieldKind::Port => &mut self.port,
            FieldKind::Path => &mut self.path,
            FieldKind::Query => &mut self.query,
            FieldKind::Fragment => &mut self.fragment,
        }
    }
}

/// Convert a strictly parsed URL. Empty components of `url::Url` are absent here.
impl From<&url::Url> for UrlRecord {
    fn from(url: &url::Url) -> Self {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        Self {
            protocol: non_empty(url.scheme()),
            username: non_empty(url.username()),
            password: url.password().map(str::to_string),
            hostname: url.host_str().map(str::to_string),
            port: url.port().map(|p| p.to_string()),
            path: non_empty(url.path()),
            query: url.query().map(str::to_string),
            fragment: url.fragment().map(str::to_string),
        }
    }
}
