//! Lookup tables supplied to the core from outside.
//!
//! Matching never consults these on its own. Callers that normalize
//! URLs before matching (filling in a scheme's default port, checking a
//! hostname's top-level suffix) pass an implementation explicitly.

use super::record::{FieldKind, UrlRecord};

pub trait DefaultPorts {
    fn default_port(&self, protocol: &str) -> Option<u16>;
}

pub trait SuffixTable {
    fn is_known_suffix(&self, suffix: &str) -> bool;
}

/// Default ports of common schemes.
#[derive(Debug, Clone, Copy, Default)]
pub struct WellKnownPorts;

impl DefaultPorts for WellKnownPorts {
    fn default_port(&self, protocol: &str) -> Option<u16> {
        match protocol.to_ascii_lowercase().as_str() {
            "http" | "ws" => Some(80),
            "https" | "wss" => Some(443),
            "ftp" => Some(21),
            "ssh" | "sftp" => Some(22),
            "smtp" => Some(25),
            "ldap" => Some(389),
            "redis" => Some(6379),
            "postgres" | "postgresql" => Some(5432),
            "mysql" => Some(3306),
            "mongodb" => Some(27017),
            _ => None,
        }
    }
}

/// A small set of generic and country-code top-level suffixes.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonSuffixes;

const COMMON_SUFFIXES: &[&str] = &[
    "com", "org", "net", "edu", "gov", "mil", "int", "io", "dev", "app", "info", "biz", "co",
    "ai", "me", "tv", "us", "uk", "de", "fr", "es", "it", "nl", "be", "ch", "at", "se", "no",
    "dk", "fi", "pl", "pt", "ie", "ca", "au", "nz", "jp", "cn", "kr", "in", "br", "mx", "ru",
    "za", "local", "localhost", "test", "example", "internal",
];

impl SuffixTable for CommonSuffixes {
    fn is_known_suffix(&self, suffix: &str) -> bool {
        COMMON_SUFFIXES
            .iter()
            .any(|known| known.eq_ignore_ascii_case(suffix))
    }
}

impl UrlRecord {
    /// Return a copy whose absent port is filled from the protocol's default.
    #[must_use]
    pub fn with_default_port(self, ports: &dyn DefaultPorts) -> Self {
        if self.port().is_some() {
            return self;
        }
        let default = self.protocol().and_then(|p| ports.default_port(p));
        match default {
            Some(port) => self.with(FieldKind::Port, port.to_string()),
            None => self,
        }
    }

    /// Whether the hostname's last label is a suffix `table` knows.
    #[must_use]
    pub fn has_known_suffix(&self, table: &dyn SuffixTable) -> bool {
        self.hostname()
            .and_then(|host| host.rsplit('.').next())
            .is_some_and(|suffix| table.is_known_suffix(suffix))
    }
}
