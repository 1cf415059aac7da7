//! Whole-record matching.
//!
//! [`match_score`] runs the field rule of each of the eight fields. A
//! single mismatching field vetoes the match; otherwise the score is the
//! number of fields matched literally, from 0 (all wildcards) to 8.

use serde::Serialize;

use super::field::{fuzzy_match, FieldOutcome};
use super::input::AsMask;
use super::record::{FieldKind, UrlRecord};

/// Per-field outcomes of one mask/URL comparison, in canonical order.
#[must_use]
pub fn field_outcomes(mask: &UrlRecord, url: &UrlRecord) -> [FieldOutcome; 8] {
    FieldKind::ALL.map(|kind| {
        let outcome = fuzzy_match(mask.get(kind), url.get(kind), kind);
        tracing::trace!(field = kind.name(), outcome = ?outcome, "field evaluated");
        outcome
    })
}

/// Total specificity of `mask` against `url`, or `None` when any field mismatches.
#[must_use]
pub fn match_score<M: AsMask + ?Sized>(mask: &M, url: &UrlRecord) -> Option<u8> {
    let mask = mask.to_mask();
    field_outcomes(&mask, url)
        .into_iter()
        .map(FieldOutcome::score)
        .sum()
}

#[must_use]
pub fn matches<M: AsMask + ?Sized>(mask: &M, url: &UrlRecord) -> bool {
    match_score(mask, url).is_some()
}

/// Per-field scores, for diagnostics. Never gates anything on its own.
#[must_use]
pub fn match_scores<M: AsMask + ?Sized>(mask: &M, url: &UrlRecord) -> FieldScores {
    let mask = mask.to_mask();
    let [protocol, username, password, hostname, port, path, query, fragment] =
        field_outcomes(&mask, url).map(FieldOutcome::score);
    FieldScores {
        protocol,
        username,
        password,
        hostname,
        port,
        path,
        query,
        fragment,
    }
}

/// Same shape as [`UrlRecord`], holding `Some(1)`, `Some(0)` or `None` per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldScores {
    pub protocol: Option<u8>,
    pub username: Option<u8>,
    pub password: Option<u8>,
    pub hostname: Option<u8>,
    pub port: Option<u8>,
    pub path: Option<u8>,
    pub query: Option<u8>,
    pub fragment: Option<u8>,
}

impl FieldScores {
    #[must_use]
    pub const fn get(&self, kind: FieldKind) -> Option<u8> {
        match kind {
            FieldKind::Protocol => self.protocol,
            FieldKind::Username => self.username,
            FieldKind::Password => self.password,
            FieldKind::Hostname => self.hostname,
            FieldKind::Port => self.port,
            FieldKind::Path => self.path,
            FieldKind::Query => self.query,
            FieldKind::Fragment => self.fragment,
        }
    }

    /// The fields that vetoed the match.
    pub fn mismatched(&self) -> impl Iterator<Item = FieldKind> + '_ {
        FieldKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind).is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::codec::parse;

    #[test]
    fn wildcard_mask_scores_zero() {
        let url = parse("https://u:p@h.example:1/a?b#c");
        assert_eq!(match_score(&UrlRecord::wildcard(), &url), Some(0));
        assert_eq!(match_score(&UrlRecord::wildcard(), &parse("")), Some(0));
    }

    #[test]
    fn fully_literal_mask_scores_eight() {
        let url = parse("https://u:p@h.example:1/a?b#c");
        assert_eq!(match_score(&url, &url), Some(8));
    }

    #[test]
    fn one_mismatch_vetoes() {
        let url = parse("https://example.com/a");
        let mask = UrlRecord::wildcard().with(FieldKind::Protocol, "http");
        assert_eq!(match_score(&mask, &url), None);
        assert!(!matches(&mask, &url));
    }

    #[test]
    fn string_masks_are_accepted() {
        let url = parse("https://api.example.com/v1/users");
        assert_eq!(match_score("https://*.example.com/v1/**", &url), Some(1));
        assert_eq!(match_score("api.example.com", &url), Some(1));
    }

    #[test]
    fn per_field_scores() {
        let url = parse("https://api.example.com/v1/users");
        let scores = match_scores("http://*.example.com/v1/*", &url);
        assert_eq!(scores.protocol, None);
        assert_eq!(scores.hostname, Some(0));
        assert_eq!(scores.path, Some(0));
        assert_eq!(scores.query, Some(0));
        assert_eq!(scores.mismatched().collect::<Vec<_>>(), vec![FieldKind::Protocol]);
    }
}
