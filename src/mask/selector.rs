//! Ranked selection among candidate masks.
//!
//! [`best_match_index`] scores every candidate in order and keeps the
//! first one with the strictly highest score, so on a tie the mask
//! declared earlier wins. [`MaskSet`] does the same over named masks
//! that were parsed once up front.

use serde::Serialize;

use super::input::{AsMask, MaskInput};
use super::matcher::match_score;
use super::record::UrlRecord;

/// Index and score of the best matching mask, if any mask matches.
#[must_use]
pub fn best_match_scored<M: AsMask>(masks: &[M], url: &UrlRecord) -> Option<(usize, u8)> {
    let mut best: Option<(usize, u8)> = None;

    for (idx, mask) in masks.iter().enumerate() {
        let score = match_score(mask, url);
        tracing::debug!(idx, score = ?score, "scored mask candidate");

        let Some(score) = score else {
            continue;
        };
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((idx, score));
        }
    }

    best
}

#[must_use]
pub fn best_match_index<M: AsMask>(masks: &[M], url: &UrlRecord) -> Option<usize> {
    best_match_scored(masks, url).map(|(idx, _)| idx)
}

#[must_use]
pub fn best_match<'a, M: AsMask>(masks: &'a [M], url: &UrlRecord) -> Option<&'a M> {
    best_match_index(masks, url).map(|idx| &masks[idx])
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamedMask {
    pub name: String,
    pub mask: UrlRecord,
}

/// Outcome of [`MaskSet::best`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection<'a> {
    pub index: usize,
    pub name: &'a str,
    pub mask: &'a UrlRecord,
    pub score: u8,
}

/// Named masks, resolved to records once and matched many times.
#[derive(Debug, Clone, Default)]
pub struct MaskSet {
    entries: Vec<NamedMask>,
}

impl MaskSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, mask: &impl AsMask) {
        self.entries.push(NamedMask {
            name: name.into(),
            mask: mask.to_mask().into_owned(),
        });
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[NamedMask] {
        &self.entries
    }

    #[must_use]
    pub fn best(&self, url: &UrlRecord) -> Option<Selection<'_>> {
        let masks: Vec<&UrlRecord> = self.entries.iter().map(|e| &e.mask).collect();
        let selection = best_match_scored(&masks, url).map(|(index, score)| {
            let entry = &self.entries[index];
            Selection {
                index,
                name: &entry.name,
                mask: &entry.mask,
                score,
            }
        });

        match &selection {
            Some(s) => tracing::debug!(name = s.name, score = s.score, url = %url, "mask selected"),
            None => tracing::debug!(url = %url, candidates = self.len(), "no mask matched"),
        }

        selection
    }
}

impl<S: Into<String>> FromIterator<(S, MaskInput)> for MaskSet {
    fn from_iter<I: IntoIterator<Item = (S, MaskInput)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (name, mask) in iter {
            set.push(name, &mask);
        }
        set
    }
}
