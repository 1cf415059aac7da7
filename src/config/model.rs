//! Serde data structures for mask set files.
//!
//! Contains [`MaskFile`] (the root) and [`MaskEntry`]. Both derive
//! `Serialize` and `Deserialize` with `deny_unknown_fields` for strict
//! parsing. A mask is written either as a string or as a table of URL
//! fields; see [`MaskInput`].

use serde::{Deserialize, Serialize};

use crate::mask::{MaskInput, MaskSet};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MaskFile {
    pub masks: Vec<MaskEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MaskEntry {
    pub name: String,

    pub mask: MaskInput,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl MaskFile {
    /// Resolve every entry, in file order, into a [`MaskSet`].
    #[must_use]
    pub fn to_mask_set(&self) -> MaskSet {
        self.masks
            .iter()
            .map(|entry| (entry.name.clone(), entry.mask.clone()))
            .collect()
    }
}
