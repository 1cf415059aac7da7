//! URL decomposition and wildcard mask matching.
//!
//! A URL-like string is split into the eight fields of a [`UrlRecord`]
//! by [`parse`]. A mask is a record whose fields may hold wildcards:
//! [`match_score`] compares it field by field and returns how many
//! fields matched literally, or `None` when any field disagrees.
//! [`best_match_index`] ranks a list of masks against one URL.
//!
//! Wildcard vocabulary:
//!
//! | Field | Forms |
//! |-------|-------|
//! | any | `*` |
//! | protocol, username, password, port, query, fragment | `X*`, `*X` |
//! | hostname | `*.suffix` (one or more labels), `**.suffix` (zero or more) |
//! | path | `prefix/*` (needs the slash), `prefix/**` (also the bare prefix) |

pub mod codec;
pub mod field;
pub mod input;
pub mod lookup;
pub mod matcher;
pub mod record;
pub mod selector;

pub use codec::{parse, parse_with_default, serialize};
pub use field::{fuzzy_match, FieldOutcome, FieldRule};
pub use input::{AsMask, MaskInput};
pub use lookup::{CommonSuffixes, DefaultPorts, SuffixTable, WellKnownPorts};
pub use matcher::{match_score, match_scores, matches, FieldScores};
pub use record::{FieldKind, UrlRecord, WILDCARD};
pub use selector::{
    best_match, best_match_index, best_match_scored, MaskSet, NamedMask, Selection,
};
