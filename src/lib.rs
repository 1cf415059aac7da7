//! urlmask decomposes URL-like strings and matches them against wildcard masks.
//!
//! A string is split leniently into eight fields (protocol, username,
//! password, hostname, port, path, query, fragment). A mask is the same
//! record with wildcards in some fields; matching a mask against a URL
//! either fails or yields a specificity score, and a list of masks can
//! be ranked to find the one that describes a URL best.
//!
//! # Architecture
//!
//! - [`mask`] -- The core: records, parsing and serialization, per-field
//!   wildcard rules, record scoring, and best-match selection.
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (parse, match, best, validate).
//! - [`config`] -- Mask set files: data model, validation, and loading via
//!   the [`ConfigSource`](config::ConfigSource) trait.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//!
//! # Example
//!
//! ```
//! use urlmask::mask::{best_match_index, match_score, parse};
//!
//! let url = parse("https://api.example.com/v1/users");
//! assert_eq!(match_score("**.example.com/v1/**", &url), Some(0));
//! assert_eq!(match_score("https://api.example.com", &url), Some(2));
//! assert_eq!(match_score("http://*", &url), None);
//!
//! let masks = ["*", "https://*.example.com", "https://api.example.com/v1/users"];
//! assert_eq!(best_match_index(&masks, &url), Some(2));
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `yaml` | YAML mask set files _(enabled by default)_ |
//! | `json` | JSON mask set files |
//! | `toml` | TOML mask set files |
//! | `file-backends` | All file formats |
//! | `full` | All features |

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod mask;
