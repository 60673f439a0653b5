//! **Semantic JSON comparison and assertions for acceptance testing.**
//!
//! `payload-assert` compares two serialized JSON documents — an actual result
//! and an expected result — and computes a structural change report that
//! classifies every discrepancy: type changes, value changes, added or
//! removed members in mappings and sequences, and multiplicity changes under
//! order-insensitive comparison. On top of the report sit two assertion
//! policies for test code:
//!
//! - **Exact match**: any difference fails.
//! - **Superset match**: the payload must contain everything the expected
//!   document requires, but may carry additional content.
//!
//! ## Core Concepts & Modules
//!
//! - **[`diff`]**: the [`DiffEngine`], its [`CompareConfig`], and the
//!   [`ChangeReport`] keyed by canonical paths (`root['items'][2]`). The
//!   [`ChangeSummary`] classifies a report into the eight change kinds and
//!   their critical/ignorable partition.
//! - **[`assert`]**: the two assertion policies plus [`compare`] for raw
//!   report access.
//! - **[`loader`]**: JSON parsing with typed per-side errors.
//! - **[`error`]**: [`PayloadAssertError`] — malformed input or mismatch,
//!   with the full change report embedded in mismatch messages.
//!
//! Every comparison is a pure function of its two inputs and configuration:
//! no state survives a call, and engines are safe to share across threads.
//!
//! ## Getting Started
//!
//! ```
//! use payload_assert::{assert_exact_match, assert_superset, CompareConfig};
//!
//! // Exact matching is order-sensitive by default.
//! let config = CompareConfig::new();
//! assert_exact_match(r#"{"a": 1}"#, r#"{"a": 1}"#, &config).unwrap();
//!
//! // Superset matching tolerates extra payload content.
//! assert_superset(r#"{"a": 1, "b": 2}"#, r#"{"a": 1}"#, &config).unwrap();
//! ```
//!
//! ## Inspecting differences
//!
//! ```
//! use payload_assert::{compare, ChangeKind, CompareConfig};
//!
//! let report = compare(r#"{"a": "x"}"#, r#"{"a": "y"}"#, &CompareConfig::new()).unwrap();
//! let detail = &report.details(ChangeKind::ValuesChanged)[0];
//! assert_eq!(detail.path, "root['a']");
//! ```
//!
//! ## Configuration
//!
//! [`CompareConfig`] is a builder: excluded paths, order sensitivity, case
//! folding, numeric-widening tolerance, verbosity, and an extension map of
//! named pass-through options.
//!
//! ```
//! use payload_assert::{compare, CompareConfig, Verbosity};
//!
//! let config = CompareConfig::new()
//!     .exclude_path("root['timestamp']")
//!     .ignore_string_case(true)
//!     .verbosity(Verbosity::Standard);
//! let report = compare(
//!     r#"{"status": "OK", "timestamp": 1}"#,
//!     r#"{"status": "ok", "timestamp": 2}"#,
//!     &config,
//! ).unwrap();
//! assert!(report.is_empty());
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors sections are aspirational for a small API
    clippy::missing_errors_doc
)]

pub mod assert;
pub mod diff;
pub mod error;
pub mod loader;
pub mod path;

pub use assert::{assert_exact_match, assert_superset, compare};
pub use diff::{
    ChangeDetail, ChangeKind, ChangeReport, ChangeSummary, CompareConfig, Criticality, DiffEngine,
    Verbosity,
};
pub use error::{DocumentSide, PayloadAssertError, Result};
pub use path::DocPath;
