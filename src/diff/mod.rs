//! Semantic diff of parsed JSON documents.
//!
//! The [`DiffEngine`] recursively compares two `serde_json::Value` trees under
//! a [`CompareConfig`] and produces a [`ChangeReport`] keyed by canonical
//! paths. [`ChangeSummary`] classifies a finished report for the assertion
//! policies.
//!
//! # Example
//!
//! ```
//! use payload_assert::diff::{CompareConfig, DiffEngine};
//! use serde_json::json;
//!
//! let engine = DiffEngine::with_config(CompareConfig::new());
//! let report = engine.diff(&json!({"a": 1}), &json!({"a": 2}));
//! assert!(!report.is_empty());
//! ```

mod engine;
mod engine_config;
mod result;
mod summary;

pub use engine::{type_name, DiffEngine};
pub use engine_config::{CompareConfig, Verbosity};
pub use result::{ChangeDetail, ChangeKind, ChangeReport, Criticality};
pub use summary::ChangeSummary;
