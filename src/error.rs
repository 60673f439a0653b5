//! Unified error types for payload-assert.
//!
//! Two failure classes exist: an input document that is not valid JSON
//! (raised before any diffing), and a mismatch that the active assertion
//! policy does not allow (the intended test-failure signal). Nothing is
//! retried — comparisons are deterministic.

use std::fmt;

use thiserror::Error;

use crate::diff::ChangeReport;

/// Which of the two input documents an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSide {
    /// The first argument: the actual/payload document.
    Actual,
    /// The second argument: the expected document.
    Expected,
}

impl fmt::Display for DocumentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Actual => f.write_str("actual"),
            Self::Expected => f.write_str("expected"),
        }
    }
}

/// Main error type for payload-assert operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PayloadAssertError {
    /// An input document is not valid JSON. Only valid JSON strings are
    /// accepted; the underlying parser message is preserved.
    #[error("{side} document is not valid JSON: {message}")]
    MalformedInput {
        side: DocumentSide,
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// The comparison found differences the active policy deems a failure.
    /// The full change report is embedded so the discrepancy can be located
    /// from the message alone.
    #[error("{context}; differences: {report}")]
    Mismatch {
        context: String,
        report: ChangeReport,
    },
}

impl PayloadAssertError {
    /// Create a malformed-input error for one side.
    pub fn malformed_input(side: DocumentSide, source: serde_json::Error) -> Self {
        Self::MalformedInput {
            side,
            message: source.to_string(),
            source,
        }
    }

    /// Create a mismatch error carrying the report as context.
    pub fn mismatch(context: impl Into<String>, report: ChangeReport) -> Self {
        Self::Mismatch {
            context: context.into(),
            report,
        }
    }

    /// The embedded change report, if this is a mismatch.
    #[must_use]
    pub fn report(&self) -> Option<&ChangeReport> {
        match self {
            Self::Mismatch { report, .. } => Some(report),
            Self::MalformedInput { .. } => None,
        }
    }
}

/// Convenient Result type for payload-assert operations.
pub type Result<T> = std::result::Result<T, PayloadAssertError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{ChangeKind, CompareConfig, DiffEngine};
    use serde_json::json;

    fn parse_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{not json}")
            .expect_err("input is intentionally invalid")
    }

    #[test]
    fn malformed_input_names_the_side() {
        let err = PayloadAssertError::malformed_input(DocumentSide::Expected, parse_error());
        let message = err.to_string();
        assert!(message.starts_with("expected document is not valid JSON"));
        assert!(err.report().is_none());
    }

    #[test]
    fn mismatch_message_embeds_report() {
        let report = DiffEngine::with_config(CompareConfig::new())
            .diff(&json!({"a": 1}), &json!({"a": 2}));
        let err = PayloadAssertError::mismatch("payloads do not match", report);
        let message = err.to_string();
        assert!(message.contains("values_changed"));
        assert!(message.contains("root['a']"));
        assert!(message.contains("\"old_value\":1"));
        assert!(err
            .report()
            .is_some_and(|r| r.contains(ChangeKind::ValuesChanged)));
    }
}
