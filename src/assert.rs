//! Assertion policies built on the diff engine.
//!
//! Two policies turn a [`ChangeReport`] into pass/fail: exact-match fails on
//! any difference, superset-match fails only on critical kinds. Both embed
//! the full report in the failure so a test log alone locates the
//! discrepancy.

use crate::diff::{ChangeReport, ChangeSummary, CompareConfig, DiffEngine};
use crate::error::{PayloadAssertError, Result};
use crate::loader::parse_documents;

/// Compare two serialized documents and return the change report.
///
/// Sequences compare order-insensitively unless the config sets the order
/// flag. Fails only on malformed input; a non-empty report is a normal
/// return, not an error.
pub fn compare(actual: &str, expected: &str, config: &CompareConfig) -> Result<ChangeReport> {
    let (actual, expected) = parse_documents(actual, expected)?;
    let engine = DiffEngine::with_config(config.clone());
    Ok(engine.diff(&actual, &expected))
}

/// Assert that two documents match exactly.
///
/// Sequences compare in order unless the config sets the order flag. Any
/// difference fails with [`PayloadAssertError::Mismatch`] embedding the full
/// report.
pub fn assert_exact_match(actual: &str, expected: &str, config: &CompareConfig) -> Result<()> {
    let (actual, expected) = parse_documents(actual, expected)?;
    let engine = DiffEngine::with_strict_order(config.clone());
    let report = engine.diff(&actual, &expected);

    if report.is_empty() {
        Ok(())
    } else {
        Err(PayloadAssertError::mismatch(
            "payloads do not match",
            report,
        ))
    }
}

/// Assert that `payload` is a superset of `expected`: it contains everything
/// the expected document requires and may carry more.
///
/// Critical kinds (type/value/repetition changes, added members) mean the
/// payload misses or contradicts an expectation and fail the assertion.
/// Removal kinds mean the payload has extra content, which the superset
/// contract permits; they are logged for visibility but do not fail. Every
/// present kind is reported before failing.
pub fn assert_superset(payload: &str, expected: &str, config: &CompareConfig) -> Result<()> {
    let (payload, expected) = parse_documents(payload, expected)?;
    let engine = DiffEngine::with_config(config.clone());
    let report = engine.diff(&payload, &expected);

    if report.is_empty() {
        tracing::info!("no difference between payload and expectation");
        return Ok(());
    }

    let summary = ChangeSummary::from_report(&report);
    for (kind, details) in report.iter() {
        if kind.is_critical() {
            tracing::warn!(kind = %kind, details = ?details, "critical change");
        } else {
            tracing::info!(kind = %kind, details = ?details, "tolerated change");
        }
    }

    if summary.has_critical() {
        Err(PayloadAssertError::mismatch(
            "payload does not meet expectation",
            report,
        ))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ChangeKind;

    #[test]
    fn exact_match_on_identical_documents() {
        let doc = r#"{"1": "one", "2": 2, "3": null}"#;
        assert!(assert_exact_match(doc, doc, &CompareConfig::new()).is_ok());
    }

    #[test]
    fn exact_match_is_order_sensitive_by_default() {
        let a = r#"{"1": "one", "2": [1, 2, 3]}"#;
        let b = r#"{"1": "one", "2": [3, 2, 1]}"#;
        let err = assert_exact_match(a, b, &CompareConfig::new()).unwrap_err();
        let report = err.report().expect("mismatch carries a report");
        let details = report.details(ChangeKind::ValuesChanged);
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].path, "root['2'][0]");
        assert_eq!(details[1].path, "root['2'][2]");

        let config = CompareConfig::new().ignore_order(true);
        assert!(assert_exact_match(a, b, &config).is_ok());
    }

    #[test]
    fn compare_is_order_insensitive_by_default() {
        let report = compare("[1, 2, 3]", "[3, 2, 1]", &CompareConfig::new()).expect("valid");
        assert!(report.is_empty());
    }

    #[test]
    fn superset_tolerates_extra_payload_content() {
        let payload = r#"{"a": 1, "b": 2}"#;
        let expected = r#"{"a": 1}"#;
        assert!(assert_superset(payload, expected, &CompareConfig::new()).is_ok());
    }

    #[test]
    fn superset_fails_on_missing_expected_member() {
        let payload = r#"{"a": 1}"#;
        let expected = r#"{"a": 1, "b": 2}"#;
        let err = assert_superset(payload, expected, &CompareConfig::new()).unwrap_err();
        let report = err.report().expect("mismatch carries a report");
        assert!(report.contains(ChangeKind::DictionaryItemAdded));
    }

    #[test]
    fn superset_fails_on_value_contradiction() {
        let payload = r#"{"a": 1, "extra": true}"#;
        let expected = r#"{"a": 2}"#;
        let err = assert_superset(payload, expected, &CompareConfig::new()).unwrap_err();
        // The failure report still lists the tolerated extra member.
        let report = err.report().expect("mismatch carries a report");
        assert!(report.contains(ChangeKind::ValuesChanged));
        assert!(report.contains(ChangeKind::DictionaryItemRemoved));
    }

    #[test]
    fn malformed_input_surfaces_before_diffing() {
        let err = compare("{not json}", "{}", &CompareConfig::new()).unwrap_err();
        assert!(matches!(err, PayloadAssertError::MalformedInput { .. }));

        let err = assert_exact_match("{}", "{oops", &CompareConfig::new()).unwrap_err();
        assert!(matches!(err, PayloadAssertError::MalformedInput { .. }));
    }
}
