//! Change classification over a finished report.

use indexmap::IndexMap;
use serde::Serialize;

use super::result::{ChangeKind, ChangeReport};

/// Summary statistics for one [`ChangeReport`].
///
/// Pure inspection: built once from a report, never mutates it. Both
/// assertion policies decide pass/fail from this.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ChangeSummary {
    /// Number of distinct change kinds present.
    pub kinds_present: usize,
    /// Total per-location details across all kinds.
    pub total_details: usize,
    /// Detail count per present kind, in reporting order.
    pub counts: IndexMap<ChangeKind, usize>,
}

impl ChangeSummary {
    /// Classify a report.
    #[must_use]
    pub fn from_report(report: &ChangeReport) -> Self {
        let mut summary = Self::default();
        for (kind, details) in report.iter() {
            summary.kinds_present += 1;
            summary.total_details += details.len();
            summary.counts.insert(kind, details.len());
        }
        summary
    }

    /// Detail count for one kind; zero when absent.
    #[must_use]
    pub fn count(&self, kind: ChangeKind) -> usize {
        self.counts.get(&kind).copied().unwrap_or(0)
    }

    /// Present kinds that fail a superset-match assertion.
    #[must_use]
    pub fn critical_kinds(&self) -> Vec<ChangeKind> {
        self.counts
            .keys()
            .copied()
            .filter(ChangeKind::is_critical)
            .collect()
    }

    /// Present kinds tolerated by superset-match.
    #[must_use]
    pub fn ignorable_kinds(&self) -> Vec<ChangeKind> {
        self.counts
            .keys()
            .copied()
            .filter(ChangeKind::is_ignorable)
            .collect()
    }

    #[must_use]
    pub fn has_critical(&self) -> bool {
        self.counts.keys().any(|k| k.is_critical())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds_present == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{CompareConfig, DiffEngine};
    use serde_json::json;

    #[test]
    fn empty_report_classifies_empty() {
        let summary = ChangeSummary::from_report(&ChangeReport::new());
        assert!(summary.is_empty());
        assert!(!summary.has_critical());
        assert!(summary.critical_kinds().is_empty());
    }

    #[test]
    fn counts_follow_report() {
        let engine = DiffEngine::with_config(CompareConfig::new());
        let report = engine.diff(
            &json!({"a": 1, "b": 2, "c": 3}),
            &json!({"a": 9, "b": 2}),
        );
        let summary = ChangeSummary::from_report(&report);
        assert_eq!(summary.kinds_present, 2);
        assert_eq!(summary.count(ChangeKind::ValuesChanged), 1);
        assert_eq!(summary.count(ChangeKind::DictionaryItemRemoved), 1);
        assert_eq!(summary.count(ChangeKind::TypeChanges), 0);
        assert_eq!(summary.total_details, 2);
    }

    #[test]
    fn partition_of_present_kinds() {
        let engine = DiffEngine::with_config(CompareConfig::new());
        // Payload has an extra key (removed, ignorable) and is missing one
        // (added, critical).
        let report = engine.diff(&json!({"a": 1, "x": 0}), &json!({"a": 1, "b": 2}));
        let summary = ChangeSummary::from_report(&report);
        assert_eq!(summary.critical_kinds(), vec![ChangeKind::DictionaryItemAdded]);
        assert_eq!(
            summary.ignorable_kinds(),
            vec![ChangeKind::DictionaryItemRemoved]
        );
        assert!(summary.has_critical());
    }
}
