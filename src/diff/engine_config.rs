//! Configuration types for the diff engine.

use std::collections::{BTreeMap, BTreeSet};

use serde_json::Value;

use crate::path::DocPath;

/// How much contextual detail is attached to each change record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Paths and type names only, no values.
    Low,
    /// Old/new values for value and type changes.
    Standard,
    /// Also attach values to added/removed member details.
    #[default]
    High,
}

impl Verbosity {
    /// Whether old/new values are recorded for value and type changes.
    #[must_use]
    pub fn records_values(self) -> bool {
        !matches!(self, Self::Low)
    }

    /// Whether added/removed member details carry the member's value.
    #[must_use]
    pub fn records_member_values(self) -> bool {
        matches!(self, Self::High)
    }
}

/// Options controlling one comparison.
///
/// Immutable for the duration of a comparison; cloning is cheap enough that
/// every invocation takes its own copy.
#[derive(Debug, Clone, Default)]
pub struct CompareConfig {
    /// Canonical paths whose subtrees are skipped entirely.
    pub exclude_paths: BTreeSet<String>,
    /// Order-insensitive sequence comparison. `None` means "use the calling
    /// policy's default": on for general comparison and superset matching,
    /// off for exact matching.
    pub ignore_order: Option<bool>,
    /// Case-folded string comparison.
    pub ignore_string_case: bool,
    /// Treat integer and float numbers as one numeric type.
    pub ignore_numeric_widening: bool,
    /// Detail level attached to change records.
    pub verbosity: Verbosity,
    /// Named pass-through options forwarded to the diff primitive. Carried
    /// and logged but not interpreted by the built-in engine.
    pub extensions: BTreeMap<String, Value>,
}

impl CompareConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude a single path (and everything below it) from comparison.
    #[must_use]
    pub fn exclude_path(mut self, path: impl Into<String>) -> Self {
        self.exclude_paths.insert(path.into());
        self
    }

    /// Exclude several paths at once.
    #[must_use]
    pub fn exclude(mut self, paths: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.exclude_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn ignore_order(mut self, ignore: bool) -> Self {
        self.ignore_order = Some(ignore);
        self
    }

    #[must_use]
    pub fn ignore_string_case(mut self, ignore: bool) -> Self {
        self.ignore_string_case = ignore;
        self
    }

    #[must_use]
    pub fn ignore_numeric_widening(mut self, ignore: bool) -> Self {
        self.ignore_numeric_widening = ignore;
        self
    }

    #[must_use]
    pub fn verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Attach a named pass-through option.
    #[must_use]
    pub fn extension(mut self, name: impl Into<String>, value: Value) -> Self {
        self.extensions.insert(name.into(), value);
        self
    }

    /// Resolve the order flag against a policy default.
    #[must_use]
    pub(crate) fn order_ignored(&self, policy_default: bool) -> bool {
        self.ignore_order.unwrap_or(policy_default)
    }

    /// Whether a location is excluded from comparison.
    #[must_use]
    pub(crate) fn is_excluded(&self, path: &DocPath) -> bool {
        !self.exclude_paths.is_empty() && self.exclude_paths.contains(&path.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_general_use() {
        let config = CompareConfig::default();
        assert!(config.exclude_paths.is_empty());
        assert_eq!(config.ignore_order, None);
        assert!(config.order_ignored(true));
        assert!(!config.order_ignored(false));
        assert!(!config.ignore_string_case);
        assert!(!config.ignore_numeric_widening);
        assert_eq!(config.verbosity, Verbosity::High);
    }

    #[test]
    fn explicit_order_flag_overrides_policy_default() {
        let config = CompareConfig::new().ignore_order(false);
        assert!(!config.order_ignored(true));
    }

    #[test]
    fn excluded_path_lookup_uses_canonical_form() {
        let config = CompareConfig::new().exclude_path("root['a'][0]");
        assert!(config.is_excluded(&DocPath::root().key("a").index(0)));
        assert!(!config.is_excluded(&DocPath::root().key("a").index(1)));
        assert!(!config.is_excluded(&DocPath::root()));
    }

    #[test]
    fn verbosity_levels() {
        assert!(!Verbosity::Low.records_values());
        assert!(Verbosity::Standard.records_values());
        assert!(!Verbosity::Standard.records_member_values());
        assert!(Verbosity::High.records_member_values());
    }

    #[test]
    fn extensions_are_carried() {
        let config = CompareConfig::new().extension("max_depth", json!(32));
        assert_eq!(config.extensions.get("max_depth"), Some(&json!(32)));
    }
}
