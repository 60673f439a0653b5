//! Change report structures.
//!
//! A comparison produces a [`ChangeReport`]: a map from [`ChangeKind`] to the
//! locations where that kind of difference occurred. The report only contains
//! kinds that actually occurred — an empty report means the two documents are
//! equivalent under the active configuration.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;

/// The eight categories of structural difference.
///
/// The `snake_case` names are stable and appear verbatim in serialized reports
/// and failure messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// Same location, incompatible value types.
    TypeChanges,
    /// Same location, same type, different scalar value.
    ValuesChanged,
    /// Element multiplicity differs (order-insensitive comparison only).
    RepetitionChange,
    /// Mapping key present in the new document, absent in the old.
    DictionaryItemAdded,
    /// Sequence element present in the new document, absent in the old.
    IterableItemAdded,
    /// Set element present in the old document, absent in the new.
    ///
    /// Reserved: JSON has no set type, so comparisons over parsed JSON never
    /// produce this kind. It stays in the taxonomy so the assertion policies'
    /// critical/ignorable partition is complete.
    SetItemRemoved,
    /// Mapping key present in the old document, absent in the new.
    DictionaryItemRemoved,
    /// Sequence element present in the old document, absent in the new.
    IterableItemRemoved,
}

/// How an assertion policy treats a change kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criticality {
    /// Fails a superset-match assertion: the payload is missing or contradicts
    /// something the expected document required.
    Critical,
    /// Tolerated by superset-match: the payload carries content beyond what
    /// was expected.
    Ignorable,
}

impl ChangeKind {
    /// All kinds, in their stable reporting order.
    pub const ALL: [ChangeKind; 8] = [
        Self::TypeChanges,
        Self::ValuesChanged,
        Self::RepetitionChange,
        Self::DictionaryItemAdded,
        Self::IterableItemAdded,
        Self::SetItemRemoved,
        Self::DictionaryItemRemoved,
        Self::IterableItemRemoved,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TypeChanges => "type_changes",
            Self::ValuesChanged => "values_changed",
            Self::RepetitionChange => "repetition_change",
            Self::DictionaryItemAdded => "dictionary_item_added",
            Self::IterableItemAdded => "iterable_item_added",
            Self::SetItemRemoved => "set_item_removed",
            Self::DictionaryItemRemoved => "dictionary_item_removed",
            Self::IterableItemRemoved => "iterable_item_removed",
        }
    }

    /// Partition used by the superset-match policy.
    #[must_use]
    pub fn criticality(&self) -> Criticality {
        match self {
            Self::TypeChanges
            | Self::ValuesChanged
            | Self::RepetitionChange
            | Self::DictionaryItemAdded
            | Self::IterableItemAdded => Criticality::Critical,
            Self::SetItemRemoved
            | Self::DictionaryItemRemoved
            | Self::IterableItemRemoved => Criticality::Ignorable,
        }
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.criticality() == Criticality::Critical
    }

    #[must_use]
    pub fn is_ignorable(&self) -> bool {
        self.criticality() == Criticality::Ignorable
    }
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single per-location difference.
///
/// Which fields are populated depends on the change kind and the configured
/// verbosity: value changes carry old/new values, type changes carry type
/// names, repetition changes carry old/new multiplicities.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeDetail {
    /// Canonical path of the affected location.
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_type: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_count: Option<usize>,
}

impl ChangeDetail {
    /// A detail carrying only the path (minimal verbosity).
    #[must_use]
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            old_value: None,
            new_value: None,
            old_type: None,
            new_type: None,
            old_count: None,
            new_count: None,
        }
    }

    #[must_use]
    pub fn with_old_value(mut self, value: Value) -> Self {
        self.old_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_new_value(mut self, value: Value) -> Self {
        self.new_value = Some(value);
        self
    }

    #[must_use]
    pub fn with_types(mut self, old_type: &'static str, new_type: &'static str) -> Self {
        self.old_type = Some(old_type);
        self.new_type = Some(new_type);
        self
    }

    #[must_use]
    pub fn with_counts(mut self, old_count: usize, new_count: usize) -> Self {
        self.old_count = Some(old_count);
        self.new_count = Some(new_count);
        self
    }

    /// Nested-map rendering of the non-path fields, used by
    /// [`ChangeReport::to_json`].
    fn fields_json(&self) -> Value {
        let mut map = serde_json::Map::new();
        if let Some(t) = self.old_type {
            map.insert("old_type".into(), Value::String(t.to_string()));
        }
        if let Some(t) = self.new_type {
            map.insert("new_type".into(), Value::String(t.to_string()));
        }
        if let Some(v) = &self.old_value {
            map.insert("old_value".into(), v.clone());
        }
        if let Some(v) = &self.new_value {
            map.insert("new_value".into(), v.clone());
        }
        if let Some(n) = self.old_count {
            map.insert("old_count".into(), Value::from(n));
        }
        if let Some(n) = self.new_count {
            map.insert("new_count".into(), Value::from(n));
        }
        Value::Object(map)
    }
}

/// Structured result of one comparison: change kind to per-location details.
///
/// Kinds appear in the order of [`ChangeKind::ALL`]; details appear in
/// document walk order. Constructed once per comparison, never merged.
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct ChangeReport {
    entries: IndexMap<ChangeKind, Vec<ChangeDetail>>,
}

impl ChangeReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the compared documents were equivalent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct change kinds present.
    #[must_use]
    pub fn kind_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of per-location details across all kinds.
    #[must_use]
    pub fn detail_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Kinds present, in insertion order.
    pub fn kinds(&self) -> impl Iterator<Item = ChangeKind> + '_ {
        self.entries.keys().copied()
    }

    #[must_use]
    pub fn contains(&self, kind: ChangeKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Details recorded for one kind; empty slice when the kind is absent.
    #[must_use]
    pub fn details(&self, kind: ChangeKind) -> &[ChangeDetail] {
        self.entries.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Iterate over present kinds with their details.
    pub fn iter(&self) -> impl Iterator<Item = (ChangeKind, &[ChangeDetail])> {
        self.entries.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    pub(crate) fn push(&mut self, kind: ChangeKind, detail: ChangeDetail) {
        self.entries.entry(kind).or_default().push(detail);
    }

    /// Render as a nested JSON value: `kind -> path -> {old_value, ...}`.
    ///
    /// This is the shape embedded in mismatch failure messages.
    #[must_use]
    pub fn to_json(&self) -> Value {
        let mut top = serde_json::Map::new();
        for kind in ChangeKind::ALL {
            let Some(details) = self.entries.get(&kind) else {
                continue;
            };
            let mut by_path = serde_json::Map::new();
            for detail in details {
                by_path.insert(detail.path.clone(), detail.fields_json());
            }
            top.insert(kind.as_str().to_string(), Value::Object(by_path));
        }
        Value::Object(top)
    }
}

impl Serialize for ChangeReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl std::fmt::Display for ChangeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_json())
    }
}
