//! Recursive tree diff engine.
//!
//! Compares two parsed JSON values and produces a [`ChangeReport`] covering
//! the eight change kinds. The walk is a plain match over the value variants:
//! objects recurse per key, arrays compare either index-by-index or as
//! multisets, scalars compare under the configured equivalence.

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::engine_config::CompareConfig;
use super::result::{ChangeDetail, ChangeKind, ChangeReport};
use crate::path::DocPath;

/// Type label of a value as reported in `type_changes` details.
#[must_use]
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) => {
            if n.is_f64() {
                "float"
            } else {
                "int"
            }
        }
        Value::String(_) => "str",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Effective type used for compatibility checks. Distinct from [`type_name`]:
/// numeric widening collapses `Integer` and `Float` into `Number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EffectiveType {
    Null,
    Bool,
    Integer,
    Float,
    Number,
    String,
    Array,
    Object,
}

/// Multiset bucket for order-insensitive array comparison.
struct Bucket<'a> {
    count: usize,
    first_index: usize,
    representative: &'a Value,
}

/// Semantic diff engine for parsed JSON documents.
///
/// Holds its configuration by value; carries no other state, so one engine
/// can serve any number of comparisons from any number of threads.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    config: CompareConfig,
    ignore_order: bool,
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffEngine {
    /// Engine with default settings (order-insensitive sequences).
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CompareConfig::default())
    }

    /// General-purpose engine: sequences compare as multisets unless the
    /// config sets the order flag explicitly.
    #[must_use]
    pub fn with_config(config: CompareConfig) -> Self {
        Self::resolved(config, true)
    }

    /// Order-sensitive engine, used by the exact-match policy: sequences
    /// compare index-by-index unless the config says otherwise.
    #[must_use]
    pub fn with_strict_order(config: CompareConfig) -> Self {
        Self::resolved(config, false)
    }

    fn resolved(config: CompareConfig, policy_default: bool) -> Self {
        let ignore_order = config.order_ignored(policy_default);
        Self {
            config,
            ignore_order,
        }
    }

    #[must_use]
    pub fn config(&self) -> &CompareConfig {
        &self.config
    }

    /// Whether sequences compare as multisets in this engine.
    #[must_use]
    pub fn order_ignored(&self) -> bool {
        self.ignore_order
    }

    /// Compute the full structural difference between two documents.
    ///
    /// An empty report means the documents are equivalent under this engine's
    /// configuration. Never fails: any two well-formed values are comparable.
    pub fn diff(&self, old: &Value, new: &Value) -> ChangeReport {
        tracing::debug!(
            exclude_paths = ?self.config.exclude_paths,
            ignore_order = self.ignore_order,
            ignore_string_case = self.config.ignore_string_case,
            ignore_numeric_widening = self.config.ignore_numeric_widening,
            verbosity = ?self.config.verbosity,
            extensions = ?self.config.extensions,
            "comparing documents"
        );

        let mut report = ChangeReport::new();
        self.walk(old, new, &DocPath::root(), &mut report);

        for (n, (kind, details)) in report.iter().enumerate() {
            tracing::debug!(
                kind = %kind,
                count = details.len(),
                details = ?details,
                "{}. change ({})",
                n + 1,
                kind
            );
        }
        report
    }

    fn walk(&self, old: &Value, new: &Value, path: &DocPath, report: &mut ChangeReport) {
        if self.config.is_excluded(path) {
            return;
        }
        match (old, new) {
            (Value::Object(a), Value::Object(b)) => self.walk_objects(a, b, path, report),
            (Value::Array(a), Value::Array(b)) => {
                if self.ignore_order {
                    self.walk_multiset(a, b, path, report);
                } else {
                    self.walk_ordered(a, b, path, report);
                }
            }
            _ => self.walk_leaf(old, new, path, report),
        }
    }

    fn walk_objects(
        &self,
        old: &Map<String, Value>,
        new: &Map<String, Value>,
        path: &DocPath,
        report: &mut ChangeReport,
    ) {
        for (key, old_val) in old {
            let child = path.key(key);
            match new.get(key) {
                Some(new_val) => self.walk(old_val, new_val, &child, report),
                None => {
                    if self.config.is_excluded(&child) {
                        continue;
                    }
                    let mut detail = ChangeDetail::at(child.to_string());
                    if self.config.verbosity.records_member_values() {
                        detail = detail.with_old_value(old_val.clone());
                    }
                    report.push(ChangeKind::DictionaryItemRemoved, detail);
                }
            }
        }

        for (key, new_val) in new {
            if old.contains_key(key) {
                continue;
            }
            let child = path.key(key);
            if self.config.is_excluded(&child) {
                continue;
            }
            let mut detail = ChangeDetail::at(child.to_string());
            if self.config.verbosity.records_member_values() {
                detail = detail.with_new_value(new_val.clone());
            }
            report.push(ChangeKind::DictionaryItemAdded, detail);
        }
    }

    /// Index-by-index comparison; length mismatch yields added/removed
    /// details at the trailing indices.
    fn walk_ordered(
        &self,
        old: &[Value],
        new: &[Value],
        path: &DocPath,
        report: &mut ChangeReport,
    ) {
        let shared = old.len().min(new.len());
        for i in 0..shared {
            let child = path.index(i);
            self.walk(&old[i], &new[i], &child, report);
        }

        for (i, item) in old.iter().enumerate().skip(shared) {
            let child = path.index(i);
            if self.config.is_excluded(&child) {
                continue;
            }
            let mut detail = ChangeDetail::at(child.to_string());
            if self.config.verbosity.records_member_values() {
                detail = detail.with_old_value(item.clone());
            }
            report.push(ChangeKind::IterableItemRemoved, detail);
        }

        for (i, item) in new.iter().enumerate().skip(shared) {
            let child = path.index(i);
            if self.config.is_excluded(&child) {
                continue;
            }
            let mut detail = ChangeDetail::at(child.to_string());
            if self.config.verbosity.records_member_values() {
                detail = detail.with_new_value(item.clone());
            }
            report.push(ChangeKind::IterableItemAdded, detail);
        }
    }

    /// Multiset comparison: elements are grouped by a canonical key built
    /// under the configured equivalence, so nested permutations and folded
    /// strings land in the same bucket.
    fn walk_multiset(
        &self,
        old: &[Value],
        new: &[Value],
        path: &DocPath,
        report: &mut ChangeReport,
    ) {
        let old_buckets = self.bucket(old);
        let new_buckets = self.bucket(new);

        for (key, old_bucket) in &old_buckets {
            let child = path.index(old_bucket.first_index);
            if self.config.is_excluded(&child) {
                continue;
            }
            match new_buckets.get(key) {
                None => {
                    let mut detail = ChangeDetail::at(child.to_string());
                    if self.config.verbosity.records_member_values() {
                        detail = detail.with_old_value(old_bucket.representative.clone());
                    }
                    report.push(ChangeKind::IterableItemRemoved, detail);
                }
                Some(new_bucket) if new_bucket.count != old_bucket.count => {
                    let mut detail = ChangeDetail::at(child.to_string())
                        .with_counts(old_bucket.count, new_bucket.count);
                    if self.config.verbosity.records_values() {
                        detail = detail.with_old_value(old_bucket.representative.clone());
                    }
                    report.push(ChangeKind::RepetitionChange, detail);
                }
                Some(_) => {}
            }
        }

        for (key, new_bucket) in &new_buckets {
            if old_buckets.contains_key(key) {
                continue;
            }
            let child = path.index(new_bucket.first_index);
            if self.config.is_excluded(&child) {
                continue;
            }
            let mut detail = ChangeDetail::at(child.to_string());
            if self.config.verbosity.records_member_values() {
                detail = detail.with_new_value(new_bucket.representative.clone());
            }
            report.push(ChangeKind::IterableItemAdded, detail);
        }
    }

    fn bucket<'a>(&self, items: &'a [Value]) -> IndexMap<String, Bucket<'a>> {
        let mut buckets: IndexMap<String, Bucket<'a>> = IndexMap::new();
        for (i, item) in items.iter().enumerate() {
            buckets
                .entry(self.canonical_key(item))
                .and_modify(|b| b.count += 1)
                .or_insert(Bucket {
                    count: 1,
                    first_index: i,
                    representative: item,
                });
        }
        buckets
    }

    fn walk_leaf(&self, old: &Value, new: &Value, path: &DocPath, report: &mut ChangeReport) {
        if self.effective_type(old) == self.effective_type(new) {
            if self.scalars_equal(old, new) {
                return;
            }
            let mut detail = ChangeDetail::at(path.to_string());
            if self.config.verbosity.records_values() {
                detail = detail
                    .with_old_value(old.clone())
                    .with_new_value(new.clone());
            }
            report.push(ChangeKind::ValuesChanged, detail);
        } else {
            let mut detail =
                ChangeDetail::at(path.to_string()).with_types(type_name(old), type_name(new));
            if self.config.verbosity.records_values() {
                detail = detail
                    .with_old_value(old.clone())
                    .with_new_value(new.clone());
            }
            report.push(ChangeKind::TypeChanges, detail);
        }
    }

    fn effective_type(&self, value: &Value) -> EffectiveType {
        match value {
            Value::Null => EffectiveType::Null,
            Value::Bool(_) => EffectiveType::Bool,
            Value::Number(n) => {
                if self.config.ignore_numeric_widening {
                    EffectiveType::Number
                } else if n.is_f64() {
                    EffectiveType::Float
                } else {
                    EffectiveType::Integer
                }
            }
            Value::String(_) => EffectiveType::String,
            Value::Array(_) => EffectiveType::Array,
            Value::Object(_) => EffectiveType::Object,
        }
    }

    fn scalars_equal(&self, a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(x), Value::Bool(y)) => x == y,
            (Value::Number(x), Value::Number(y)) => {
                if self.config.ignore_numeric_widening {
                    x.as_f64() == y.as_f64()
                } else {
                    x == y
                }
            }
            (Value::String(x), Value::String(y)) => {
                if self.config.ignore_string_case {
                    x.to_lowercase() == y.to_lowercase()
                } else {
                    x == y
                }
            }
            _ => false,
        }
    }

    /// Canonical key of a value under the configured equivalence: case-folded
    /// strings and widened numbers collide, nested arrays are key-sorted so
    /// permutations collide at every depth.
    fn canonical_key(&self, value: &Value) -> String {
        let mut out = String::new();
        self.write_canonical(value, &mut out);
        out
    }

    fn write_canonical(&self, value: &Value, out: &mut String) {
        use std::fmt::Write;
        match value {
            Value::Null => out.push_str("null"),
            Value::Bool(b) => {
                let _ = write!(out, "{b}");
            }
            Value::Number(n) => {
                if self.config.ignore_numeric_widening {
                    let _ = write!(out, "n:{}", n.as_f64().unwrap_or(f64::NAN));
                } else if let Some(i) = n.as_i64() {
                    let _ = write!(out, "i:{i}");
                } else if let Some(u) = n.as_u64() {
                    let _ = write!(out, "i:{u}");
                } else {
                    let _ = write!(out, "f:{}", n.as_f64().unwrap_or(f64::NAN));
                }
            }
            Value::String(s) => {
                // Length prefix keeps strings containing delimiters from
                // colliding with composite keys.
                if self.config.ignore_string_case {
                    let folded = s.to_lowercase();
                    let _ = write!(out, "s:{}:{folded}", folded.len());
                } else {
                    let _ = write!(out, "s:{}:{s}", s.len());
                }
            }
            Value::Array(items) => {
                let mut keys: Vec<String> =
                    items.iter().map(|v| self.canonical_key(v)).collect();
                keys.sort_unstable();
                out.push('[');
                for key in keys {
                    out.push_str(&key);
                    out.push(',');
                }
                out.push(']');
            }
            Value::Object(map) => {
                let mut entries: Vec<(&String, String)> = map
                    .iter()
                    .map(|(k, v)| (k, self.canonical_key(v)))
                    .collect();
                entries.sort_unstable();
                out.push('{');
                for (key, value_key) in entries {
                    let _ = write!(out, "{}:{key}={value_key},", key.len());
                }
                out.push('}');
            }
        }
    }
}
