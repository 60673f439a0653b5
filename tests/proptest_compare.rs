//! Property-based tests for the comparison engine.
//!
//! Ensures the diff algorithm never panics on arbitrary documents and that
//! its core guarantees (reflexivity, permutation invariance, exclusion
//! monotonicity) hold across random inputs.

use proptest::prelude::*;
use serde_json::{json, Value};

use payload_assert::{compare, ChangeKind, CompareConfig, DiffEngine};

/// Arbitrary JSON tree, bounded in depth and width so cases stay fast.
fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i32>().prop_map(|n| json!(n)),
        (-1.0e6..1.0e6f64).prop_map(|f| json!(f)),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 32, 6, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                .prop_map(|m| Value::Object(m.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn reflexivity(doc in arb_json()) {
        let engine = DiffEngine::with_config(CompareConfig::new());
        prop_assert!(engine.diff(&doc, &doc).is_empty());

        let strict = DiffEngine::with_strict_order(CompareConfig::new());
        prop_assert!(strict.diff(&doc, &doc).is_empty());
    }

    #[test]
    fn permutation_invariance(items in prop::collection::vec(arb_json(), 0..8), seed in any::<u64>()) {
        let mut shuffled = items.clone();
        // Cheap deterministic shuffle; proptest drives the seed.
        let n = shuffled.len();
        if n > 1 {
            let mut state = seed;
            for i in (1..n).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                shuffled.swap(i, (state % (i as u64 + 1)) as usize);
            }
        }

        let engine = DiffEngine::with_config(CompareConfig::new());
        let report = engine.diff(&json!({"x": items}), &json!({"x": shuffled}));
        prop_assert!(report.is_empty(), "permutation reported as a change: {report}");
    }

    #[test]
    fn excluding_the_only_difference_empties_the_report(base in arb_json(), old in arb_json(), new in arb_json()) {
        let a = json!({"base": base.clone(), "probe": old});
        let b = json!({"base": base, "probe": new});

        let config = CompareConfig::new().exclude_path("root['probe']");
        let engine = DiffEngine::with_config(config);
        prop_assert!(engine.diff(&a, &b).is_empty());
    }

    #[test]
    fn emptiness_is_symmetric(a in arb_json(), b in arb_json()) {
        let engine = DiffEngine::with_config(CompareConfig::new());
        prop_assert_eq!(engine.diff(&a, &b).is_empty(), engine.diff(&b, &a).is_empty());
    }

    #[test]
    fn no_panic_on_arbitrary_text(a in "\\PC{0,60}", b in "\\PC{0,60}") {
        // Either a report or a typed malformed-input error; never a crash.
        let _ = compare(&a, &b, &CompareConfig::new());
    }

    #[test]
    fn reported_kinds_are_within_the_taxonomy(a in arb_json(), b in arb_json()) {
        let engine = DiffEngine::with_config(CompareConfig::new());
        let report = engine.diff(&a, &b);
        for kind in report.kinds() {
            prop_assert!(ChangeKind::ALL.contains(&kind));
            // JSON documents never produce set changes.
            prop_assert_ne!(kind, ChangeKind::SetItemRemoved);
        }
    }
}
