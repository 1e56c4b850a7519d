//! Object catalog.
//!
//! The guard admits plain mappings only: null, arrays, dates, regular
//! expressions and error objects are all rejected. There are no separate
//! `not_null`, `not_array`, `not_date` or `not_regexp` methods; a bare
//! `object()` chain already enforces all four.
//!
//! ```
//! use vetter::prelude::*;
//! use serde_json::json;
//!
//! let p = vetter::object().compile()?;
//! assert!(p.accepts(json!({"a": 1})));
//! assert!(!p.accepts(json!(null)));
//! assert!(!p.accepts(json!([])));
//! assert!(!p.accepts(chrono::Utc::now()));
//! assert!(!p.accepts(Value::RegExp("^a".into())));
//! # Ok::<(), vetter::VetterError>(())
//! ```

use crate::chained::{Chained, typed_chain};
use vetter_kernel::{Fragment, Parameters, Value};

typed_chain!(
    /// A chain over plain mappings, started by [`crate::object()`].
    ObjectChain
);

pub(crate) fn guard() -> Fragment {
    Fragment::new("object", |v, _| matches!(v, Value::Object(_)))
}

fn key_count(v: &Value, p: &Parameters, name: &str, cmp: fn(f64, f64) -> bool) -> bool {
    match (v.as_object(), p.number(name)) {
        (Some(map), Some(bound)) => cmp(map.len() as f64, bound),
        _ => false,
    }
}

fn has_key(v: &Value, p: &Parameters, name: &str) -> Option<bool> {
    let key = p.string(name)?;
    Some(v.as_object()?.contains_key(key))
}

impl ObjectChain {
    #[must_use]
    pub fn empty(self) -> Self {
        self.push(Fragment::new("empty", |v, _| {
            v.as_object().is_some_and(|map| map.is_empty())
        }))
    }

    #[must_use]
    pub fn not_empty(self) -> Self {
        self.push(Fragment::new("not_empty", |v, _| {
            v.as_object().is_some_and(|map| !map.is_empty())
        }))
    }

    /// Own key `key` is present.
    #[must_use]
    pub fn has(self, key: &str) -> Self {
        self.push(
            Fragment::new("has", |v, p| has_key(v, p, "has") == Some(true))
                .with_param("has", key),
        )
    }

    /// Own key `key` is absent.
    #[must_use]
    pub fn has_not(self, key: &str) -> Self {
        self.push(
            Fragment::new("has_not", |v, p| has_key(v, p, "has_not") == Some(false))
                .with_param("has_not", key),
        )
    }

    #[must_use]
    pub fn min_keys(self, count: usize) -> Self {
        self.push(
            Fragment::new("min_keys", |v, p| key_count(v, p, "min_keys", |n, m| n >= m))
                .with_param("min_keys", count),
        )
    }

    #[must_use]
    pub fn max_keys(self, count: usize) -> Self {
        self.push(
            Fragment::new("max_keys", |v, p| key_count(v, p, "max_keys", |n, m| n <= m))
                .with_param("max_keys", count),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use serde_json::json;

    #[test]
    fn guard_admits_plain_mappings_only() {
        let p = crate::object().compile().unwrap();
        assert!(p.accepts(json!({})));
        assert!(!p.accepts(json!(null)));
        assert!(!p.accepts(json!([])));
        assert!(!p.accepts(Value::RegExp("a+".into())));
        assert!(!p.accepts(chrono::Utc::now()));
        assert!(!p.accepts(ErrorValue::new(ErrorClass::Error, "x")));
    }

    #[test]
    fn emptiness() {
        let empty = crate::object().empty().compile().unwrap();
        assert!(empty.accepts(json!({})));
        assert!(!empty.accepts(json!({"a": "1"})));

        let not_empty = crate::object().not_empty().compile().unwrap();
        assert!(not_empty.accepts(json!({"a": "1"})));
        assert!(!not_empty.accepts(json!({})));
    }

    #[test]
    fn key_presence() {
        let p = crate::object()
            .has("test")
            .has("bench")
            .has_not("nope")
            .compile()
            .unwrap();
        assert!(p.accepts(json!({"test": "test42", "bench": 5})));
        assert!(!p.accepts(json!({"test": "test42"})));
        assert!(!p.accepts(json!({"test": 1, "bench": 2, "nope": 3})));
    }

    #[test]
    fn key_counts() {
        let p = crate::object().min_keys(1).max_keys(2).compile().unwrap();
        assert!(p.accepts(json!({"a": 1})));
        assert!(!p.accepts(json!({})));
        assert!(!p.accepts(json!({"a": 1, "b": 2, "c": 3})));
    }
}
