//! Array catalog.

use crate::chained::{Chained, typed_chain};
use vetter_kernel::{Fragment, Parameters, Value};

typed_chain!(
    /// A chain over arrays, started by [`crate::array()`].
    ArrayChain
);

pub(crate) fn guard() -> Fragment {
    Fragment::new("array", |v, _| matches!(v, Value::Array(_)))
}

fn item_count(v: &Value, p: &Parameters, name: &str, cmp: fn(f64, f64) -> bool) -> bool {
    match (v.as_array(), p.number(name)) {
        (Some(items), Some(bound)) => cmp(items.len() as f64, bound),
        _ => false,
    }
}

impl ArrayChain {
    /// At least `len` elements.
    #[must_use]
    pub fn min(self, len: usize) -> Self {
        self.push(
            Fragment::new("min", |v, p| item_count(v, p, "min", |n, m| n >= m))
                .with_param("min", len),
        )
    }

    /// At most `len` elements.
    #[must_use]
    pub fn max(self, len: usize) -> Self {
        self.push(
            Fragment::new("max", |v, p| item_count(v, p, "max", |n, m| n <= m))
                .with_param("max", len),
        )
    }

    /// Exactly `len` elements.
    #[must_use]
    pub fn length(self, len: usize) -> Self {
        self.push(
            Fragment::new("length", |v, p| item_count(v, p, "length", |n, m| n == m))
                .with_param("length", len),
        )
    }

    /// Some element equals `item`.
    #[must_use]
    pub fn contains(self, item: impl Into<Value>) -> Self {
        self.push(
            Fragment::new("contains", |v, p| {
                match (v.as_array(), p.get("item")) {
                    (Some(items), Some(item)) => items.contains(item),
                    _ => false,
                }
            })
            .with_param("item", item),
        )
    }

    /// No two elements are equal.
    #[must_use]
    pub fn unique(self) -> Self {
        self.push(Fragment::new("unique", |v, _| {
            v.as_array().is_some_and(|items| {
                items
                    .iter()
                    .enumerate()
                    .all(|(i, item)| !items[i + 1..].contains(item))
            })
        }))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use serde_json::json;

    #[test]
    fn guard_rejects_non_arrays() {
        let p = crate::array().compile().unwrap();
        assert!(p.accepts(json!([])));
        assert!(!p.accepts("test"));
        assert!(!p.accepts(json!({})));
    }

    #[test]
    fn bounds_on_length() {
        let max = crate::array().max(10).compile().unwrap();
        assert!(max.accepts(json!([1, 2, 3])));
        assert!(!max.accepts(json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11])));

        let min = crate::array().min(3).compile().unwrap();
        assert!(min.accepts(json!([1, 2, 3, 4])));
        assert!(!min.accepts(json!([])));

        let len = crate::array().length(3).compile().unwrap();
        assert!(len.accepts(json!([1, 2, 3])));
        assert!(!len.accepts(json!([1, 2])));
    }

    #[test]
    fn contains_structured_item() {
        let p = crate::array().contains(json!({"id": 2})).compile().unwrap();
        assert!(p.accepts(json!([{"id": 1}, {"id": 2}])));
        assert!(!p.accepts(json!([{"id": 1}])));
    }

    #[test]
    fn unique_elements() {
        let p = crate::array().unique().compile().unwrap();
        assert!(p.accepts(json!([1, "1", [1]])));
        assert!(!p.accepts(json!([1, 2, 1])));
        assert!(p.accepts(json!([])));
    }
}
