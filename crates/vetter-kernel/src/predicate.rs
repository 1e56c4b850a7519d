//! Compiled predicates.

use crate::value::Value;
use std::fmt;
use std::sync::Arc;

/// An opaque, pure `subject -> bool` test.
///
/// Cloning is cheap and clones share the same underlying function. A
/// predicate holds no reference to the chain it was synthesized from.
#[derive(Clone)]
pub struct CompiledPredicate {
    eval: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
    label: Arc<str>,
}

impl CompiledPredicate {
    pub(crate) fn labelled<F>(label: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            eval: Arc::new(f),
            label: label.into(),
        }
    }

    /// Wrap a hand-written test so it composes with synthesized ones.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::labelled("fn", f)
    }

    #[inline]
    pub fn test(&self, subject: &Value) -> bool {
        (self.eval)(subject)
    }

    /// Convenience over [`test`](Self::test) for owned or JSON subjects.
    pub fn accepts(&self, subject: impl Into<Value>) -> bool {
        self.test(&subject.into())
    }

    /// Short-circuit OR of `self` and `other`.
    pub fn or(&self, other: &CompiledPredicate) -> CompiledPredicate {
        crate::combinator::or([self.clone(), other.clone()])
    }

    /// Short description of how the predicate was built.
    pub fn label(&self) -> &str {
        &self.label
    }
}

impl fmt::Debug for CompiledPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CompiledPredicate")
            .field(&self.label)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_callable_and_clonable() {
        let even = CompiledPredicate::from_fn(|v| v.as_f64().is_some_and(|n| n % 2.0 == 0.0));
        let copy = even.clone();
        assert!(even.accepts(4));
        assert!(!copy.accepts(3));
        assert!(!copy.accepts("4"));
        assert_eq!(format!("{even:?}"), "CompiledPredicate(\"fn\")");
    }

    #[test]
    fn predicates_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CompiledPredicate>();
    }
}
