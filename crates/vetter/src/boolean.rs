//! Boolean catalog.

use crate::chained::{Chained, typed_chain};
use vetter_kernel::{Fragment, Value};

typed_chain!(
    /// A chain over booleans, started by [`crate::boolean()`].
    BooleanChain
);

pub(crate) fn guard() -> Fragment {
    Fragment::new("boolean", |v, _| matches!(v, Value::Bool(_)))
}

impl BooleanChain {
    /// Subject is exactly `expected`.
    #[must_use]
    pub fn is(self, expected: bool) -> Self {
        self.push(
            Fragment::new("is", |v, p| {
                v.as_bool().is_some() && v.as_bool() == p.bool("expected")
            })
            .with_param("expected", expected),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn guard_and_is() {
        let any = crate::boolean().compile().unwrap();
        assert!(any.accepts(true));
        assert!(any.accepts(false));
        assert!(!any.accepts(0));
        assert!(!any.accepts("true"));

        let only_true = crate::boolean().is(true).compile().unwrap();
        assert!(only_true.accepts(true));
        assert!(!only_true.accepts(false));
    }
}
