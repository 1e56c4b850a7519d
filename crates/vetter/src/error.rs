//! Error-object catalog.

use crate::chained::{Chained, typed_chain};
use vetter_kernel::{ErrorClass, Fragment, Value};

typed_chain!(
    /// A chain over error objects, started by [`crate::error()`].
    ErrorChain
);

pub(crate) fn guard() -> Fragment {
    Fragment::new("error", |v, _| matches!(v, Value::Error(_)))
}

impl ErrorChain {
    /// The error's class is `class`.
    #[must_use]
    pub fn class(self, class: ErrorClass) -> Self {
        self.push(
            Fragment::new("class", |v, p| {
                matches!(
                    (v.as_error(), p.string("class")),
                    (Some(e), Some(class)) if e.class.name() == class
                )
            })
            .with_param("class", class.name()),
        )
    }

    #[must_use]
    pub fn range_error(self) -> Self {
        self.class(ErrorClass::RangeError)
    }

    #[must_use]
    pub fn reference_error(self) -> Self {
        self.class(ErrorClass::ReferenceError)
    }

    #[must_use]
    pub fn syntax_error(self) -> Self {
        self.class(ErrorClass::SyntaxError)
    }

    #[must_use]
    pub fn type_error(self) -> Self {
        self.class(ErrorClass::TypeError)
    }

    /// The error's message is exactly `message`.
    #[must_use]
    pub fn message(self, message: &str) -> Self {
        self.push(
            Fragment::new("message", |v, p| {
                matches!(
                    (v.as_error(), p.string("message")),
                    (Some(e), Some(expected)) if e.message == expected
                )
            })
            .with_param("message", message),
        )
    }
}
