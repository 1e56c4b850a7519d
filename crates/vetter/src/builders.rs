//! Process-wide builders, one per kind.
//!
//! These are the handles to pass to [`extend`](vetter_kernel::extend).
//! Every chain returned by [`crate::number()`] and friends is created from
//! the corresponding builder here, so methods installed on it are callable
//! from any chain of that kind.

use std::sync::OnceLock;
use tracing::debug;
use vetter_kernel::{Builder, Fragment};

fn init(kind: &'static str, guard: fn() -> Fragment) -> Builder {
    debug!(builder = kind, "builder initialized");
    Builder::with_guard(kind, guard())
}

macro_rules! builder {
    ($(#[$meta:meta])* $fn_name:ident, $kind:literal, $guard:path) => {
        $(#[$meta])*
        pub fn $fn_name() -> &'static Builder {
            static BUILDER: OnceLock<Builder> = OnceLock::new();
            BUILDER.get_or_init(|| init($kind, $guard))
        }
    };
}

builder!(
    /// Builder for chains guarded by "is a number".
    number, "number", crate::number::guard
);
builder!(
    /// Builder for chains guarded by "is a string".
    string, "string", crate::string::guard
);
builder!(
    /// Builder for chains guarded by "is an array".
    array, "array", crate::array::guard
);
builder!(
    /// Builder for chains guarded by "is a boolean".
    boolean, "boolean", crate::boolean::guard
);
builder!(
    /// Builder for chains guarded by "is a date".
    date, "date", crate::date::guard
);
builder!(
    /// Builder for chains guarded by "is a plain mapping".
    object, "object", crate::object::guard
);
builder!(
    /// Builder for chains guarded by "is an error object".
    error, "error", crate::error::guard
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builders_are_singletons() {
        assert!(std::ptr::eq(number(), number()));
        assert_eq!(number().kind(), "number");
        assert_eq!(error().kind(), "error");
    }

    #[test]
    fn chains_start_with_the_guard() {
        for (builder, guard) in [
            (number(), "number"),
            (string(), "string"),
            (array(), "array"),
            (boolean(), "boolean"),
            (date(), "date"),
            (object(), "object"),
            (error(), "error"),
        ] {
            let chain = builder.chain();
            assert_eq!(chain.len(), 1);
            assert_eq!(chain.fragments()[0].name(), guard);
        }
    }
}
