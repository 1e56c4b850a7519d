//! Number catalog.

use crate::chained::{Chained, typed_chain};
use vetter_kernel::{Fragment, Parameters, Value};

/// Largest integer an IEEE double represents exactly, `2^53 - 1`.
pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Argument types accepted by [`NumberChain::min`], [`NumberChain::max`]
/// and [`NumberChain::multiple`]: every primitive integer and float.
///
/// Bounds are compared as doubles, so 64-bit integers past `2^53` round to
/// the nearest representable value.
pub trait NumberArg: Copy {
    fn to_f64(self) -> f64;
}

macro_rules! number_arg {
    ($($t:ty),*) => {
        $(
            impl NumberArg for $t {
                fn to_f64(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

number_arg!(f32, f64, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

typed_chain!(
    /// A chain over numbers, started by [`crate::number()`].
    NumberChain
);

pub(crate) fn guard() -> Fragment {
    Fragment::new("number", |v, _| matches!(v, Value::Number(_)))
}

/// Compare the subject against the bound parameter `name`.
fn bounded(v: &Value, p: &Parameters, name: &str, cmp: fn(f64, f64) -> bool) -> bool {
    match (v.as_f64(), p.number(name)) {
        (Some(x), Some(bound)) => cmp(x, bound),
        _ => false,
    }
}

/// Test the subject alone.
fn unary(name: &str, test: fn(f64) -> bool) -> Fragment {
    Fragment::new(name, move |v, _| v.as_f64().is_some_and(test))
}

fn is_integer(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0
}

impl NumberChain {
    /// Subject is at least `min`.
    #[must_use]
    pub fn min(self, min: impl NumberArg) -> Self {
        self.push(
            Fragment::new("min", |v, p| bounded(v, p, "min", |x, m| x >= m))
                .with_param("min", min.to_f64()),
        )
    }

    /// Subject is at most `max`.
    #[must_use]
    pub fn max(self, max: impl NumberArg) -> Self {
        self.push(
            Fragment::new("max", |v, p| bounded(v, p, "max", |x, m| x <= m))
                .with_param("max", max.to_f64()),
        )
    }

    /// Subject is a multiple of `divisor`. A zero divisor rejects everything.
    #[must_use]
    pub fn multiple(self, divisor: impl NumberArg) -> Self {
        self.push(
            Fragment::new("multiple", |v, p| {
                bounded(v, p, "multiple", |x, d| x % d == 0.0)
            })
            .with_param("multiple", divisor.to_f64()),
        )
    }

    #[must_use]
    pub fn positive(self) -> Self {
        self.push(unary("positive", |x| x > 0.0))
    }

    #[must_use]
    pub fn negative(self) -> Self {
        self.push(unary("negative", |x| x < 0.0))
    }

    #[must_use]
    pub fn integer(self) -> Self {
        self.push(unary("integer", is_integer))
    }

    /// Finite and not an integer.
    #[must_use]
    pub fn float(self) -> Self {
        self.push(unary("float", |x| x.is_finite() && !is_integer(x)))
    }

    /// An integer within `±(2^53 - 1)`.
    #[must_use]
    pub fn safe_integer(self) -> Self {
        self.push(unary("safe_integer", |x| {
            is_integer(x) && x.abs() <= MAX_SAFE_INTEGER
        }))
    }

    #[must_use]
    pub fn finite(self) -> Self {
        self.push(unary("finite", f64::is_finite))
    }

    #[must_use]
    pub fn not_nan(self) -> Self {
        self.push(unary("not_nan", |x| !x.is_nan()))
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn guard_only() {
        let p = crate::number().compile().unwrap();
        assert!(p.accepts(1));
        assert!(p.accepts(f64::NAN));
        assert!(!p.accepts("1"));
        assert!(!p.accepts(Value::Null));
    }

    #[test]
    fn min_and_max() {
        let p = crate::number().min(-5).max(10).compile().unwrap();
        assert!(p.accepts(-5));
        assert!(p.accepts(10));
        assert!(!p.accepts(-5.5));
        assert!(!p.accepts(11));
    }

    #[test]
    fn integer_float_and_safe_integer() {
        let int = crate::number().integer().compile().unwrap();
        assert!(int.accepts(3));
        assert!(!int.accepts(3.5));
        assert!(!int.accepts(f64::INFINITY));

        let float = crate::number().float().compile().unwrap();
        assert!(float.accepts(3.5));
        assert!(!float.accepts(3));

        let safe = crate::number().safe_integer().compile().unwrap();
        assert!(safe.accepts(super::MAX_SAFE_INTEGER));
        assert!(!safe.accepts(super::MAX_SAFE_INTEGER + 2.0));
    }

    #[test]
    fn sign_and_finiteness() {
        let pos = crate::number().positive().compile().unwrap();
        assert!(pos.accepts(0.1));
        assert!(!pos.accepts(0));
        let neg = crate::number().negative().compile().unwrap();
        assert!(neg.accepts(-1));
        assert!(!neg.accepts(0));

        let finite = crate::number().finite().compile().unwrap();
        assert!(!finite.accepts(f64::NEG_INFINITY));
        let not_nan = crate::number().not_nan().compile().unwrap();
        assert!(!not_nan.accepts(f64::NAN));
        assert!(not_nan.accepts(f64::INFINITY));
    }

    #[test]
    fn multiple_of() {
        let p = crate::number().multiple(3).compile().unwrap();
        assert!(p.accepts(9));
        assert!(p.accepts(0));
        assert!(!p.accepts(10));
        let zero = crate::number().multiple(0).compile().unwrap();
        assert!(!zero.accepts(0));
    }

    #[test]
    fn wide_integer_arguments() {
        let p = crate::number()
            .min(i64::from(-5))
            .max(10u64)
            .multiple(5usize)
            .compile()
            .unwrap();
        assert!(p.accepts(-5));
        assert!(p.accepts(10));
        assert!(!p.accepts(15));
        assert!(!p.accepts(3));

        let huge = crate::number().max(u64::MAX).compile().unwrap();
        assert!(huge.accepts(super::MAX_SAFE_INTEGER));
    }

    #[test]
    fn parameters_are_bound_by_name() {
        let chain = crate::number().min(2).max(4);
        let names: Vec<_> = chain.chain().fragments().iter().map(|f| f.name()).collect();
        assert_eq!(names, ["number", "min", "max"]);
        let min = chain.chain().fragments()[1].parameters().as_object().unwrap();
        assert_eq!(min["min"], Value::Number(2.0));
    }
}
