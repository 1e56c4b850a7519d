//! # vetter
//!
//! Fluent per-kind catalogs over the Vetter kernel.
//!
//! Each factory returns a chain seeded with its kind's guard. Every method
//! appends one fragment, and `compile` merges them into a single predicate:
//!
//! ```
//! use vetter::prelude::*;
//!
//! let port = vetter::number().integer().min(1).max(65_535).compile()?;
//! assert!(port.accepts(8080));
//! assert!(!port.accepts(0));
//!
//! let either = vetter::or([port, vetter::string().min(1).compile()?]);
//! assert!(either.accepts("localhost"));
//! # Ok::<(), vetter::VetterError>(())
//! ```
//!
//! Kinds grow new methods at runtime through their [`builders`]:
//!
//! ```
//! use vetter::prelude::*;
//!
//! vetter::extend(
//!     vetter::builders::number(),
//!     Extension::new("is50", ["fifty"], |v, p| {
//!         v.as_f64().is_some() && v.as_f64() == p.number("fifty")
//!     }),
//! )?;
//! let p = vetter::number().call("is50", [50])?.compile()?;
//! assert!(p.accepts(50));
//! # Ok::<(), vetter::VetterError>(())
//! ```

pub mod array;
pub mod boolean;
pub mod builders;
pub mod chained;
pub mod date;
pub mod error;
pub mod number;
pub mod object;
pub mod string;

pub use array::ArrayChain;
pub use boolean::BooleanChain;
pub use chained::Chained;
pub use date::DateChain;
pub use error::ErrorChain;
pub use number::{NumberArg, NumberChain};
pub use object::ObjectChain;
pub use string::StringChain;

pub use vetter_kernel::{
    Builder, Chain, Check, CompiledPredicate, ErrorClass, ErrorKind, ErrorValue, Extension,
    Fragment, Map, Parameters, Stage, Value, ValueKind, VetterError, compile, extend, or,
};

/// Start a number chain. The guard admits any number, `NaN` included.
///
/// ```
/// use vetter::prelude::*;
///
/// let p = vetter::number().compile()?;
/// assert!(p.accepts(f64::NAN));
/// assert!(!p.accepts("1"));
/// # Ok::<(), vetter::VetterError>(())
/// ```
pub fn number() -> NumberChain {
    NumberChain::from_chain(builders::number().chain())
}

/// Start a string chain.
pub fn string() -> StringChain {
    StringChain::from_chain(builders::string().chain())
}

/// Start an array chain.
pub fn array() -> ArrayChain {
    ArrayChain::from_chain(builders::array().chain())
}

/// Start a boolean chain.
pub fn boolean() -> BooleanChain {
    BooleanChain::from_chain(builders::boolean().chain())
}

/// Start a date chain over `DateTime<Utc>` subjects.
pub fn date() -> DateChain {
    DateChain::from_chain(builders::date().chain())
}

/// Start a chain over plain mappings. See [`object`](mod@object) for what
/// the guard rejects.
pub fn object() -> ObjectChain {
    ObjectChain::from_chain(builders::object().chain())
}

/// Start a chain over error objects.
pub fn error() -> ErrorChain {
    ErrorChain::from_chain(builders::error().chain())
}

/// Glob-import for chain methods and the types they take.
pub mod prelude {
    pub use crate::chained::Chained;
    pub use vetter_kernel::{
        CompiledPredicate, ErrorClass, ErrorKind, ErrorValue, Extension, Fragment, Parameters,
        Value, ValueKind, VetterError,
    };
}
