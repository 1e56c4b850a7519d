//! # Vetter Kernel
//!
//! Merge an ordered chain of independently authored constraint fragments
//! into one reusable predicate, and compose such predicates.
//!
//! This crate is **kind-agnostic**: it does not prescribe which checks
//! exist (that is the catalog's job). It only prescribes how fragments bind
//! their parameters, how a chain is synthesized, and how builders grow new
//! methods at runtime.
//!
//! ## Architecture
//!
//! ```text
//! Value                 ← Dynamic subject (JSON shapes + date/regexp/error)
//!     │
//! Fragment              ← Check + parameter binding
//!     │
//! Chain                 ← Ordered fragments, seeded by a Builder's guard
//!     │
//! compile               ← Validate, bind, snapshot → CompiledPredicate
//!     │
//! or                    ← Short-circuit disjunction of predicates
//! ```
//!
//! [`extend`] installs new chain methods on a [`Builder`] at runtime.

pub mod chain;
pub mod combinator;
pub mod error;
pub mod extension;
pub mod fragment;
pub mod predicate;
pub mod synthesis;
pub mod value;

pub use chain::Chain;
pub use combinator::or;
pub use error::{ErrorKind, Stage, VetterError};
pub use extension::{Builder, Extension, extend};
pub use fragment::{Check, Fragment, Parameters};
pub use predicate::CompiledPredicate;
pub use synthesis::compile;
pub use value::{ErrorClass, ErrorValue, Map, Value, ValueKind};
