//! Synthesis: merge an ordered fragment sequence into one predicate.
//!
//! Synthesis validates every fragment, binds its parameters, and snapshots
//! the bound sequence into a shared immutable slice. The predicate it
//! returns folds over that slice:
//!
//! ```text
//! errors = 0
//! for (check, params) in bound:      ← chain order, no short-circuit
//!     if !check(value, params): errors += 1
//! return errors == 0
//! ```
//!
//! `value` and `errors` live in the predicate's call frame, so concurrent
//! invocations share nothing.

use crate::error::VetterError;
use crate::fragment::{Check, Fragment, Parameters};
use crate::predicate::CompiledPredicate;
use crate::value::Value;
use std::sync::Arc;
use tracing::debug;

/// A fragment that passed validation.
#[derive(Debug, Clone)]
struct BoundFragment {
    check: Check,
    parameters: Parameters,
}

/// Merge `fragments` into one compiled predicate.
///
/// Validation runs in order and stops at the first failure:
/// 1. the sequence must be present ([`VetterError::InvalidFragmentList`]);
/// 2. each fragment must carry a check ([`VetterError::InvalidCheck`]);
/// 3. each fragment's parameters must be a mapping
///    ([`VetterError::InvalidParameters`]);
/// 4. each parameter the fragment requires must be bound
///    ([`VetterError::UnresolvedParameter`]).
///
/// An empty sequence yields a predicate that accepts everything.
pub fn compile(fragments: Option<&[Fragment]>) -> Result<CompiledPredicate, VetterError> {
    let fragments = fragments.ok_or(VetterError::InvalidFragmentList)?;

    let bound = fragments
        .iter()
        .enumerate()
        .map(|(index, fragment)| bind(index, fragment))
        .collect::<Result<Vec<_>, _>>()?;

    let label = synthesis_label(fragments);
    debug!(fragments = bound.len(), %label, "synthesized predicate");

    let bound: Arc<[BoundFragment]> = bound.into();
    Ok(CompiledPredicate::labelled(label, move |subject: &Value| {
        let errors = bound
            .iter()
            .filter(|f| !f.check.call(subject, &f.parameters))
            .count();
        errors == 0
    }))
}

fn bind(index: usize, fragment: &Fragment) -> Result<BoundFragment, VetterError> {
    let check = fragment
        .check()
        .cloned()
        .ok_or(VetterError::InvalidCheck { index })?;

    let Value::Object(map) = fragment.parameters() else {
        return Err(VetterError::InvalidParameters { index });
    };

    if let Some(missing) = fragment.requires().iter().find(|n| !map.contains_key(*n)) {
        return Err(VetterError::UnresolvedParameter {
            fragment: fragment.name().to_string(),
            name: missing.clone(),
        });
    }

    Ok(BoundFragment {
        check,
        parameters: Parameters::from(map.clone()),
    })
}

fn synthesis_label(fragments: &[Fragment]) -> String {
    let names: Vec<&str> = fragments.iter().map(Fragment::name).collect();
    format!("compiled[{}]", names.join(", "))
}
