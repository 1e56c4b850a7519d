//! Combinators over compiled predicates.
//!
//! Only disjunction is provided. Conjunction is what a chain already is:
//! put both fragments in one chain before synthesis.

use crate::predicate::CompiledPredicate;
use std::sync::Arc;

/// Short-circuit OR over `predicates`, evaluated in argument order.
///
/// The first branch that accepts the subject wins and later branches are
/// not run. With no branches the result rejects everything; with one it
/// behaves as that branch.
pub fn or<I>(predicates: I) -> CompiledPredicate
where
    I: IntoIterator<Item = CompiledPredicate>,
{
    let branches: Arc<[CompiledPredicate]> = predicates.into_iter().collect();
    let label = format!(
        "or({})",
        branches
            .iter()
            .map(CompiledPredicate::label)
            .collect::<Vec<_>>()
            .join(", ")
    );
    CompiledPredicate::labelled(label, move |subject| {
        branches.iter().any(|branch| branch.test(subject))
    })
}
