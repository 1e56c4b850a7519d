//! Chains: ordered fragment accumulations under construction.
//!
//! The fluent API consumes and returns the chain, so one owner builds it
//! up linearly. Compiling borrows it: the predicate snapshots the current
//! fragments and the chain stays usable, so appending more fragments and
//! compiling again yields a predicate over the larger set.

use crate::error::VetterError;
use crate::extension::Builder;
use crate::fragment::Fragment;
use crate::predicate::CompiledPredicate;
use crate::synthesis::compile;
use crate::value::Value;
use tracing::trace;

#[derive(Debug, Clone)]
pub struct Chain {
    builder: Builder,
    fragments: Vec<Fragment>,
}

impl Chain {
    pub(crate) fn from_parts(builder: Builder, fragments: Vec<Fragment>) -> Self {
        Self { builder, fragments }
    }

    /// Append one fragment.
    #[must_use]
    pub fn push(mut self, fragment: Fragment) -> Self {
        self.push_mut(fragment);
        self
    }

    pub fn push_mut(&mut self, fragment: Fragment) {
        trace!(
            builder = %self.builder.kind(),
            fragment = %fragment.name(),
            position = self.fragments.len(),
            "fragment appended"
        );
        self.fragments.push(fragment);
    }

    /// Invoke a method installed on this chain's builder with `extend`.
    pub fn call<I>(mut self, method: &str, args: I) -> Result<Self, VetterError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let args = args.into_iter().map(Into::into).collect();
        let fragment = self.builder.instantiate(method, args)?;
        self.push_mut(fragment);
        Ok(self)
    }

    /// Synthesize a predicate over the fragments appended so far.
    pub fn compile(&self) -> Result<CompiledPredicate, VetterError> {
        compile(Some(self.fragments.as_slice()))
    }

    pub fn builder(&self) -> &Builder {
        &self.builder
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}
