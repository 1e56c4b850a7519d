//! Typed chains: one wrapper per kind around a kernel [`Chain`].
//!
//! Each kind gets its own wrapper so that `number().min(5)` and
//! `string().min(5)` resolve to different fragments. The shared surface
//! (extension calls, synthesis, raw appends) lives in [`Chained`].

use vetter_kernel::{Chain, CompiledPredicate, Fragment, Value, VetterError};

/// Operations every typed chain supports.
pub trait Chained: Sized {
    fn chain(&self) -> &Chain;

    fn into_chain(self) -> Chain;

    fn from_chain(chain: Chain) -> Self;

    /// Append a fragment built outside the catalog.
    #[must_use]
    fn push(self, fragment: Fragment) -> Self {
        Self::from_chain(self.into_chain().push(fragment))
    }

    /// Invoke a method installed on this kind's builder with `extend`.
    fn call<I>(self, method: &str, args: I) -> Result<Self, VetterError>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.into_chain().call(method, args).map(Self::from_chain)
    }

    /// Synthesize the chain into one predicate.
    fn compile(&self) -> Result<CompiledPredicate, VetterError> {
        self.chain().compile()
    }
}

macro_rules! typed_chain {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name(vetter_kernel::Chain);

        impl $crate::chained::Chained for $name {
            fn chain(&self) -> &vetter_kernel::Chain {
                &self.0
            }

            fn into_chain(self) -> vetter_kernel::Chain {
                self.0
            }

            fn from_chain(chain: vetter_kernel::Chain) -> Self {
                Self(chain)
            }
        }
    };
}

pub(crate) use typed_chain;
