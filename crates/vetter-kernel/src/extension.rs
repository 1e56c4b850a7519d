//! Builders and runtime extension.
//!
//! A [`Builder`] names a kind (`"number"`, `"string"`, ...), owns the guard
//! fragment every chain of that kind starts with, and keeps a registry of
//! installed methods. [`extend`] adds to that registry; chains look methods
//! up by name when they are called, so chains created before a registration
//! see it too.
//!
//! Installed methods bind their arguments positionally to the parameter
//! names declared at registration time:
//!
//! ```text
//! extend(number, Extension::new("is50", ["fifty"], check))
//! number().call("is50", [50])  →  Fragment { name: "is50", params: { fifty: 50 } }
//! ```

use crate::chain::Chain;
use crate::error::VetterError;
use crate::fragment::{Check, Fragment, Parameters};
use crate::value::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, warn};

/// A fragment factory installed on a builder.
#[derive(Debug, Clone)]
pub struct Extension {
    name: String,
    parameters: Vec<String>,
    factory: Option<Check>,
}

impl Extension {
    pub fn new<N, F>(name: impl Into<String>, parameters: N, factory: F) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        F: Fn(&Value, &Parameters) -> bool + Send + Sync + 'static,
    {
        Self::raw(name, parameters, Some(Check::new(factory)))
    }

    /// An extension whose factory may be missing; [`extend`] rejects it then.
    pub fn raw<N>(name: impl Into<String>, parameters: N, factory: Option<Check>) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
    {
        Self {
            name: name.into(),
            parameters: parameters.into_iter().map(Into::into).collect(),
            factory,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// Bind `args` to the declared parameter names and build the fragment.
    fn instantiate(&self, builder: &str, args: Vec<Value>) -> Result<Fragment, VetterError> {
        if args.len() != self.parameters.len() {
            return Err(VetterError::ArityMismatch {
                builder: builder.to_string(),
                method: self.name.clone(),
                expected: self.parameters.len(),
                actual: args.len(),
            });
        }

        let binding: Map = self.parameters.iter().cloned().zip(args).collect();
        let mut fragment = Fragment::raw(
            self.name.clone(),
            self.factory.clone(),
            Value::Object(binding),
        );
        for name in &self.parameters {
            fragment = fragment.require(name.clone());
        }
        Ok(fragment)
    }
}

struct BuilderInner {
    kind: String,
    guard: Option<Fragment>,
    extensions: RwLock<BTreeMap<String, Extension>>,
}

/// A handle on one kind's guard and method registry.
///
/// Handles are cheap to clone and all clones share one registry.
#[derive(Clone)]
pub struct Builder {
    inner: Arc<BuilderInner>,
}

impl Builder {
    /// A builder whose chains start empty.
    pub fn new(kind: impl Into<String>) -> Self {
        Self::build(kind.into(), None)
    }

    /// A builder whose chains start with `guard`.
    pub fn with_guard(kind: impl Into<String>, guard: Fragment) -> Self {
        Self::build(kind.into(), Some(guard))
    }

    fn build(kind: String, guard: Option<Fragment>) -> Self {
        Self {
            inner: Arc::new(BuilderInner {
                kind,
                guard,
                extensions: RwLock::new(BTreeMap::new()),
            }),
        }
    }

    pub fn kind(&self) -> &str {
        &self.inner.kind
    }

    /// Start a new chain of this kind.
    pub fn chain(&self) -> Chain {
        let fragments = self.inner.guard.iter().cloned().collect();
        Chain::from_parts(self.clone(), fragments)
    }

    /// Install `extension` as a chain method. See [`extend`].
    pub fn extend(&self, extension: Extension) -> Result<(), VetterError> {
        if extension.factory.is_none() {
            return Err(VetterError::InvalidExtension);
        }
        if extension.name.trim().is_empty() {
            return Err(VetterError::UnnamedExtension);
        }
        let mut seen = BTreeSet::new();
        if let Some(name) = extension.parameters.iter().find(|n| !seen.insert(n.as_str())) {
            return Err(VetterError::DuplicateParameter {
                method: extension.name.clone(),
                name: name.clone(),
            });
        }

        let name = extension.name.clone();
        let arity = extension.parameters.len();
        let replaced = self
            .inner
            .extensions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.clone(), extension)
            .is_some();

        if replaced {
            warn!(
                builder = %self.kind(),
                method = %name,
                "extension replaced an earlier registration"
            );
        } else {
            debug!(builder = %self.kind(), method = %name, arity, "extension registered");
        }
        Ok(())
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.inner
            .extensions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Names of installed methods, sorted.
    pub fn methods(&self) -> Vec<String> {
        self.inner
            .extensions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }

    /// Build the fragment for a call to installed method `name`.
    pub(crate) fn instantiate(
        &self,
        name: &str,
        args: Vec<Value>,
    ) -> Result<Fragment, VetterError> {
        let extension = self
            .inner
            .extensions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
            .ok_or_else(|| VetterError::UnknownMethod {
                builder: self.kind().to_string(),
                method: name.to_string(),
            })?;
        extension.instantiate(self.kind(), args)
    }
}

impl fmt::Debug for Builder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("kind", &self.inner.kind)
            .field("guard", &self.inner.guard.as_ref().map(Fragment::name))
            .field("methods", &self.methods())
            .finish()
    }
}

/// Install `extension` on `builder` as a chainable method.
///
/// Fails with [`VetterError::InvalidExtension`] when the factory is missing,
/// [`VetterError::UnnamedExtension`] when the name is blank and
/// [`VetterError::DuplicateParameter`] when a parameter name repeats. A later
/// registration under the same name replaces the earlier one.
pub fn extend(builder: &Builder, extension: Extension) -> Result<(), VetterError> {
    builder.extend(extension)
}
