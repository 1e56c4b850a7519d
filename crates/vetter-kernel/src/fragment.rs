//! Fragments: one check plus the parameters bound when it was selected.
//!
//! A fragment never reads anything but its subject and its own parameter
//! binding. Checks receive the binding as an explicit argument, so the same
//! check can be shared by many fragments with different parameters.

use crate::value::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A boolean-producing test over a subject and a parameter binding.
///
/// Checks must be total: a subject of the wrong shape is a `false`, never a
/// panic.
#[derive(Clone)]
pub struct Check(Arc<dyn Fn(&Value, &Parameters) -> bool + Send + Sync>);

impl Check {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Value, &Parameters) -> bool + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// A check that ignores its parameters.
    pub fn unary<F>(f: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self::new(move |subject, _| f(subject))
    }

    #[inline]
    pub fn call(&self, subject: &Value, parameters: &Parameters) -> bool {
        (self.0)(subject, parameters)
    }
}

impl fmt::Debug for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Check(..)")
    }
}

/// A validated, read-only parameter binding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters(Map);

impl Parameters {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    pub fn string(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        self.get(name).and_then(Value::as_bool)
    }
}

impl From<Map> for Parameters {
    fn from(map: Map) -> Self {
        Self(map)
    }
}

/// One constraint in a chain.
///
/// Built through [`Fragment::new`] + [`Fragment::with_param`] by catalogs,
/// or through [`Fragment::raw`] by hosts assembling fragments from loosely
/// typed parts. Either way nothing is validated until synthesis.
#[derive(Debug, Clone)]
pub struct Fragment {
    name: String,
    check: Option<Check>,
    parameters: Value,
    requires: Vec<String>,
}

impl Fragment {
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value, &Parameters) -> bool + Send + Sync + 'static,
    {
        Self::from_check(name, Check::new(check))
    }

    pub fn from_check(name: impl Into<String>, check: Check) -> Self {
        Self {
            name: name.into(),
            check: Some(check),
            parameters: Value::Object(Map::new()),
            requires: Vec::new(),
        }
    }

    /// A fragment whose check and parameters have not been vetted yet.
    pub fn raw(name: impl Into<String>, check: Option<Check>, parameters: Value) -> Self {
        Self {
            name: name.into(),
            check,
            parameters,
            requires: Vec::new(),
        }
    }

    /// Bind `name = value` and record `name` as required by the check.
    ///
    /// If the parameters are not a mapping the binding is left untouched and
    /// synthesis reports it.
    #[must_use]
    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let name = name.into();
        if let Value::Object(map) = &mut self.parameters {
            map.insert(name.clone(), value.into());
        }
        self.require(name)
    }

    /// Declare a parameter the check reads without binding it.
    #[must_use]
    pub fn require(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !self.requires.contains(&name) {
            self.requires.push(name);
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn check(&self) -> Option<&Check> {
        self.check.as_ref()
    }

    pub fn parameters(&self) -> &Value {
        &self.parameters
    }

    pub fn requires(&self) -> &[String] {
        &self.requires
    }
}
