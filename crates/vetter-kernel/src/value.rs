//! Dynamic subject values.
//!
//! Predicates test untyped data received at runtime. `Value` is the closed
//! universe such data lives in: the JSON shapes plus the few host objects a
//! validator is commonly asked about (dates, regular expressions, errors).
//!
//! Values arrive mostly through `From<serde_json::Value>`; no coercion
//! happens on the way in. A JSON string that happens to look like a date is
//! still a string.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// String-keyed, ordered mapping used for objects and parameter bindings.
pub type Map = BTreeMap<String, Value>;

/// The class of an error object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorClass {
    Error,
    RangeError,
    ReferenceError,
    SyntaxError,
    TypeError,
}

impl ErrorClass {
    pub fn name(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::RangeError => "RangeError",
            Self::ReferenceError => "ReferenceError",
            Self::SyntaxError => "SyntaxError",
            Self::TypeError => "TypeError",
        }
    }
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ErrorClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Error" => Ok(Self::Error),
            "RangeError" => Ok(Self::RangeError),
            "ReferenceError" => Ok(Self::ReferenceError),
            "SyntaxError" => Ok(Self::SyntaxError),
            "TypeError" => Ok(Self::TypeError),
            _ => Err(format!("unknown error class: {s}")),
        }
    }
}

/// An error object as a subject: its class and message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorValue {
    pub class: ErrorClass,
    pub message: String,
}

impl ErrorValue {
    pub fn new(class: ErrorClass, message: impl Into<String>) -> Self {
        Self {
            class,
            message: message.into(),
        }
    }
}

/// Coarse classification of a [`Value`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
    Date,
    RegExp,
    Error,
}

/// A dynamically typed subject.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    /// Numbers are IEEE doubles; `NaN` and the infinities are representable.
    Number(f64),
    String(String),
    Array(Vec<Value>),
    Object(Map),
    Date(DateTime<Utc>),
    /// A regular-expression object, carried as its source pattern.
    RegExp(String),
    Error(ErrorValue),
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Bool(_) => ValueKind::Bool,
            Self::Number(_) => ValueKind::Number,
            Self::String(_) => ValueKind::String,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::Date(_) => ValueKind::Date,
            Self::RegExp(_) => ValueKind::RegExp,
            Self::Error(_) => ValueKind::Error,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_error(&self) -> Option<&ErrorValue> {
        match self {
            Self::Error(e) => Some(e),
            _ => None,
        }
    }

    /// Project back into JSON.
    ///
    /// Non-finite numbers become `null`, dates become RFC 3339 strings,
    /// regular expressions become their pattern and errors become
    /// `{"name", "message"}` objects.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;
        match self {
            Self::Null => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Number(n) => serde_json::Number::from_f64(*n)
                .map(Json::Number)
                .unwrap_or(Json::Null),
            Self::String(s) => Json::String(s.clone()),
            Self::Array(items) => Json::Array(items.iter().map(Value::to_json).collect()),
            Self::Object(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), v.to_json()))
                    .collect(),
            ),
            Self::Date(d) => Json::String(d.to_rfc3339()),
            Self::RegExp(pattern) => Json::String(pattern.clone()),
            Self::Error(e) => serde_json::json!({
                "name": e.class.name(),
                "message": e.message,
            }),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Bool => "boolean",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
            Self::Date => "date",
            Self::RegExp => "regexp",
            Self::Error => "error",
        };
        f.write_str(name)
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;
        match json {
            Json::Null => Self::Null,
            Json::Bool(b) => Self::Bool(b),
            Json::Number(n) => Self::Number(n.as_f64().unwrap_or(f64::NAN)),
            Json::String(s) => Self::String(s),
            Json::Array(items) => Self::Array(items.into_iter().map(Value::from).collect()),
            Json::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Self::from(json.clone())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

macro_rules! number_from {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(n: $t) -> Self {
                    Self::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(f32, i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Map> for Value {
    fn from(map: Map) -> Self {
        Self::Object(map)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(d: DateTime<Utc>) -> Self {
        Self::Date(d)
    }
}

impl From<ErrorValue> for Value {
    fn from(e: ErrorValue) -> Self {
        Self::Error(e)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map(Into::into).unwrap_or(Self::Null)
    }
}
