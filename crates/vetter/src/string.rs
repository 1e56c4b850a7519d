//! String catalog.
//!
//! Lengths count Unicode scalar values, not bytes.

use crate::chained::{Chained, typed_chain};
use regex::Regex;
use std::net::{Ipv4Addr, Ipv6Addr};
use std::sync::OnceLock;
use vetter_kernel::{Fragment, Parameters, Value, VetterError};

typed_chain!(
    /// A chain over strings, started by [`crate::string()`].
    StringChain
);

/// Mixed ASCII letters and digits, starting with a run of one followed by a
/// run of the other.
///
/// Both letter cases are spelled out: `(?i)` would also fold the Kelvin sign
/// (U+212A) and long s (U+017F) into `[a-z]`.
pub const ALPHANUM_PATTERN: &str =
    r"((^[0-9]+[A-Za-z]+)|(^[A-Za-z]+[0-9]+))+[0-9A-Za-z]+$";

fn alphanum_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(ALPHANUM_PATTERN).expect("alphanum regex must compile"))
}

fn alpha_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-zA-Z]+$").expect("alpha regex must compile"))
}

fn numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9]+$").expect("numeric regex must compile"))
}

fn hex_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[0-9a-fA-F]+$").expect("hex regex must compile"))
}

fn base64_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:[A-Za-z0-9+/]{4})*(?:[A-Za-z0-9+/]{2}==|[A-Za-z0-9+/]{3}=)?$")
            .expect("base64 regex must compile")
    })
}

pub(crate) fn guard() -> Fragment {
    Fragment::new("string", |v, _| matches!(v, Value::String(_)))
}

fn char_len(v: &Value, p: &Parameters, name: &str, cmp: fn(f64, f64) -> bool) -> bool {
    match (v.as_str(), p.number(name)) {
        (Some(s), Some(bound)) => cmp(s.chars().count() as f64, bound),
        _ => false,
    }
}

fn matching(name: &str, re: fn() -> &'static Regex) -> Fragment {
    Fragment::new(name, move |v, _| v.as_str().is_some_and(|s| re().is_match(s)))
}

fn unary(name: &str, test: fn(&str) -> bool) -> Fragment {
    Fragment::new(name, move |v, _| v.as_str().is_some_and(test))
}

impl StringChain {
    /// At least `len` characters.
    #[must_use]
    pub fn min(self, len: usize) -> Self {
        self.push(
            Fragment::new("min", |v, p| char_len(v, p, "min", |n, m| n >= m))
                .with_param("min", len),
        )
    }

    /// At most `len` characters.
    #[must_use]
    pub fn max(self, len: usize) -> Self {
        self.push(
            Fragment::new("max", |v, p| char_len(v, p, "max", |n, m| n <= m))
                .with_param("max", len),
        )
    }

    /// Exactly `len` characters.
    #[must_use]
    pub fn length(self, len: usize) -> Self {
        self.push(
            Fragment::new("length", |v, p| char_len(v, p, "length", |n, m| n == m))
                .with_param("length", len),
        )
    }

    /// Letters and digits mixed, see [`ALPHANUM_PATTERN`].
    #[must_use]
    pub fn alphanum(self) -> Self {
        self.push(matching("alphanum", alphanum_re))
    }

    /// Matches `pattern` anywhere in the subject.
    ///
    /// The pattern compiles once, here; a malformed one is rejected with
    /// [`VetterError::InvalidArgument`].
    pub fn regex(self, pattern: &str) -> Result<Self, VetterError> {
        let re = Regex::new(pattern).map_err(|e| VetterError::InvalidArgument {
            method: "string.regex".to_string(),
            reason: e.to_string(),
        })?;
        Ok(self.push(
            Fragment::new("regex", move |v, _| v.as_str().is_some_and(|s| re.is_match(s)))
                .with_param("pattern", pattern),
        ))
    }

    /// ASCII letters only.
    #[must_use]
    pub fn alpha(self) -> Self {
        self.push(matching("alpha", alpha_re))
    }

    /// ASCII digits only.
    #[must_use]
    pub fn numeric(self) -> Self {
        self.push(matching("numeric", numeric_re))
    }

    #[must_use]
    pub fn lowercase(self) -> Self {
        self.push(unary("lowercase", |s| s == s.to_lowercase()))
    }

    #[must_use]
    pub fn uppercase(self) -> Self {
        self.push(unary("uppercase", |s| s == s.to_uppercase()))
    }

    #[must_use]
    pub fn hex(self) -> Self {
        self.push(matching("hex", hex_re))
    }

    /// Padded standard base64. The empty string is accepted.
    #[must_use]
    pub fn base64(self) -> Self {
        self.push(matching("base64", base64_re))
    }

    #[must_use]
    pub fn ipv4(self) -> Self {
        self.push(unary("ipv4", |s| s.parse::<Ipv4Addr>().is_ok()))
    }

    #[must_use]
    pub fn ipv6(self) -> Self {
        self.push(unary("ipv6", |s| s.parse::<Ipv6Addr>().is_ok()))
    }

    /// The subject parses as a JSON document.
    #[must_use]
    pub fn json(self) -> Self {
        self.push(unary("json", |s| {
            serde_json::from_str::<serde_json::Value>(s).is_ok()
        }))
    }
}
