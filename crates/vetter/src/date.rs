//! Date catalog.

use crate::chained::{Chained, typed_chain};
use chrono::{DateTime, Utc};
use vetter_kernel::{Fragment, Parameters, Value};

typed_chain!(
    /// A chain over dates, started by [`crate::date()`].
    DateChain
);

pub(crate) fn guard() -> Fragment {
    Fragment::new("date", |v, _| matches!(v, Value::Date(_)))
}

fn against(
    v: &Value,
    p: &Parameters,
    name: &str,
    cmp: fn(&DateTime<Utc>, &DateTime<Utc>) -> bool,
) -> bool {
    match (v.as_date(), p.get(name).and_then(Value::as_date)) {
        (Some(subject), Some(bound)) => cmp(subject, bound),
        _ => false,
    }
}

impl DateChain {
    /// Strictly before `bound`.
    #[must_use]
    pub fn lower(self, bound: DateTime<Utc>) -> Self {
        self.push(
            Fragment::new("lower", |v, p| against(v, p, "lower", |d, b| d < b))
                .with_param("lower", bound),
        )
    }

    /// Strictly after `bound`.
    #[must_use]
    pub fn higher(self, bound: DateTime<Utc>) -> Self {
        self.push(
            Fragment::new("higher", |v, p| against(v, p, "higher", |d, b| d > b))
                .with_param("higher", bound),
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn window() {
        let start = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap();
        let p = crate::date().higher(start).lower(end).compile().unwrap();

        let mid = Utc.with_ymd_and_hms(2020, 6, 1, 12, 0, 0).unwrap();
        assert!(p.accepts(mid));
        assert!(!p.accepts(start));
        assert!(!p.accepts(end));
        assert!(!p.accepts("2020-06-01T12:00:00Z"));
    }
}
