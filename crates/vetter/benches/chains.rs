//! Synthesized predicates against the equivalent hand-written closures.

use criterion::{Criterion, criterion_group, criterion_main};
use regex::Regex;
use serde_json::json;
use std::hint::black_box;
use vetter::prelude::*;

fn number_handwritten(v: &Value) -> bool {
    v.as_f64().is_some_and(|n| {
        (-5.0..=10.0).contains(&n)
            && n.is_finite()
            && n.fract() == 0.0
            && n.abs() <= vetter::number::MAX_SAFE_INTEGER
    })
}

fn bench_number(c: &mut Criterion) {
    let compiled = vetter::number()
        .min(-5)
        .max(10)
        .integer()
        .finite()
        .safe_integer()
        .compile()
        .expect("compile");
    let pass = Value::from(5);
    let fail = Value::from(-50);

    let mut group = c.benchmark_group("number");
    group.bench_function("compiled", |b| {
        b.iter(|| (compiled.test(black_box(&pass)), compiled.test(black_box(&fail))))
    });
    group.bench_function("handwritten", |b| {
        b.iter(|| {
            (
                number_handwritten(black_box(&pass)),
                number_handwritten(black_box(&fail)),
            )
        })
    });
    group.finish();
}

fn bench_string(c: &mut Criterion) {
    let compiled = vetter::string()
        .min(5)
        .max(10)
        .alphanum()
        .compile()
        .expect("compile");
    let re = Regex::new(vetter::string::ALPHANUM_PATTERN).expect("alphanum regex must compile");
    let handwritten = move |v: &Value| {
        v.as_str().is_some_and(|s| {
            let len = s.chars().count();
            (5..=10).contains(&len) && re.is_match(s)
        })
    };
    let pass = Value::from("abc123");
    let fail = Value::from("abcdef");

    let mut group = c.benchmark_group("string");
    group.bench_function("compiled", |b| {
        b.iter(|| (compiled.test(black_box(&pass)), compiled.test(black_box(&fail))))
    });
    group.bench_function("handwritten", |b| {
        b.iter(|| (handwritten(black_box(&pass)), handwritten(black_box(&fail))))
    });
    group.finish();
}

fn bench_array_and_object(c: &mut Criterion) {
    let array = vetter::array().max(10).min(2).compile().expect("compile");
    let object = vetter::object()
        .has("test")
        .has("bench")
        .has_not("nope")
        .compile()
        .expect("compile");
    let list = Value::from(json!([1, 2, 3]));
    let map = Value::from(json!({"test": "test42", "bench": 5}));

    let mut group = c.benchmark_group("structures");
    group.bench_function("array", |b| b.iter(|| array.test(black_box(&list))));
    group.bench_function("object", |b| b.iter(|| object.test(black_box(&map))));
    group.finish();
}

criterion_group!(benches, bench_number, bench_string, bench_array_and_object);
criterion_main!(benches);
