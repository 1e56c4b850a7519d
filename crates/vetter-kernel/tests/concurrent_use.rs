//! Integration tests: predicates and builders shared across threads.

use vetter_kernel::{Builder, Extension, Fragment, Value, compile, extend, or};

fn positive() -> Fragment {
    Fragment::new("positive", |v, _| v.as_f64().is_some_and(|n| n > 0.0))
}

fn below() -> Fragment {
    Fragment::new("below", |v, p| {
        matches!((v.as_f64(), p.number("max")), (Some(n), Some(max)) if n < max)
    })
    .with_param("max", 100)
}

#[test]
fn compiled_predicate_is_shared_across_threads() {
    let p = compile(Some(&[positive(), below()])).expect("compile");

    let handles: Vec<_> = (0..8)
        .map(|t| {
            let p = p.clone();
            std::thread::spawn(move || {
                (0..200)
                    .map(|i| {
                        let n = (t * 200 + i) as f64 - 50.0;
                        p.test(&Value::Number(n)) == (n > 0.0 && n < 100.0)
                    })
                    .all(|ok| ok)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread panicked"));
    }
}

#[test]
fn extensions_registered_on_other_threads_are_visible() {
    let builder = Builder::with_guard(
        "number",
        Fragment::new("number", |v, _| v.as_f64().is_some()),
    );

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let builder = builder.clone();
            std::thread::spawn(move || {
                let name = format!("is{i}");
                extend(
                    &builder,
                    Extension::new(name, ["expected"], |v, p| {
                        v.as_f64().is_some() && v.as_f64() == p.number("expected")
                    }),
                )
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("thread panicked").expect("extend");
    }

    assert_eq!(builder.methods(), ["is0", "is1", "is2", "is3"]);
    let p = builder
        .chain()
        .call("is2", [2])
        .and_then(|chain| chain.compile())
        .expect("compile");
    assert!(p.accepts(2));
    assert!(!p.accepts(3));
}

#[test]
fn hand_written_and_synthesized_predicates_compose() {
    let synthesized = compile(Some(&[positive(), below()])).expect("compile");
    let handwritten = vetter_kernel::CompiledPredicate::from_fn(|v| v.as_str() == Some("none"));
    let either = or([synthesized, handwritten]);

    assert!(either.accepts(42));
    assert!(either.accepts("none"));
    assert!(!either.accepts(-1));
    assert!(!either.accepts("some"));
}
