use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use gwt::{any, any_int, any_string, map_field, rule, string_field, RuleError, Value};

#[test]
fn then_otherwise_greeting() {
    let greet = rule("greeting", |r| {
        r.given(any_string())
            .expect(|s| s == "test")
            .then_return(|_| "Hello".to_owned())
            .otherwise_return(|_| "Good bye".to_owned())
    });
    assert_eq!(greet.invoke(&Value::from("test")), Ok("Hello".to_owned()));
    assert_eq!(greet.invoke(&Value::from("nothing")), Ok("Good bye".to_owned()));
}

#[test]
fn branches_see_the_extracted_value() {
    let r = rule("echo", |r| {
        r.given(any_int())
            .expect(|n| *n >= 0)
            .then(|n| format!("+{n}"))
            .otherwise(|n| format!("{n}"))
    });
    assert_eq!(r.invoke(&Value::from("12")), Ok("+12".to_owned()));
    assert_eq!(r.invoke(&Value::Long(-3)), Ok("-3".to_owned()));
}

#[test]
fn always_return_ignores_content() {
    let r = rule("length", |r| r.given(any_string()).always_return(|s| s.len()));
    for input in [Value::from(""), Value::from("four"), Value::Null, Value::Int(123)] {
        let expected = input.to_string().len();
        assert_eq!(r.invoke(&input), Ok(expected));
    }
}

#[test]
fn then_do_runs_action_only_on_match() {
    let calls = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&calls);
    let r = rule("notify", move |r| {
        r.given(string_field("status"))
            .expect(|s| s == "failed")
            .then_do(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
    });

    assert_eq!(r.invoke(&Value::map().with("status", "ok")), Ok(false));
    assert_eq!(calls.load(Ordering::SeqCst), 0);

    assert_eq!(r.invoke(&Value::map().with("status", "failed")), Ok(true));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn otherwise_do_keeps_false_result() {
    let misses = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&misses);
    let r = rule("audit", move |r| {
        r.given(any_int())
            .expect(|n| *n > 10)
            .then_do(|_| {})
            .otherwise_do(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            })
    });
    assert_eq!(r.invoke(&Value::Int(3)), Ok(false));
    assert_eq!(r.invoke(&Value::Int(30)), Ok(true));
    assert_eq!(misses.load(Ordering::SeqCst), 1);
}

#[test]
fn and_requires_both() {
    let r = rule("range", |r| {
        r.given(any_int())
            .expect(|n| *n > 0)
            .and(|n| *n < 10)
            .then(|_| true)
            .otherwise(|_| false)
    });
    assert_eq!(r.invoke(&Value::Int(5)), Ok(true));
    assert_eq!(r.invoke(&Value::Int(0)), Ok(false));
    assert_eq!(r.invoke(&Value::Int(10)), Ok(false));
}

#[test]
fn and_short_circuits_on_false() {
    let second = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&second);
    let r = rule("guarded", move |r| {
        r.given(any_int())
            .expect(|n| *n > 0)
            .and(move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
                true
            })
            .then(|_| "yes")
            .otherwise(|_| "no")
    });
    assert_eq!(r.invoke(&Value::Int(-1)), Ok("no"));
    assert_eq!(second.load(Ordering::SeqCst), 0);
    assert_eq!(r.invoke(&Value::Int(1)), Ok("yes"));
    assert_eq!(second.load(Ordering::SeqCst), 1);
}

#[test]
fn or_short_circuits_on_true() {
    let second = Arc::new(AtomicUsize::new(0));
    let seen = Arc::clone(&second);
    let r = rule("either", move |r| {
        r.given(any_int())
            .expect(|n| *n == 1)
            .or(move |n| {
                seen.fetch_add(1, Ordering::SeqCst);
                *n == 2
            })
            .then(|_| "yes")
            .otherwise(|_| "no")
    });
    assert_eq!(r.invoke(&Value::Int(1)), Ok("yes"));
    assert_eq!(second.load(Ordering::SeqCst), 0);
    assert_eq!(r.invoke(&Value::Int(2)), Ok("yes"));
    assert_eq!(r.invoke(&Value::Int(3)), Ok("no"));
    assert_eq!(second.load(Ordering::SeqCst), 2);
}

#[test]
fn composition_is_left_associative() {
    // ((n == 1 OR n == 2) AND n != 2): only 1 matches.
    let r = rule("assoc", |r| {
        r.given(any_int())
            .expect(|n| *n == 1)
            .or(|n| *n == 2)
            .and(|n| *n != 2)
            .then(|_| true)
            .otherwise(|_| false)
    });
    assert_eq!(r.invoke(&Value::Int(1)), Ok(true));
    assert_eq!(r.invoke(&Value::Int(2)), Ok(false));
    assert_eq!(r.definition().predicate().to_string(), "((p1 OR p2) AND p3)");
}

#[test]
fn long_predicate_chains() {
    let r = rule("deep", |r| {
        let mut when = r.given(any_int()).expect(|n| *n > 0);
        for limit in 1..50 {
            when = when.and(move |n| *n > limit);
        }
        when.then(|_| "big").otherwise(|_| "small")
    });
    assert_eq!(r.invoke(&Value::Int(100)), Ok("big"));
    assert_eq!(r.invoke(&Value::Int(49)), Ok("small"));
    assert_eq!(r.definition().predicate().leaves(), 50);
}

#[test]
fn missing_key_surfaces() {
    let r = rule("needs name", |r| {
        r.given(string_field("name")).always_return(|s| s.clone())
    });
    assert_eq!(
        r.invoke(&Value::map().with("field1", "x")),
        Err(RuleError::MissingKey { key: "name".into() })
    );
}

#[test]
fn type_mismatch_surfaces() {
    let r = rule("needs map", |r| {
        r.given(any::<HashMap<String, Value>>())
            .always_return(|m| m.len())
    });
    assert_eq!(
        r.invoke(&Value::from("not a map")),
        Err(RuleError::TypeMismatch {
            expected: "map",
            found: "string",
        })
    );

    let nested = rule("nested map", |r| {
        r.given(map_field("inner")).always_return(|m| m.len())
    });
    assert_eq!(
        nested.invoke(&Value::map().with("inner", Value::map().with("a", 1_i32))),
        Ok(1)
    );
}

#[test]
fn repeated_invocation_is_idempotent() {
    let r = rule("stable", |r| {
        r.given(string_field("k"))
            .expect(|s| s.starts_with('a'))
            .then(|s| s.to_uppercase())
            .otherwise(|s| s.to_lowercase())
    });
    let input = Value::map().with("k", "abC");
    let first = r.invoke(&input);
    for _ in 0..10 {
        assert_eq!(r.invoke(&input), first);
    }
}

#[test]
fn typed_object_input() {
    struct Order {
        total: u32,
        paid: bool,
    }

    impl Order {
        fn is_paid(&self) -> bool {
            self.paid
        }
    }

    let r = rule("ship paid orders", |r| {
        r.given(gwt::any_object::<Order>())
            .whose(|o| o.is_paid())
            .and(|o| o.total > 0)
            .then(|o| format!("ship {}", o.total))
            .otherwise(|_| "hold".to_owned())
    });
    assert_eq!(
        r.invoke(&Value::object(Order { total: 10, paid: true })),
        Ok("ship 10".to_owned())
    );
    assert_eq!(
        r.invoke(&Value::object(Order { total: 10, paid: false })),
        Ok("hold".to_owned())
    );
    assert!(matches!(
        r.invoke(&Value::object(3_u8)),
        Err(RuleError::TypeMismatch { .. })
    ));
}
