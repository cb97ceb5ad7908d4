use std::sync::Arc;
use std::thread;

use gwt::{int_field, rule, string_field, RuleSet, Value};

#[test]
fn invoke_across_threads() {
    let eligible = Arc::new(rule("eligible", |r| {
        r.given(int_field("age"))
            .expect(|age| *age >= 18)
            .then(|_| "allowed")
            .otherwise(|_| "denied")
    }));

    let inputs = [("25", "allowed"), ("15", "denied"), ("18", "allowed"), ("3", "denied")];

    let handles: Vec<_> = inputs
        .iter()
        .map(|&(age, expected)| {
            let r = Arc::clone(&eligible);
            thread::spawn(move || {
                let input = Value::map().with("age", age);
                for _ in 0..100 {
                    assert_eq!(r.invoke(&input), Ok(expected));
                }
                r.invoke(&input)
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(
        results,
        vec![Ok("allowed"), Ok("denied"), Ok("allowed"), Ok("denied")]
    );
}

#[test]
fn rule_sets_are_shareable() {
    let rules: Arc<RuleSet<String, bool>> = Arc::new(
        [
            rule("is gold", |r| {
                r.given(string_field("tier"))
                    .expect(|t| t == "gold")
                    .then(|_| true)
                    .otherwise(|_| false)
            }),
            rule("is silver", |r| {
                r.given(string_field("tier"))
                    .expect(|t| t == "silver")
                    .then(|_| true)
                    .otherwise(|_| false)
            }),
        ]
        .into_iter()
        .collect(),
    );

    let handles: Vec<_> = ["gold", "silver", "bronze"]
        .into_iter()
        .map(|tier| {
            let rules = Arc::clone(&rules);
            thread::spawn(move || {
                let input = Value::map().with("tier", tier);
                rules
                    .iter()
                    .filter(|r| r.invoke(&input).unwrap())
                    .map(|r| r.description().to_owned())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let matched: Vec<Vec<String>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(matched[0], vec!["is gold"]);
    assert_eq!(matched[1], vec!["is silver"]);
    assert!(matched[2].is_empty());
}
