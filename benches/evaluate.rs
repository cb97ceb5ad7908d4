use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gwt::{any_string, int_field, rule, using, AccessStrategy, Rule, Value};
use serde_json::json;

/// A rule whose predicate is a chain of `n` AND-ed comparisons on one field.
fn build_rule(n: i32) -> Rule<i32, &'static str> {
    rule("chained", |r| {
        let mut when = r.given(int_field("score")).expect(|s| *s >= 0);
        for i in 1..n {
            when = when.and(move |s| *s >= i);
        }
        when.then(|_| "pass").otherwise(|_| "fail")
    })
}

fn bench_invoke(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_invoke");

    for &n in &[1, 10, 50] {
        let r = build_rule(n);
        let input = Value::map().with("score", 100_i32);
        group.bench_function(&format!("{n}_tests_map"), |b| {
            b.iter(|| r.invoke(black_box(&input)));
        });
    }

    let doc_rule = rule("doc", |r| {
        r.given(using(AccessStrategy::document()).int("score"))
            .expect(|s| *s > 50)
            .then(|_| "pass")
            .otherwise(|_| "fail")
    });
    let doc = Value::from(json!({"score": 100, "name": "x", "tags": ["a", "b"]}));
    group.bench_function("document_lookup", |b| {
        b.iter(|| doc_rule.invoke(black_box(&doc)));
    });

    let text_rule = rule("text", |r| {
        r.given(any_string())
            .expect(|s| s == "test")
            .then(|_| "Hello")
            .otherwise(|_| "Good bye")
    });
    let text = Value::from("test");
    group.bench_function("whole_argument_string", |b| {
        b.iter(|| text_rule.invoke(black_box(&text)));
    });

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("construction");

    for &n in &[1, 10, 50] {
        group.bench_function(&format!("{n}_tests"), |b| {
            b.iter(|| black_box(build_rule(n)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_invoke, bench_construction);
criterion_main!(benches);
