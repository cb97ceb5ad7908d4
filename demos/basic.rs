use gwt::{bool_field, int_field, rule, string_field, RuleSet, Value};

fn main() {
    let rules: RuleSet<i32, &str> = [
        rule("adults may proceed", |r| {
            r.given(int_field("age"))
                .expect(|age| *age >= 18)
                .then(|_| "proceed")
                .otherwise(|_| "too young")
        }),
        rule("seniors get a discount", |r| {
            r.given(int_field("age"))
                .expect(|age| *age >= 65)
                .then(|_| "discount")
                .otherwise(|_| "full price")
        }),
    ]
    .into_iter()
    .collect();

    let banned = rule("banned users are stopped", |r| {
        r.given(bool_field("banned"))
            .expect(|banned| *banned)
            .then_do(|_| println!("  -> access denied"))
            .otherwise_do(|_| println!("  -> not banned"))
    });

    let greeting = rule("greet by name", |r| {
        r.given(string_field("name")).always_return(|name| format!("Hello, {name}!"))
    });

    println!("{rules}");

    let person = Value::map()
        .with("name", "Ada")
        .with("age", "70")
        .with("banned", "no");

    for r in &rules {
        match r.invoke(&person) {
            Ok(outcome) => println!("{}: {outcome}", r.description()),
            Err(err) => println!("{}: error: {err}", r.description()),
        }
    }

    println!("{}:", banned.description());
    let _ = banned.invoke(&person);

    match greeting.invoke(&person) {
        Ok(text) => println!("{text}"),
        Err(err) => println!("error: {err}"),
    }

    // Missing keys are errors, never silent defaults.
    if let Err(err) = greeting.invoke(&Value::map()) {
        println!("without a name: {err}");
    }
}
