use gwt::{int_field, rule, use_document_default, using, AccessStrategy, Value};
use serde_json::json;

fn main() {
    let order = Value::from(json!({
        "id": 1001,
        "total": "250",
        "customer": {"tier": "gold"},
    }));

    let docs = using(AccessStrategy::document());
    let big_order = rule("orders over 200 need review", |r| {
        r.given(docs.int("total"))
            .expect(|total| *total > 200)
            .then(|total| format!("review ({total})"))
            .otherwise(|_| "auto-approve".to_owned())
    });

    let gold = rule("gold customers", |r| {
        r.given(docs.path::<String>("customer.tier"))
            .whose(|tier| tier.eq_ignore_ascii_case("gold"))
            .then(|_| true)
            .otherwise(|_| false)
    });

    match big_order.evaluate_detailed(&order) {
        Ok(report) => println!("{report}"),
        Err(err) => println!("error: {err}"),
    }
    println!("gold: {:?}", gold.invoke(&order));

    // Unqualified lookups follow the process-wide default.
    let id = rule("id", |r| r.given(int_field("id")).always_return(|id| *id));
    println!("id with map default: {:?}", id.invoke(&order));
    use_document_default();
    println!("id with document default: {:?}", id.invoke(&order));
}
