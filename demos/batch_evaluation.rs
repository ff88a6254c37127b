use homeric::ExpressionCache;
use std::collections::HashMap;

fn main() {
    pretty_env_logger::init();

    let contexts = vec![
        HashMap::from([("price".to_string(), 120.0), ("volume".to_string(), 3000.0)]),
        HashMap::from([("price".to_string(), 80.0), ("volume".to_string(), 6000.0)]),
    ];

    let expression = "price * volume / 1000";

    let mut cache = ExpressionCache::default();
    for (i, context) in contexts.iter().enumerate() {
        let mut compiled = cache.compile(expression, &["price", "volume"]).unwrap();
        let result = compiled.evaluate_with_context(context).unwrap();
        println!("Result {}: {:?}", i, result);
    }
}
