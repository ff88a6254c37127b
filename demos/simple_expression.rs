use homeric::Expression;

fn main() {
    pretty_env_logger::init();

    let mut expression = Expression::new("-x*sin(y) + 2^3", &["x", "y"]).expect("Failed to compile");
    println!("Expression: {}", expression);
    println!("Postfix: {}", expression.program());

    match expression.evaluate() {
        Ok(result) => println!("Result with defaults: {}", result),
        Err(err) => println!("Error: {}", err),
    }

    match expression.evaluate_with_values(&[2.0, std::f64::consts::FRAC_PI_2]) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }

    match Expression::parse("fact(-1)").and_then(|expression| expression.evaluate()) {
        Ok(result) => println!("Result: {}", result),
        Err(err) => println!("Error: {}", err),
    }
}
