use crate::functions::FunctionTable;

/// `fact` of anything above this overflows `f64`.
const MAX_FACTORIAL_ARGUMENT: f64 = 170.0;

pub fn register(table: &mut FunctionTable) {
    table.insert("abs", |x| Ok(x.abs()));
    table.insert("ceiling", |x| Ok(x.ceil()));
    table.insert("floor", |x| Ok(x.floor()));
    table.insert("sqrt", |x| Ok(x.sqrt()));
    table.insert("ln", |x| Ok(x.ln()));
    table.insert("lg", |x| Ok(x.log10()));
    table.insert("sign", sign);
    table.insert("fact", fact);
}

/// -1, 0 or 1. Unlike `f64::signum`, zero maps to zero.
pub fn sign(x: f64) -> Result<f64, String> {
    if x.is_nan() {
        return Err("sign of NaN is undefined".to_string());
    }
    Ok(if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    })
}

/// Iterative product `1 * 2 * ... * n` for every integer `n <= x`.
pub fn fact(x: f64) -> Result<f64, String> {
    if x.is_nan() {
        return Err("argument must be a number".to_string());
    }
    if x < 0.0 {
        return Err(format!("argument must not be negative, got {}", x));
    }
    if x > MAX_FACTORIAL_ARGUMENT {
        return Ok(f64::INFINITY);
    }

    let mut result = 1.0;
    let mut i = 1.0;
    while i <= x {
        result *= i;
        i += 1.0;
    }
    Ok(result)
}
