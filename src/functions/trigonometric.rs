use crate::functions::FunctionTable;
use std::f64::consts::FRAC_PI_2;

pub fn register(table: &mut FunctionTable) {
    table.insert("sin", sin);
    table.insert("cos", cos);
    table.insert("tan", tan);
    table.insert("ctan", ctan);
    table.insert("asin", asin);
    table.insert("acos", acos);
    table.insert("atan", atan);
    table.insert("actan", actan);
}

pub fn sin(x: f64) -> Result<f64, String> {
    Ok(x.sin())
}

pub fn cos(x: f64) -> Result<f64, String> {
    Ok(x.cos())
}

pub fn tan(x: f64) -> Result<f64, String> {
    Ok(x.tan())
}

/// Cotangent as the reciprocal of the tangent.
pub fn ctan(x: f64) -> Result<f64, String> {
    Ok(1.0 / x.tan())
}

pub fn asin(x: f64) -> Result<f64, String> {
    Ok(x.asin())
}

pub fn acos(x: f64) -> Result<f64, String> {
    Ok(x.acos())
}

pub fn atan(x: f64) -> Result<f64, String> {
    Ok(x.atan())
}

/// Arccotangent with range (0, π).
pub fn actan(x: f64) -> Result<f64, String> {
    Ok(FRAC_PI_2 - x.atan())
}
