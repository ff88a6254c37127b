//! Compile-once, evaluate-many engine for infix formulas.
//!
//! An expression is normalized, split into tokens and reordered into postfix
//! form when it is built. Every evaluation then walks that fixed token
//! sequence over a value stack, reading variables from the expression's own
//! table.
//!
//! ```
//! use homeric::Expression;
//!
//! let mut area = Expression::new("pi * r ^ 2", &["r"]).unwrap();
//! assert_eq!(area.evaluate_with_values(&[1.0]), Ok(std::f64::consts::PI));
//! ```

pub mod cache;
pub mod constants;
pub mod error;
pub mod expression;
pub mod functions;
pub mod postfix;
pub mod token;
pub mod variables;

pub use cache::ExpressionCache;
pub use error::{ExpressionError, Result};
pub use expression::Expression;
pub use postfix::Program;
pub use token::{Operator, Token};
pub use variables::Variables;

use std::collections::HashMap;

/// Compiles and evaluates `expression` once, declaring every key of
/// `context` as a variable.
pub fn evaluate_expression(expression: &str, context: &HashMap<String, f64>) -> Result<f64> {
    let mut names: Vec<&str> = context.keys().map(String::as_str).collect();
    names.sort_unstable();

    let mut expression = Expression::new(expression, &names)?;
    expression.evaluate_with_context(context)
}
