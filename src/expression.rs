use crate::error::Result;
use crate::postfix::Program;
use crate::token::Token;
use crate::variables::Variables;
use log::debug;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A formula compiled once and evaluated many times.
///
/// ```
/// use homeric::Expression;
///
/// let mut expression = Expression::new("x^2 + 1", &["x"]).unwrap();
/// assert_eq!(expression.evaluate_with_values(&[3.0]), Ok(10.0));
/// assert_eq!(expression.evaluate_with_values(&[4.0]), Ok(17.0));
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    program: Arc<Program>,
    variables: Variables,
}

impl Expression {
    /// Compiles `expression`, declaring `variables` in the given order with
    /// an initial value of zero.
    ///
    /// # Errors
    ///
    /// * `DuplicateVariable` if a name is declared twice (case-insensitively).
    /// * `EmptyExpression` if there is nothing but whitespace.
    /// * `InvalidToken` if an identifier or literal cannot be resolved.
    pub fn new<S: AsRef<str>>(expression: &str, variables: &[S]) -> Result<Self> {
        let variables = Variables::declare(variables)?;
        let program = Program::compile(expression, &variables)?;
        Ok(Self::from_program(Arc::new(program), variables))
    }

    /// Compiles an expression without variables.
    pub fn parse(expression: &str) -> Result<Self> {
        Self::new::<&str>(expression, &[])
    }

    pub(crate) fn from_program(program: Arc<Program>, variables: Variables) -> Self {
        Self { program, variables }
    }

    /// Evaluates with the current variable values, zero unless set before.
    pub fn evaluate(&self) -> Result<f64> {
        self.program.execute(&self.variables)
    }

    /// Assigns `values` to the variables in declaration order, then
    /// evaluates.
    ///
    /// Extra values are ignored. If fewer values than variables are given,
    /// the remaining variables keep their previous values.
    pub fn evaluate_with_values(&mut self, values: &[f64]) -> Result<f64> {
        if values.len() > self.variables.len() {
            debug!(
                "ignoring {} extra values",
                values.len() - self.variables.len()
            );
        }
        self.variables.assign_positional(values);
        self.evaluate()
    }

    /// Assigns every named value in `context`, then evaluates.
    ///
    /// Fails with `UnknownVariable` before assigning anything if a name was
    /// not declared.
    pub fn evaluate_with_context(&mut self, context: &HashMap<String, f64>) -> Result<f64> {
        self.variables.assign_context(context)?;
        self.evaluate()
    }

    pub fn set_variable(&mut self, name: &str, value: f64) -> Result<()> {
        self.variables.set(name, value)
    }

    /// Declared variables and their current values, in declaration order.
    pub fn variables(&self) -> impl Iterator<Item = (&str, f64)> {
        self.variables.iter()
    }

    /// The normalized expression text.
    pub fn source(&self) -> &str {
        self.program.source()
    }

    pub fn postfix(&self) -> &[Token] {
        self.program.postfix()
    }

    pub fn program(&self) -> &Arc<Program> {
        &self.program
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.source())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExpressionError;
    use std::f64::consts::PI;

    fn eval(expression: &str) -> Result<f64> {
        Expression::parse(expression)?.evaluate()
    }

    #[test]
    fn test_precedence() {
        assert_eq!(eval("3+4*2"), Ok(11.0));
        assert_eq!(eval("10 + 2 * 3 - 4 / 2"), Ok(14.0));
        assert_eq!(eval("2 + 3 ^ 2 * 2"), Ok(20.0));
        assert_eq!(eval("7 % 4 * 2"), Ok(6.0));
    }

    #[test]
    fn test_parentheses_override() {
        assert_eq!(eval("(3+4)*2"), Ok(14.0));
        assert_eq!(eval("((10 - 2) * 3) / (4 + 2)"), Ok(4.0));
    }

    #[test]
    fn test_functions() {
        assert_eq!(eval("sin(0)"), Ok(0.0));
        assert_eq!(eval("sqrt(16)"), Ok(4.0));
        assert_eq!(eval("fact(5) / fact(3)"), Ok(20.0));
        assert_eq!(eval("abs(floor(-2.5))"), Ok(3.0));
        assert_eq!(eval("ceiling(sqrt(10))"), Ok(4.0));
        assert_eq!(eval("sign(-4) + sign(0)"), Ok(-1.0));
        assert!((eval("ln(e)").unwrap() - 1.0).abs() < 1e-12);
        assert!((eval("lg(1000)").unwrap() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_constants() {
        assert_eq!(eval("pi"), Ok(PI));
        assert_eq!(eval("2*PI"), Ok(2.0 * PI));
    }

    #[test]
    fn test_unary_minus() {
        assert_eq!(eval("-3 + 5"), Ok(2.0));
        assert_eq!(eval("2 * (-3)"), Ok(-6.0));
        assert_eq!(eval("abs(-7)"), Ok(7.0));
    }

    #[test]
    fn test_nested_unary_minus_is_not_rewritten() {
        assert!(matches!(
            eval("--1"),
            Err(ExpressionError::MalformedExpression(_))
        ));
        assert!(matches!(
            eval("2*-1"),
            Err(ExpressionError::MalformedExpression(_))
        ));
        assert_eq!(eval("-(-1)"), Ok(1.0));
    }

    #[test]
    fn test_exponent_is_left_associative() {
        assert_eq!(eval("2^3^2"), Ok(64.0));
        assert_eq!(eval("2^(3^2)"), Ok(512.0));
    }

    #[test]
    fn test_decimal_comma() {
        assert_eq!(eval("1,5 * 2"), Ok(3.0));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let expression = Expression::parse("sqrt(2) * cos(pi / 3) + fact(4)").unwrap();
        let first = expression.evaluate().unwrap();
        for _ in 0..10 {
            assert_eq!(expression.evaluate(), Ok(first));
        }
    }

    #[test]
    fn test_variables_default_to_zero() {
        let expression = Expression::new("x + y + 1", &["x", "y"]).unwrap();
        assert_eq!(expression.evaluate(), Ok(1.0));
    }

    #[test]
    fn test_reevaluation_with_values() {
        let mut expression = Expression::new("x+1", &["x"]).unwrap();
        assert_eq!(expression.evaluate_with_values(&[5.0]), Ok(6.0));
        assert_eq!(expression.evaluate_with_values(&[10.0]), Ok(11.0));
        assert_eq!(expression.evaluate(), Ok(11.0));
    }

    #[test]
    fn test_positional_values_keep_previous_bindings() {
        let mut expression = Expression::new("a - b", &["a", "b"]).unwrap();
        assert_eq!(expression.evaluate_with_values(&[10.0, 4.0]), Ok(6.0));
        assert_eq!(expression.evaluate_with_values(&[20.0]), Ok(16.0));
        assert_eq!(expression.evaluate_with_values(&[1.0, 2.0, 99.0]), Ok(-1.0));
    }

    #[test]
    fn test_evaluate_with_context() {
        let mut expression = Expression::new("price * volume", &["price", "volume"]).unwrap();
        let context = HashMap::from([("price".to_string(), 100.0), ("volume".to_string(), 50.0)]);
        assert_eq!(expression.evaluate_with_context(&context), Ok(5000.0));

        let context = HashMap::from([("volume".to_string(), 2.0)]);
        assert_eq!(expression.evaluate_with_context(&context), Ok(200.0));
    }

    #[test]
    fn test_unknown_variable_in_context() {
        let mut expression = Expression::new("x * 2", &["x"]).unwrap();
        expression.evaluate_with_values(&[4.0]).unwrap();

        let context = HashMap::from([("x".to_string(), 1.0), ("z".to_string(), 1.0)]);
        assert_eq!(
            expression.evaluate_with_context(&context),
            Err(ExpressionError::UnknownVariable("z".to_string()))
        );
        assert_eq!(expression.evaluate(), Ok(8.0));
    }

    #[test]
    fn test_construction_errors() {
        assert_eq!(
            Expression::parse("y+1").unwrap_err(),
            ExpressionError::InvalidToken("y".to_string())
        );
        assert_eq!(
            Expression::new("x", &["x", "x"]).unwrap_err(),
            ExpressionError::DuplicateVariable("x".to_string())
        );
        assert_eq!(
            Expression::parse("").unwrap_err(),
            ExpressionError::EmptyExpression
        );
    }

    #[test]
    fn test_domain_error() {
        assert!(matches!(
            eval("fact(-1)"),
            Err(ExpressionError::InvalidArgument { function, .. }) if function == "fact"
        ));
    }

    #[test]
    fn test_malformed_expressions() {
        for input in ["5 +", "(5 + 3", "5 + 3)", "2 ** 3", "sin", "()"] {
            assert!(
                matches!(eval(input), Err(ExpressionError::MalformedExpression(_))),
                "expected {input:?} to be malformed"
            );
        }
    }

    #[test]
    fn test_whitespace_between_digits_is_dropped() {
        assert_eq!(eval("5 3"), Ok(53.0));
    }

    #[test]
    fn test_ieee_arithmetic() {
        assert_eq!(eval("1/0"), Ok(f64::INFINITY));
        assert!(eval("5 % 0").unwrap().is_nan());
    }

    #[test]
    fn test_accessors() {
        let mut expression = Expression::new(" Rate * 2 ", &["rate", "unused"]).unwrap();
        expression.set_variable("RATE", 1.5).unwrap();
        assert_eq!(expression.to_string(), "rate*2");
        assert_eq!(expression.source(), "rate*2");
        assert_eq!(expression.program().to_string(), "rate 2 *");
        assert_eq!(expression.postfix().len(), 3);
        assert_eq!(
            expression.variables().collect::<Vec<_>>(),
            vec![("rate", 1.5), ("unused", 0.0)]
        );
        assert_eq!(
            expression.set_variable("other", 1.0),
            Err(ExpressionError::UnknownVariable("other".to_string()))
        );
    }
}
