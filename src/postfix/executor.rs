use crate::constants;
use crate::error::{ExpressionError, Result};
use crate::functions::{self, Function};
use crate::token::{BinaryReducer, Token};
use crate::variables::Variables;
use log::trace;

/// Reduces a postfix token sequence to a single number.
pub struct Executor<'a> {
    variables: &'a Variables,
    stack: Vec<f64>,
}

impl<'a> Executor<'a> {
    pub fn new(variables: &'a Variables) -> Self {
        Self {
            variables,
            stack: Vec::new(),
        }
    }

    pub fn execute(mut self, postfix: &[Token]) -> Result<f64> {
        self.stack.reserve(postfix.len());

        for token in postfix {
            trace!("execute: {token} {:?}", self.stack);
            match token {
                Token::Number { value, .. } => self.stack.push(*value),

                Token::Operator(operator) => {
                    let reducer = operator.reducer().ok_or(
                        ExpressionError::MalformedExpression("unbalanced parentheses"),
                    )?;
                    self.binary_op(reducer)?;
                }

                Token::Function(name) => {
                    let function = functions::lookup(name)
                        .ok_or(ExpressionError::MalformedExpression("unknown function"))?;
                    self.unary_op(name, function)?;
                }

                Token::Constant(name) => {
                    let value = constants::lookup(name)
                        .ok_or(ExpressionError::MalformedExpression("unknown constant"))?;
                    self.stack.push(value);
                }

                Token::Variable(name) => {
                    let value = self
                        .variables
                        .get(name)
                        .ok_or(ExpressionError::MalformedExpression("undeclared variable"))?;
                    self.stack.push(value);
                }
            }
        }

        match self.stack.as_slice() {
            [result] => Ok(*result),
            [] => Err(ExpressionError::MalformedExpression("nothing to evaluate")),
            _ => Err(ExpressionError::MalformedExpression(
                "operands left over after evaluation",
            )),
        }
    }

    fn binary_op(&mut self, reducer: BinaryReducer) -> Result<()> {
        let (right, left) = (self.pop_number()?, self.pop_number()?);
        self.stack.push(reducer(left, right));
        Ok(())
    }

    fn unary_op(&mut self, name: &str, function: Function) -> Result<()> {
        let argument = self.pop_number()?;
        let result = function(argument).map_err(|reason| ExpressionError::InvalidArgument {
            function: name.to_string(),
            reason,
        })?;
        self.stack.push(result);
        Ok(())
    }

    fn pop_number(&mut self) -> Result<f64> {
        self.stack
            .pop()
            .ok_or(ExpressionError::MalformedExpression("missing operand"))
    }
}

/// Runs `postfix` against the current values in `variables`.
pub fn execute(postfix: &[Token], variables: &Variables) -> Result<f64> {
    Executor::new(variables).execute(postfix)
}
