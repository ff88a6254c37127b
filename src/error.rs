use thiserror::Error;

pub type Result<T, E = ExpressionError> = std::result::Result<T, E>;

/// Everything that can go wrong while compiling or evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExpressionError {
    #[error("expression is empty")]
    EmptyExpression,

    #[error("variable `{0}` is declared more than once")]
    DuplicateVariable(String),

    #[error("invalid token `{0}`: not a variable, constant, function or number")]
    InvalidToken(String),

    #[error("variable `{0}` is not declared in this expression")]
    UnknownVariable(String),

    #[error("malformed expression: {0}")]
    MalformedExpression(&'static str),

    #[error("invalid argument for `{function}`: {reason}")]
    InvalidArgument { function: String, reason: String },
}
