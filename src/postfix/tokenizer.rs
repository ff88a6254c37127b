use crate::constants;
use crate::error::{ExpressionError, Result};
use crate::functions;
use crate::token::{Operator, Token};
use crate::variables::Variables;
use log::trace;

/// Splits a normalized expression into tokens, in source order.
///
/// Operator symbols are single-character tokens. Any other run of
/// characters is classified, first match wins, as a declared variable, a
/// constant, a function or a number.
pub fn tokenize(expression: &str, variables: &Variables) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = expression;

    while let Some(c) = rest.chars().next() {
        if let Some(operator) = Operator::from_symbol(c) {
            tokens.push(Token::Operator(operator));
            rest = &rest[c.len_utf8()..];
            continue;
        }

        let end = rest
            .find(|c: char| Operator::from_symbol(c).is_some())
            .unwrap_or(rest.len());
        let (something, remaining) = rest.split_at(end);
        let token = classify(something, variables)?;
        trace!("token: {token:?}");
        tokens.push(token);
        rest = remaining;
    }

    Ok(tokens)
}

fn classify(lexeme: &str, variables: &Variables) -> Result<Token> {
    if variables.contains(lexeme) {
        return Ok(Token::Variable(lexeme.to_string()));
    }
    if constants::is_constant(lexeme) {
        return Ok(Token::Constant(lexeme.to_string()));
    }
    if functions::is_function(lexeme) {
        return Ok(Token::Function(lexeme.to_string()));
    }

    // only digit spellings; `inf` or `nan` are not literals
    if !lexeme.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return Err(ExpressionError::InvalidToken(lexeme.to_string()));
    }

    lexeme
        .parse::<f64>()
        .map(|value| Token::Number {
            lexeme: lexeme.to_string(),
            value,
        })
        .map_err(|_| ExpressionError::InvalidToken(lexeme.to_string()))
}
