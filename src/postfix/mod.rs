use crate::error::Result;
use crate::token::Token;
use crate::variables::Variables;
use log::debug;
use std::fmt;

mod converter;
mod executor;
mod normalizer;
mod tokenizer;

pub use converter::to_postfix;
pub use executor::{execute, Executor};
pub use normalizer::normalize;
pub use tokenizer::tokenize;

/// A compiled expression: the normalized source and its postfix tokens.
///
/// A program never changes once built. It holds no variable values, only
/// names, so one program can be shared by any number of variable tables
/// declaring the same names.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    source: String,
    postfix: Vec<Token>,
}

impl Program {
    /// Normalizes, tokenizes and converts `expression`. Identifiers are
    /// resolved against the names declared in `variables`.
    pub fn compile(expression: &str, variables: &Variables) -> Result<Self> {
        let source = normalize(expression)?;
        debug!("normalized expression: {source}");

        let infix = tokenize(&source, variables)?;
        debug!("tokenized into {} tokens", infix.len());

        let program = Program {
            postfix: to_postfix(infix),
            source,
        };
        debug!("postfix: {program}");
        Ok(program)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn postfix(&self) -> &[Token] {
        &self.postfix
    }

    pub fn execute(&self, variables: &Variables) -> Result<f64> {
        execute(&self.postfix, variables)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tokens = self.postfix.iter();
        if let Some(first) = tokens.next() {
            write!(f, "{first}")?;
            for token in tokens {
                write!(f, " {token}")?;
            }
        }
        Ok(())
    }
}
