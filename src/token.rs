use std::fmt;

/// A binary reducer, called as `reducer(left, right)`.
pub type BinaryReducer = fn(f64, f64) -> f64;

/// A single lexical unit of a normalized expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Number { lexeme: String, value: f64 },
    Operator(Operator),
    Variable(String),
    Constant(String),
    Function(String),
}

impl Token {
    /// The source text this token was scanned from.
    pub fn lexeme(&self) -> &str {
        match self {
            Token::Number { lexeme, .. } => lexeme,
            Token::Operator(operator) => operator.symbol(),
            Token::Variable(name) | Token::Constant(name) | Token::Function(name) => name,
        }
    }

    pub fn is_left_paren(&self) -> bool {
        matches!(self, Token::Operator(Operator::LeftParen))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lexeme())
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
    LeftParen,
    RightParen,
}

impl Operator {
    /// Recognizes one of `+ - * / % ^ ( )`.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            '%' => Some(Operator::Modulo),
            '^' => Some(Operator::Power),
            '(' => Some(Operator::LeftParen),
            ')' => Some(Operator::RightParen),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "*",
            Operator::Divide => "/",
            Operator::Modulo => "%",
            Operator::Power => "^",
            Operator::LeftParen => "(",
            Operator::RightParen => ")",
        }
    }

    /// Higher binds tighter. Parentheses sit at 0 so no binary operator
    /// ever pops them off the conversion stack.
    pub fn precedence(&self) -> u8 {
        match self {
            Operator::Add | Operator::Subtract => 1,
            Operator::Multiply | Operator::Divide | Operator::Modulo => 2,
            Operator::Power => 3,
            Operator::LeftParen | Operator::RightParen => 0,
        }
    }

    /// The arithmetic behind the operator, or `None` for the grouping
    /// symbols which are never evaluated.
    pub fn reducer(&self) -> Option<BinaryReducer> {
        match self {
            Operator::Add => Some(|left, right| left + right),
            Operator::Subtract => Some(|left, right| left - right),
            Operator::Multiply => Some(|left, right| left * right),
            Operator::Divide => Some(|left, right| left / right),
            Operator::Modulo => Some(|left, right| left % right),
            Operator::Power => Some(f64::powf),
            Operator::LeftParen | Operator::RightParen => None,
        }
    }
}

impl TryFrom<&str> for Operator {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let mut chars = value.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => {
                Operator::from_symbol(symbol).ok_or_else(|| format!("Unknown operator: {}", value))
            }
            _ => Err(format!("Unknown operator: {}", value)),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
