use crate::token::{Operator, Token};

/// Reorders infix tokens into postfix (reverse Polish) order.
///
/// Operators of equal precedence pop each other, so every binary operator,
/// `^` included, is left-associative. A function waits on the stack until
/// the parenthesis that follows it closes. Conversion never fails: an
/// unmatched `(` or `)` is left in the output and rejected by the executor.
pub fn to_postfix<I>(infix: I) -> Vec<Token>
where
    I: IntoIterator<Item = Token>,
{
    let infix = infix.into_iter();
    let mut output = Vec::with_capacity(infix.size_hint().0);
    let mut stack: Vec<Token> = Vec::new();

    for token in infix {
        match token {
            Token::Number { .. } | Token::Variable(_) | Token::Constant(_) => output.push(token),

            Token::Function(_) | Token::Operator(Operator::LeftParen) => stack.push(token),

            Token::Operator(Operator::RightParen) => {
                let mut matched = false;
                while let Some(top) = stack.pop() {
                    if top.is_left_paren() {
                        matched = true;
                        break;
                    }
                    output.push(top);
                }

                if !matched {
                    output.push(token);
                } else if matches!(stack.last(), Some(Token::Function(_))) {
                    output.extend(stack.pop());
                }
            }

            Token::Operator(operator) => {
                while let Some(Token::Operator(top)) = stack.last() {
                    if top.precedence() < operator.precedence() {
                        break;
                    }
                    output.extend(stack.pop());
                }
                stack.push(token);
            }
        }
    }

    output.extend(stack.into_iter().rev());
    output
}
