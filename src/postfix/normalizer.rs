use crate::error::{ExpressionError, Result};

/// Prepares raw input for tokenization.
///
/// The text is lowercased, stripped of whitespace and `,` decimal
/// separators become `.`. A leading `-` and every `(-` get a `0` inserted
/// so unary minus becomes subtraction from zero. Both rewrites run once
/// and are not recursive: `--x` turns into `0--x`, not `0-(0-x)`.
pub fn normalize(expression: &str) -> Result<String> {
    let mut normalized: String = expression
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if normalized.is_empty() {
        return Err(ExpressionError::EmptyExpression);
    }

    if normalized.starts_with('-') {
        normalized.insert(0, '0');
    }

    Ok(normalized.replace("(-", "(0-"))
}
