use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use anyhow::{bail, Result};
use log::trace;

/// Splits the given expression into tokens.
///
/// Whitespace is skipped, every parenthesis and operator becomes a token of its own
/// and consecutive digits form a single number. `-` is always subtraction.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens, in the order they appear in the expression.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::lexer::tokenize;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let tokens = tokenize("12 + 3")?;
/// assert_eq!(tokens.len(), 3);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut literal = String::new();

    for (position, character) in expression.chars().enumerate() {
        if character.is_ascii_digit() {
            literal.push(character);
            continue;
        }
        flush_literal(&mut literal, &mut tokens)?;

        if character.is_whitespace() {
            continue;
        }
        let token = match character {
            '(' => Token::LeftParenthesis,
            ')' => Token::RightParenthesis,
            symbol => match BinaryOperator::from_symbol(symbol) {
                Some(operator) => Token::Operator(operator),
                None => bail!(ExpressionError::InvalidCharacter {
                    character,
                    position
                }),
            },
        };
        tokens.push(token);
    }
    flush_literal(&mut literal, &mut tokens)?;

    trace!("Tokenized {:?} into {} tokens", expression, tokens.len());
    Ok(tokens)
}

fn flush_literal(literal: &mut String, tokens: &mut Vec<Token>) -> Result<()> {
    if literal.is_empty() {
        return Ok(());
    }
    tokens.push(literal.parse()?);
    literal.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn lexemes(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn expression_is_split_into_tokens() {
        let tokens = tokenize("12+3*(4-1)").unwrap();

        assert_eq!(
            lexemes(&tokens),
            ["12", "+", "3", "*", "(", "4", "-", "1", ")"]
        )
    }

    #[test]
    fn whitespace_is_skipped() {
        let tokens = tokenize(" \t2 ^ ( 10 /5 )\n").unwrap();

        assert_eq!(lexemes(&tokens), ["2", "^", "(", "10", "/", "5", ")"])
    }

    #[test]
    fn whitespace_separates_numbers() {
        let tokens = tokenize("1 2").unwrap();

        assert_eq!(tokens, [Token::Number(1.0), Token::Number(2.0)])
    }

    #[test]
    fn multi_digit_number_becomes_one_token() {
        let tokens = tokenize("1234567").unwrap();

        assert_eq!(tokens, [Token::Number(1234567.0)])
    }

    #[test]
    fn minus_is_always_subtraction() {
        let tokens = tokenize("-5").unwrap();

        assert_eq!(
            tokens,
            [Token::Operator(BinaryOperator::Subtract), Token::Number(5.0)]
        )
    }

    #[test]
    fn empty_expression_has_no_tokens() {
        assert!(tokenize("   ").unwrap().is_empty())
    }

    #[test]
    fn invalid_character_returns_err() {
        let error = tokenize("3&4").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ExpressionError>(),
            Some(&ExpressionError::InvalidCharacter {
                character: '&',
                position: 1
            })
        )
    }

    #[test]
    fn decimal_point_returns_invalid_character() {
        let error = tokenize("1.5 + 2").unwrap_err();

        assert_eq!(
            error.downcast_ref::<ExpressionError>(),
            Some(&ExpressionError::InvalidCharacter {
                character: '.',
                position: 1
            })
        )
    }

    #[test]
    fn letter_returns_invalid_character() {
        tokenize("x + 1").expect_err("Should return Err");
    }
}
