use crate::interpreter::error::ExpressionError;
use crate::interpreter::operator::BinaryOperator;
use anyhow::{bail, Context, Result};
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Copy, Clone, PartialEq)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
    LeftParenthesis,
    RightParenthesis,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParenthesis => write!(f, "("),
            Token::RightParenthesis => write!(f, ")"),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

/// Parses a single lexeme: a parenthesis, an operator symbol or a run of digits.
impl str::FromStr for Token {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        match input {
            "(" => Ok(Token::LeftParenthesis),
            ")" => Ok(Token::RightParenthesis),
            "" => bail!("An empty string is not a token"),
            input => {
                let mut characters = input.chars();
                if let (Some(symbol), None) = (characters.next(), characters.next()) {
                    if let Some(operator) = BinaryOperator::from_symbol(symbol) {
                        return Ok(Token::Operator(operator));
                    }
                }
                parse_number(input)
            }
        }
    }
}

fn parse_number(text: &str) -> Result<Token> {
    if let Some((position, character)) = text
        .chars()
        .enumerate()
        .find(|(_, character)| !character.is_ascii_digit())
    {
        bail!(ExpressionError::InvalidCharacter {
            character,
            position
        });
    }
    let value = text
        .parse::<f64>()
        .with_context(|| format!("Failed to read {} as a number", text))?;
    Ok(Token::Number(value))
}
