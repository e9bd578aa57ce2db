pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::evaluator::evaluate_postfix;
use crate::interpreter::token::Token;
use anyhow::Result;
use itertools::Itertools;
use log::debug;

/// Calculates the value of the given arithmetic expression.
///
/// The expression may contain non-negative integers, parentheses and the binary
/// operators `+ - * / ^`. All operators group to the left, so `2^3^2` is `64`.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format.
///
/// returns: The value of the expression. Failures carry an
/// [`ExpressionError`](error::ExpressionError) describing what went wrong.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::evaluate;
/// use arithmetic_evaluator::interpreter::error::ExpressionError;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// assert_eq!(evaluate("12 + 3 * (4 - 1)")?, 21.0);
///
/// let error = evaluate("10 / 0").unwrap_err();
/// assert_eq!(
///     error.downcast_ref::<ExpressionError>(),
///     Some(&ExpressionError::DivisionByZero)
/// );
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    let postfix_tokens = to_postfix(expression)?;
    let value = evaluate_postfix(postfix_tokens)?;
    debug!("{} = {}", expression.trim(), value);
    Ok(value)
}

/// Converts the given infix expression into postfix tokens.
///
/// # Arguments
///
/// * `expression`: The text-representation of the infix expression.
///
/// returns: The tokens of the expression, in postfix order.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::{to_postfix, tokens_to_string};
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = to_postfix("12+3*(4-1)")?;
/// assert_eq!(tokens_to_string(&postfix_tokens), "12 3 4 1 - * +");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn to_postfix(expression: &str) -> Result<Vec<Token>> {
    let infix_tokens = lexer::tokenize(expression)?;
    debug!("Infix tokens: {}", tokens_to_string(&infix_tokens));
    let postfix_tokens = parser::parse(infix_tokens)?;
    debug!("Postfix tokens: {}", tokens_to_string(&postfix_tokens));
    Ok(postfix_tokens)
}

/// Prints the given tokens separated by single spaces.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A text-version of the given tokens.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::tokens_to_string;
/// use arithmetic_evaluator::interpreter::token::Token;
///
/// let tokens = vec![Token::Number(2.0), Token::Number(3.0), "^".parse().unwrap()];
/// assert_eq!(tokens_to_string(&tokens), "2 3 ^");
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> String {
    tokens.iter().join(" ")
}
