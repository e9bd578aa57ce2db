mod infix_converter;

use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use anyhow::Result;

/// Reorders the given infix tokens into postfix notation, so that every operator
/// comes after both of its operands and no parentheses are needed.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same numbers and operators in postfix format.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use arithmetic_evaluator::interpreter::lexer::tokenize;
/// use arithmetic_evaluator::interpreter::parser::parse;
/// use arithmetic_evaluator::interpreter::tokens_to_string;
///
/// let infix_tokens = tokenize("2 * (3 + 4)")?;
/// let postfix_tokens = parse(infix_tokens)?;
/// assert_eq!(tokens_to_string(&postfix_tokens), "2 3 4 + *");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    infix_to_postfix(infix_tokens)
}
