use crate::interpreter::error::ExpressionError;
use crate::interpreter::token::Token;
use anyhow::{bail, Result};
use log::trace;

/// Computes the value of an expression given in postfix notation.
///
/// # Arguments
///
/// * `postfix_tokens`: Tokens, ordered in postfix notation, to evaluate.
///
/// returns: The single value the tokens reduce to.
///
/// # Examples
///
/// ```
/// use arithmetic_evaluator::interpreter::evaluator::evaluate_postfix;
/// use arithmetic_evaluator::interpreter::operator::BinaryOperator;
/// use arithmetic_evaluator::interpreter::token::Token;
/// # use anyhow::Result;
///
/// # fn main() -> Result<()> {
/// let postfix_tokens = vec![
///     Token::Number(7.0),
///     Token::Number(2.0),
///     Token::Operator(BinaryOperator::Subtract),
/// ];
/// assert_eq!(evaluate_postfix(postfix_tokens)?, 5.0);
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn evaluate_postfix(postfix_tokens: Vec<Token>) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();

    for token in postfix_tokens {
        match token {
            Token::Number(value) => operands.push(value),
            Token::Operator(operator) => {
                let underflow = ExpressionError::StackUnderflow {
                    operator: Some(operator),
                };
                let right_operand = operands.pop().ok_or_else(|| underflow.clone())?;
                let left_operand = operands.pop().ok_or(underflow)?;

                let result = operator.apply(left_operand, right_operand)?;
                trace!(
                    "{} {} {} = {}",
                    left_operand,
                    operator,
                    right_operand,
                    result
                );
                operands.push(result);
            }
            Token::LeftParenthesis | Token::RightParenthesis => {
                bail!("There should not be any parenthesis present in the input")
            }
        }
    }

    match operands.len() {
        0 => bail!(ExpressionError::StackUnderflow { operator: None }),
        1 => Ok(operands[0]),
        count => bail!(ExpressionError::MalformedExpression { operands: count }),
    }
}
