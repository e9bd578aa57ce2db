use crate::interpreter::error::{ExpressionError, Parenthesis};
use crate::interpreter::operator::{Associativity, BinaryOperator};
use crate::interpreter::token::Token;
use anyhow::{bail, Context, Result};
use log::trace;

pub(super) fn infix_to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut operators: Vec<Token> = vec![];
    let mut output: Vec<Token> = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParenthesis => operators.push(token),
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)?
            }
            Token::RightParenthesis => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    while let Some(token) = operators.pop() {
        match token {
            Token::LeftParenthesis => {
                bail!(ExpressionError::UnbalancedParentheses(Parenthesis::Opening))
            }
            Token::Operator(_) => output.push(token),
            token => bail!("Found non-operator {} in operator stack", token),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => bail!(ExpressionError::UnbalancedParentheses(Parenthesis::Closing)),
            // Discard the open parenthesis.
            Some(Token::LeftParenthesis) => return Ok(()),
            Some(token) => output.push(token),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) -> Result<()> {
    while let Some(top_of_operator_stack) = operators.last() {
        let other_operator = match top_of_operator_stack {
            Token::LeftParenthesis => break,
            Token::Operator(other_operator) => *other_operator,
            token => bail!("Found non-operator {} in operator stack", token),
        };
        if other_operator.precedence_lt(&operator)
            || (other_operator.precedence_eq(&operator)
                && operator.associativity() == Associativity::Right)
        {
            break;
        }

        let other_operator_token = operators.pop().context("No operators left.")?;
        trace!(
            "Moved {} from the operator stack to the output",
            other_operator_token
        );
        output.push(other_operator_token);
    }

    operators.push(Token::Operator(operator));
    Ok(())
}
