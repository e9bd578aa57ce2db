use crate::interpreter::operator::BinaryOperator;
use std::error::Error;
use std::fmt;
use std::fmt::{Display, Formatter};

/// Which side of a parenthesis pair is missing its partner.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Parenthesis {
    /// A `(` that was never closed.
    Opening,
    /// A `)` without a preceding `(`.
    Closing,
}

/// Every way an expression can fail to evaluate.
///
/// The pipeline stages raise these through `anyhow`, so callers that need to tell
/// the kinds apart use `error.downcast_ref::<ExpressionError>()`.
#[derive(Debug, Clone, PartialEq)]
pub enum ExpressionError {
    /// The lexer found a character that is not a digit, whitespace, parenthesis or operator.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Character index into the input.
        position: usize,
    },
    /// A `)` has no matching `(`, or a `(` is left open at the end of the input.
    UnbalancedParentheses(Parenthesis),
    /// An operator was reached with fewer than two operands available, or there was
    /// nothing at all to evaluate.
    StackUnderflow {
        /// The operator that was missing operands, `None` for an empty expression.
        operator: Option<BinaryOperator>,
    },
    /// The right-hand operand of `/` was exactly zero.
    DivisionByZero,
    /// Evaluation finished with more than one value left over.
    MalformedExpression {
        /// Number of values left on the stack.
        operands: usize,
    },
    /// An operation produced NaN: a negative base raised to a non-integer exponent, or an
    /// overflowed intermediate such as `inf - inf` or `0 * inf`.
    NonRealResult {
        operator: BinaryOperator,
        left_operand: f64,
        right_operand: f64,
    },
}

impl ExpressionError {
    /// Stable name of the error kind, used when logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ExpressionError::InvalidCharacter { .. } => "invalid character",
            ExpressionError::UnbalancedParentheses(_) => "unbalanced parentheses",
            ExpressionError::StackUnderflow { .. } => "stack underflow",
            ExpressionError::DivisionByZero => "division by zero",
            ExpressionError::MalformedExpression { .. } => "malformed expression",
            ExpressionError::NonRealResult { .. } => "non-real result",
        }
    }
}

impl Display for ExpressionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ExpressionError::InvalidCharacter {
                character,
                position,
            } => write!(
                f,
                "Invalid character in input expression: '{}' at position {}",
                character, position
            ),
            ExpressionError::UnbalancedParentheses(Parenthesis::Opening) => {
                write!(f, "Unbalanced parentheses: '(' is never closed")
            }
            ExpressionError::UnbalancedParentheses(Parenthesis::Closing) => {
                write!(f, "Unbalanced parentheses: ')' has no matching '('")
            }
            ExpressionError::StackUnderflow {
                operator: Some(operator),
            } => write!(
                f,
                "Stack underflow: operator '{}' needs two operands",
                operator
            ),
            ExpressionError::StackUnderflow { operator: None } => {
                write!(f, "Stack underflow: there is nothing to evaluate")
            }
            ExpressionError::DivisionByZero => write!(f, "Division by zero"),
            ExpressionError::MalformedExpression { operands } => write!(
                f,
                "Malformed expression: {} values are left without an operator",
                operands
            ),
            ExpressionError::NonRealResult {
                operator,
                left_operand,
                right_operand,
            } => write!(
                f,
                "{} {} {} does not have a real-valued result",
                left_operand, operator, right_operand
            ),
        }
    }
}

impl Error for ExpressionError {}
