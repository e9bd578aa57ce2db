use crate::interpreter::error::ExpressionError;
use anyhow::{bail, Result};
use std::fmt;
use std::fmt::Formatter;

/// A binary mathematical operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponentiate,
}

impl BinaryOperator {
    /// The operator written as a single character, or `None` if `symbol` is not an operator.
    pub fn from_symbol(symbol: char) -> Option<BinaryOperator> {
        match symbol {
            '+' => Some(BinaryOperator::Add),
            '-' => Some(BinaryOperator::Subtract),
            '*' => Some(BinaryOperator::Multiply),
            '/' => Some(BinaryOperator::Divide),
            '^' => Some(BinaryOperator::Exponentiate),
            _ => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            BinaryOperator::Add => '+',
            BinaryOperator::Subtract => '-',
            BinaryOperator::Multiply => '*',
            BinaryOperator::Divide => '/',
            BinaryOperator::Exponentiate => '^',
        }
    }

    /// All operators group to the left, exponentiation included: `2^3^2` is `(2^3)^2`.
    pub(crate) fn associativity(&self) -> Associativity {
        match self {
            BinaryOperator::Add
            | BinaryOperator::Subtract
            | BinaryOperator::Multiply
            | BinaryOperator::Divide
            | BinaryOperator::Exponentiate => Associativity::Left,
        }
    }

    pub(crate) fn precedence(&self) -> u8 {
        match self {
            BinaryOperator::Add | BinaryOperator::Subtract => 0,
            BinaryOperator::Multiply | BinaryOperator::Divide => 1,
            BinaryOperator::Exponentiate => 2,
        }
    }

    pub(crate) fn precedence_eq(&self, other: &Self) -> bool {
        self.precedence().eq(&other.precedence())
    }

    pub(crate) fn precedence_lt(&self, other: &Self) -> bool {
        self.precedence().lt(&other.precedence())
    }

    /// Applies the operator to the two operands, in textual order.
    ///
    /// # Arguments
    ///
    /// * `left_operand`: The operand written before the operator.
    /// * `right_operand`: The operand written after the operator.
    ///
    /// returns: The result, or an `ExpressionError` when dividing by zero or when the
    /// result is not a number. Overflow to infinity is not an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use arithmetic_evaluator::interpreter::operator::BinaryOperator;
    /// # use anyhow::Result;
    ///
    /// # fn main() -> Result<()> {
    /// let difference = BinaryOperator::Subtract.apply(10.0, 4.0)?;
    /// assert_eq!(difference, 6.0);
    /// # Ok::<(), anyhow::Error>(()) }
    /// ```
    pub fn apply(&self, left_operand: f64, right_operand: f64) -> Result<f64> {
        let result = match self {
            BinaryOperator::Add => left_operand + right_operand,
            BinaryOperator::Subtract => left_operand - right_operand,
            BinaryOperator::Multiply => left_operand * right_operand,
            BinaryOperator::Divide => {
                if right_operand == 0.0 {
                    bail!(ExpressionError::DivisionByZero);
                }
                left_operand / right_operand
            }
            BinaryOperator::Exponentiate => left_operand.powf(right_operand),
        };
        if result.is_nan() {
            bail!(ExpressionError::NonRealResult {
                operator: *self,
                left_operand,
                right_operand,
            });
        }
        Ok(result)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
