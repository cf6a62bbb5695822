// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Everything that can go wrong while turning an expression into a result.
///
/// Only [`CalcError::ParenMismatch`] can occur before evaluation begins;
/// the CLI uses [`CalcError::is_parse_error`] to decide between a nonzero
/// exit (parse failure) and the `Error: …` result line (evaluation
/// failure).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error("Mismatched parentheses")]
    ParenMismatch,

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Unit mismatch for {0}")]
    UnitMismatch(&'static str),

    #[error("exponent must be unitless")]
    NonUnitlessExponent,

    #[error("division by zero")]
    DivByZero,

    #[error("unknown target unit for 'to'")]
    UnknownTargetUnit,

    #[error("invalid expression (stack size {0})")]
    StackUnbalanced(usize),

    #[error("stack underflow for {0}")]
    StackUnderflow(&'static str),

    #[error("invalid number literal: {0}")]
    NumberParseError(String),

    #[error("unknown operator '{0}'")]
    UnknownOperator(char),
}

impl CalcError {
    /// True for failures raised before evaluation starts.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, CalcError::ParenMismatch)
    }
}
