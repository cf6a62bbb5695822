// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Expression engine behind the `superqalc` CLI: a tokenizer, a
//! shunting-yard translator, and a stack evaluator that carries an
//! arbitrary-precision numeric and a seven-dimensional SI exponent
//! vector through every operation.
//!
//! Values are exact unbounded integers until a unit factor or a
//! fractional operation forces them onto configurable-precision floats
//! (256-bit mantissas by default). Exponentiation estimates the size of
//! its result first and degrades to a scientific-notation approximation
//! instead of materializing numbers with more digits than the configured
//! budget.
//!
//! ## Example
//!
//! ```rust
//! use superqalc_core::{default_registry, one_line, EvalConfig, Outcome};
//!
//! let cfg = EvalConfig::default();
//! match one_line(default_registry(), "5 m + 12 cm", &cfg).unwrap() {
//!     Outcome::Exact(line) => assert_eq!(line, "5.12 m"),
//!     Outcome::Approximate(_) => unreachable!(),
//! }
//! ```

pub mod error;
pub mod output;
pub mod parsing;
pub mod registry;
pub mod runtime;
pub mod tower;
pub mod types;

pub use crate::error::CalcError;
pub use crate::registry::{default_registry, Registry, Unit};
pub use crate::runtime::{eval_postfix, EvalConfig, Evaluated};
pub use crate::types::{Dimension, Numeric, Quantity};

/// A finished evaluation, rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The result line, exact up to display precision.
    Exact(String),
    /// The overflow escape fired; the caller should warn that this is an
    /// approximation.
    Approximate(String),
}

/// Parses and evaluates a whole expression, rendering the result.
///
/// Errors before evaluation ([`CalcError::is_parse_error`]) are the
/// caller's cue for a nonzero exit; evaluation errors become the result
/// line by contract.
pub fn one_line(registry: &Registry, expr: &str, cfg: &EvalConfig) -> Result<Outcome, CalcError> {
    let tokens = parsing::tokenize(expr);
    let postfix = parsing::to_postfix(tokens)?;
    Ok(match runtime::eval_postfix(&postfix, registry, cfg)? {
        Evaluated::Value(q) => Outcome::Exact(output::to_human(&q, registry, cfg.prefer_si)),
        Evaluated::Converted(line) => Outcome::Exact(line),
        Evaluated::Approximate(approx) => Outcome::Approximate(approx),
    })
}
