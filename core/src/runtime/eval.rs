// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::CalcError;
use crate::output::{approx_from_log10, to_human};
use crate::parsing::Token;
use crate::registry::Registry;
use crate::types::{decimal_digits, Numeric, Quantity};
use rug::ops::Pow;
use rug::{Float, Integer};

/// Integer exponents above this go through the float path even when the
/// estimate says the result would fit.
const MAX_INT_POW: u32 = 1_000_000;

/// Integer exponents with more decimal digits than this are not worth
/// estimating; the result is approximated symbolically.
const MAX_EXP_DIGITS: usize = 18;

/// Relative tolerance when matching a conversion target's factor.
const TARGET_TOLERANCE: f64 = 1e-12;

/// Evaluation knobs, all settable from the CLI.
#[derive(Clone, Debug)]
pub struct EvalConfig {
    /// Overflow threshold: estimated result digits beyond this switch to
    /// the scientific approximation.
    pub max_digits: f64,
    /// Mantissa width, in bits, for every float produced during
    /// evaluation.
    pub precision: u32,
    /// Always print SI numerics with compound dimensions.
    pub prefer_si: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        EvalConfig {
            max_digits: 1e6,
            precision: 256,
            prefer_si: false,
        }
    }
}

/// What evaluating a postfix stream produces.
#[derive(Debug)]
pub enum Evaluated {
    /// A value for the pretty printer.
    Value(Quantity),
    /// A `to` conversion; already formatted with the target unit.
    Converted(String),
    /// The overflow escape fired; the string is a scientific
    /// approximation of the true result.
    Approximate(String),
}

enum Power {
    Value(Quantity),
    Approximate(String),
}

/// Runs the stack machine over a postfix token stream.
pub fn eval_postfix(
    tokens: &[Token],
    registry: &Registry,
    cfg: &EvalConfig,
) -> Result<Evaluated, CalcError> {
    let mut stack: Vec<Quantity> = Vec::new();

    for token in tokens {
        match token {
            Token::Num { number, unit } => {
                let q = Quantity::from_literal(number, unit.as_deref(), registry, cfg.precision)?;
                stack.push(q);
            }
            Token::Ident(name) => {
                stack.push(Quantity::unit_value(name, registry, cfg.precision)?);
            }
            Token::To => {
                let (unitv, value) = pop2(&mut stack, "to")?;
                return convert(&value, &unitv, registry).map(Evaluated::Converted);
            }
            Token::Op('+') => {
                let (b, a) = pop2(&mut stack, "+")?;
                stack.push(a.try_add(&b, cfg.precision)?);
            }
            Token::Op('-') => {
                let (b, a) = pop2(&mut stack, "-")?;
                stack.push(a.try_sub(&b, cfg.precision)?);
            }
            Token::Op('*') => {
                let (b, a) = pop2(&mut stack, "*")?;
                stack.push(a.mul(&b, cfg.precision));
            }
            Token::Op('/') => {
                let (b, a) = pop2(&mut stack, "/")?;
                stack.push(a.try_div(&b, cfg.precision)?);
            }
            Token::Op('^') => {
                let (exponent, base) = pop2(&mut stack, "^")?;
                match power(base, exponent, registry, cfg)? {
                    Power::Value(q) => stack.push(q),
                    Power::Approximate(s) => return Ok(Evaluated::Approximate(s)),
                }
            }
            Token::Op(other) => return Err(CalcError::UnknownOperator(*other)),
            Token::LParen | Token::RParen => {
                panic!("parentheses do not survive the shunting-yard")
            }
        }
    }

    if stack.len() != 1 {
        return Err(CalcError::StackUnbalanced(stack.len()));
    }
    Ok(Evaluated::Value(stack.pop().unwrap()))
}

fn pop2(stack: &mut Vec<Quantity>, op: &'static str) -> Result<(Quantity, Quantity), CalcError> {
    let b = stack.pop().ok_or(CalcError::StackUnderflow(op))?;
    let a = stack.pop().ok_or(CalcError::StackUnderflow(op))?;
    Ok((b, a))
}

/// The `to` operator. The right operand arrived as a `1 × unit` value;
/// the unit it came from is recovered by matching (dimension, factor)
/// against the registry, first match in registration order winning.
fn convert(value: &Quantity, unitv: &Quantity, registry: &Registry) -> Result<String, CalcError> {
    let unit_magnitude = unitv.value.estimate_magnitude();
    let target = registry
        .iter()
        .find(|u| {
            u.dim == unitv.dim && {
                let f = u.factor.to_f64();
                (f - unit_magnitude).abs() / f64::max(1.0, unit_magnitude.abs()) < TARGET_TOLERANCE
            }
        })
        .ok_or(CalcError::UnknownTargetUnit)?;

    if value.dim != target.dim {
        return Err(CalcError::UnitMismatch("to"));
    }

    let converted = value.value.estimate_magnitude() / target.factor.to_f64();
    Ok(format!("{:.12} {}", converted, target.name))
}

/// Exponentiation with the overflow escape.
///
/// Order matters: absurdly long integer exponents short-circuit before
/// any magnitude math, then the log10 estimate decides between the
/// scientific approximation and an exact computation (integer power when
/// cheap, `exp(e·ln b)` otherwise).
fn power(
    base: Quantity,
    exponent: Quantity,
    registry: &Registry,
    cfg: &EvalConfig,
) -> Result<Power, CalcError> {
    if !exponent.dim.is_zero() {
        return Err(CalcError::NonUnitlessExponent);
    }

    let log10_base = base.value.estimate_log10();

    if let Numeric::Int(exp) = &exponent.value {
        let digits = decimal_digits(exp);
        if digits > MAX_EXP_DIGITS {
            let pretty = to_human(&base, registry, cfg.prefer_si);
            return Ok(Power::Approximate(format!("{}^(1E{})", pretty, digits - 1)));
        }
    }

    let est = exponent.value.to_f64() * log10_base;
    if !est.is_finite() || est > cfg.max_digits {
        return Ok(Power::Approximate(approx_from_log10(est)));
    }

    if let (Numeric::Int(b), Numeric::Int(e)) = (&base.value, &exponent.value) {
        if let Some(k) = e.to_u32().filter(|&k| k <= MAX_INT_POW) {
            return Ok(Power::Value(Quantity {
                value: Numeric::Int(Integer::from(b.pow(k))),
                dim: base.dim * k as i32,
            }));
        }
    }

    let ln_base = base.value.to_float(cfg.precision).ln();
    let exp_f = exponent.value.to_float(cfg.precision);
    let value = Float::with_val(cfg.precision, &ln_base * &exp_f).exp();
    // Integer exponents scale the dimension; fractional powers of a
    // dimensioned quantity keep it unchanged, as an approximation.
    let dim = match &exponent.value {
        Numeric::Int(exp) => exp.to_i32().map(|k| base.dim * k).unwrap_or(base.dim),
        Numeric::Float(_) => base.dim,
    };
    Ok(Power::Value(Quantity {
        value: Numeric::Float(value),
        dim,
    }))
}

#[cfg(test)]
mod tests {
    use super::{eval_postfix, EvalConfig, Evaluated};
    use crate::error::CalcError;
    use crate::parsing::{to_postfix, tokenize};
    use crate::registry::default_registry;
    use crate::types::Numeric;

    fn eval(expr: &str) -> Result<Evaluated, CalcError> {
        let tokens = to_postfix(tokenize(expr)).unwrap();
        eval_postfix(&tokens, default_registry(), &EvalConfig::default())
    }

    #[test]
    fn integer_power_is_exact() {
        match eval("2^10").unwrap() {
            Evaluated::Value(q) => match q.value {
                Numeric::Int(i) => assert_eq!(i, 1024),
                other => panic!("expected integer, got {:?}", other),
            },
            other => panic!("expected value, got {:?}", other),
        }
    }

    #[test]
    fn zero_base_estimates_degrade_to_zero() {
        // log10(0) is -inf, so the estimate is non-finite and the escape
        // fires with the degenerate "0" approximation.
        match eval("0^2").unwrap() {
            Evaluated::Approximate(s) => assert_eq!(s, "0"),
            other => panic!("expected approximation, got {:?}", other),
        }
    }

    #[test]
    fn unknown_operators_are_rejected() {
        assert_eq!(eval("2 ? 3").unwrap_err(), CalcError::UnknownOperator('?'));
    }

    #[test]
    fn underflow_and_unbalance() {
        assert_eq!(eval("+ 3").unwrap_err(), CalcError::StackUnderflow("+"));
        assert_eq!(eval("()").unwrap_err(), CalcError::StackUnbalanced(0));
    }
}
