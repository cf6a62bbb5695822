// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::CalcError;
use rug::{Float, Integer};
use std::cmp::Ordering;

/// How many leading decimal digits feed the magnitude estimates. Enough
/// to fill an `f64` mantissa.
const LEAD_DIGITS: usize = 18;

/// Tagged arbitrary-precision number.
///
/// Exact integers are unbounded; everything else is a binary float whose
/// mantissa width is chosen by the caller (the CLI default is 256 bits).
/// Promotion from `Int` to `Float` is explicit and one-way.
#[derive(Clone, Debug)]
pub enum Numeric {
    Int(Integer),
    Float(Float),
}

impl Numeric {
    pub fn is_int(&self) -> bool {
        matches!(self, Numeric::Int(_))
    }

    /// Parses a literal. Integer unless the literal looks fractional
    /// (`.`, `e`, `E`) or `force_float` is set, e.g. because a unit
    /// factor is about to be applied.
    pub fn parse(literal: &str, force_float: bool, prec: u32) -> Result<Numeric, CalcError> {
        let looks_float = literal.contains(['.', 'e', 'E']);
        if !force_float && !looks_float {
            if let Ok(int) = Integer::from_str_radix(literal, 10) {
                return Ok(Numeric::Int(int));
            }
        }
        match Float::parse(literal) {
            Ok(parsed) => Ok(Numeric::Float(Float::with_val(prec, parsed))),
            Err(_) => Err(CalcError::NumberParseError(literal.to_owned())),
        }
    }

    pub fn to_float(&self, prec: u32) -> Float {
        match self {
            Numeric::Int(int) => Float::with_val(prec, int),
            Numeric::Float(f) => Float::with_val(prec, f),
        }
    }

    pub fn to_f64(&self) -> f64 {
        match self {
            Numeric::Int(int) => int.to_f64(),
            Numeric::Float(f) => f.to_f64(),
        }
    }

    /// Approximate log10 of the absolute value; negative infinity for
    /// zero.
    ///
    /// For integers this is derived from the decimal digit count plus the
    /// leading digits, so it stays finite even for integers far too large
    /// for `f64`. Floats go through the high-precision log.
    pub fn estimate_log10(&self) -> f64 {
        match self {
            Numeric::Int(int) => {
                if int.cmp0() == Ordering::Equal {
                    return f64::NEG_INFINITY;
                }
                let (digits, lead) = digits_and_lead(int);
                let take = digits.min(LEAD_DIGITS);
                let frac = lead.log10() - (take as f64 - 1.0);
                (digits as f64 - 1.0) + frac
            }
            Numeric::Float(f) => {
                if f.is_zero() {
                    return f64::NEG_INFINITY;
                }
                f.clone().abs().log10().to_f64()
            }
        }
    }

    /// Native-precision approximate magnitude, signed. Huge integers are
    /// synthesized from their leading digits instead of converted
    /// directly.
    pub fn estimate_magnitude(&self) -> f64 {
        match self {
            Numeric::Int(int) => {
                if int.cmp0() == Ordering::Equal {
                    return 0.0;
                }
                let (digits, lead) = digits_and_lead(int);
                let take = digits.min(LEAD_DIGITS);
                let magnitude = lead * 10f64.powi((digits - take) as i32);
                if int.cmp0() == Ordering::Less {
                    -magnitude
                } else {
                    magnitude
                }
            }
            Numeric::Float(f) => f.to_f64(),
        }
    }
}

/// Decimal digit count of the absolute value.
pub(crate) fn decimal_digits(int: &Integer) -> usize {
    let s = int.to_string();
    s.len() - usize::from(s.starts_with('-'))
}

/// Digit count plus the value of the first `LEAD_DIGITS` decimal digits.
fn digits_and_lead(int: &Integer) -> (usize, f64) {
    let s = int.to_string();
    let s = s.strip_prefix('-').unwrap_or(&s);
    let take = s.len().min(LEAD_DIGITS);
    // At most 18 digits, always a clean f64 parse.
    let lead: f64 = s[..take].parse().unwrap();
    (s.len(), lead)
}

#[cfg(test)]
mod tests {
    use super::{decimal_digits, Numeric};
    use rug::ops::Pow;
    use rug::Integer;

    #[test]
    fn parse_literals() {
        assert!(Numeric::parse("1024", false, 256).unwrap().is_int());
        assert!(!Numeric::parse("10.5", false, 256).unwrap().is_int());
        assert!(!Numeric::parse("2e3", false, 256).unwrap().is_int());
        assert!(!Numeric::parse("7", true, 256).unwrap().is_int());
        assert!(Numeric::parse("1.2.3", false, 256).is_err());
    }

    #[test]
    fn log10_of_integers() {
        let googol = Numeric::Int(Integer::from(10).pow(100));
        assert!((googol.estimate_log10() - 100.0).abs() < 1e-9);

        let nine = Numeric::Int(Integer::from(9));
        assert!((nine.estimate_log10() - 9f64.log10()).abs() < 1e-12);

        let zero = Numeric::Int(Integer::new());
        assert_eq!(zero.estimate_log10(), f64::NEG_INFINITY);
    }

    #[test]
    fn log10_stays_finite_for_huge_integers() {
        // Far beyond f64 range; a direct conversion would overflow.
        let huge = Numeric::Int(Integer::from(7) * Integer::from(10).pow(500));
        let log = huge.estimate_log10();
        assert!(log.is_finite());
        assert!((log - (500.0 + 7f64.log10())).abs() < 1e-9);
    }

    #[test]
    fn magnitude_estimates() {
        let n = Numeric::Int(Integer::from(123456));
        assert!((n.estimate_magnitude() - 123456.0).abs() < 1e-6);

        let neg = Numeric::Int(Integer::from(-42));
        assert!((neg.estimate_magnitude() + 42.0).abs() < 1e-9);
    }

    #[test]
    fn digit_counts() {
        assert_eq!(decimal_digits(&Integer::from(0)), 1);
        assert_eq!(decimal_digits(&Integer::from(-999)), 3);
        assert_eq!(decimal_digits(&Integer::from(10).pow(18)), 19);
    }
}
