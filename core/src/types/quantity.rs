// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::CalcError;
use crate::registry::Registry;
use crate::types::{Dimension, Numeric};
use rug::{Float, Integer};

/// A number together with its physical dimension.
///
/// The numeric is always SI-coherent: `5 km` is stored as 5000 with the
/// length dimension. Arithmetic updates value and dimension together;
/// the exact-integer representation survives only while the dimension is
/// zero.
#[derive(Clone, Debug)]
pub struct Quantity {
    pub value: Numeric,
    pub dim: Dimension,
}

impl Quantity {
    pub fn dimensionless(value: Numeric) -> Quantity {
        Quantity {
            value,
            dim: Dimension::zero(),
        }
    }

    /// Builds a quantity from a number literal and an optional unit name.
    ///
    /// Without a unit, integer-looking literals stay exact integers. A
    /// unit forces the float representation, multiplies in the unit's
    /// factor and adopts its dimension; an unresolvable name (direct or
    /// via the registry's fallback) is `UnknownUnit`.
    pub fn from_literal(
        number: &str,
        unit: Option<&str>,
        registry: &Registry,
        prec: u32,
    ) -> Result<Quantity, CalcError> {
        let unit = unit.filter(|u| !u.is_empty());
        let value = Numeric::parse(number, unit.is_some(), prec)?;
        match unit {
            None => Ok(Quantity::dimensionless(value)),
            Some(name) => {
                let unit = registry
                    .lookup(name)
                    .ok_or_else(|| CalcError::UnknownUnit(name.to_owned()))?;
                let si = Float::with_val(prec, value.to_float(prec) * &unit.factor);
                Ok(Quantity {
                    value: Numeric::Float(si),
                    dim: unit.dim,
                })
            }
        }
    }

    /// The value `1 × unit`, what a bare identifier evaluates to.
    pub fn unit_value(name: &str, registry: &Registry, prec: u32) -> Result<Quantity, CalcError> {
        Quantity::from_literal("1", Some(name), registry, prec)
    }

    pub fn try_add(&self, other: &Quantity, prec: u32) -> Result<Quantity, CalcError> {
        if self.dim != other.dim {
            return Err(CalcError::UnitMismatch("+"));
        }
        let sum = Float::with_val(prec, self.value.to_float(prec) + other.value.to_float(prec));
        Ok(Quantity {
            value: Numeric::Float(sum),
            dim: self.dim,
        })
    }

    pub fn try_sub(&self, other: &Quantity, prec: u32) -> Result<Quantity, CalcError> {
        if self.dim != other.dim {
            return Err(CalcError::UnitMismatch("-"));
        }
        let diff = Float::with_val(prec, self.value.to_float(prec) - other.value.to_float(prec));
        Ok(Quantity {
            value: Numeric::Float(diff),
            dim: self.dim,
        })
    }

    /// Dimension exponents add. The product stays an exact integer only
    /// when both operands are integers and the result is dimensionless.
    pub fn mul(&self, other: &Quantity, prec: u32) -> Quantity {
        let dim = self.dim + other.dim;
        let value = match (&self.value, &other.value) {
            (Numeric::Int(a), Numeric::Int(b)) if dim.is_zero() => {
                Numeric::Int(Integer::from(a * b))
            }
            _ => Numeric::Float(Float::with_val(
                prec,
                self.value.to_float(prec) * other.value.to_float(prec),
            )),
        };
        Quantity { value, dim }
    }

    /// Dimension exponents subtract; the quotient is always a float.
    pub fn try_div(&self, other: &Quantity, prec: u32) -> Result<Quantity, CalcError> {
        let denom = other.value.to_float(prec);
        if denom.is_zero() {
            return Err(CalcError::DivByZero);
        }
        let quot = Float::with_val(prec, self.value.to_float(prec) / denom);
        Ok(Quantity {
            value: Numeric::Float(quot),
            dim: self.dim - other.dim,
        })
    }
}
