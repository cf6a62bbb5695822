// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::types::Dimension;
use once_cell::sync::Lazy;
use rug::{float::Constant, Float};
use std::collections::BTreeMap;

/// Unit factors are stored at a fixed width, independently of the
/// precision the evaluator runs at.
const FACTOR_PREC: u32 = 256;

/// A named unit: multiplying a numeric value expressed in this unit by
/// `factor` yields the SI-coherent numeric of its dimension.
#[derive(Clone, Debug)]
pub struct Unit {
    pub name: String,
    pub factor: Float,
    pub dim: Dimension,
}

/// Immutable name → unit table, populated once at startup.
///
/// Units are kept in registration order: the pretty printer takes the
/// first candidate whose scaled value lands in its display range, and the
/// `to` operator takes the first (dimension, factor) match, so the order
/// is part of the observable behavior. SI base units come first.
#[derive(Default, Debug)]
pub struct Registry {
    units: Vec<Unit>,
    by_name: BTreeMap<String, usize>,
}

impl Registry {
    /// Builds the standard table: SI base units, common prefixed lengths,
    /// time, derived SI, energy, pressure, imperial length and mass,
    /// angle and volume.
    pub fn standard() -> Registry {
        let mut reg = Registry::default();

        reg.add("m", factor("1"), Dimension::LENGTH);
        reg.add("kg", factor("1"), Dimension::MASS);
        reg.add("s", factor("1"), Dimension::TIME);
        reg.add("A", factor("1"), Dimension::CURRENT);
        reg.add("K", factor("1"), Dimension::TEMPERATURE);
        reg.add("mol", factor("1"), Dimension::AMOUNT);
        reg.add("cd", factor("1"), Dimension::LUMINOSITY);

        reg.add("", factor("1"), Dimension::zero());

        reg.add("cm", factor("0.01"), Dimension::LENGTH);
        reg.add("mm", factor("0.001"), Dimension::LENGTH);
        reg.add("km", factor("1000"), Dimension::LENGTH);
        reg.add("um", factor("1e-6"), Dimension::LENGTH);
        reg.add("nm", factor("1e-9"), Dimension::LENGTH);

        reg.add("min", factor("60"), Dimension::TIME);
        reg.add("h", factor("3600"), Dimension::TIME);
        reg.add("day", factor("86400"), Dimension::TIME);

        let newton = Dimension::MASS + Dimension::LENGTH + Dimension::TIME.pow(-2);
        let joule = newton + Dimension::LENGTH;
        let pascal = newton + Dimension::LENGTH.pow(-2);
        let watt = joule + Dimension::TIME.pow(-1);
        reg.add("N", factor("1"), newton);
        reg.add("J", factor("1"), joule);
        reg.add("Pa", factor("1"), pascal);
        reg.add("W", factor("1"), watt);
        reg.add("Hz", factor("1"), Dimension::TIME.pow(-1));

        reg.add("eV", factor("1.602176634e-19"), joule);

        reg.add("bar", factor("1e5"), pascal);
        reg.add("atm", factor("101325"), pascal);

        reg.add("in", factor("0.0254"), Dimension::LENGTH);
        reg.add("ft", factor("0.3048"), Dimension::LENGTH);
        reg.add("yd", factor("0.9144"), Dimension::LENGTH);
        reg.add("mi", factor("1609.344"), Dimension::LENGTH);

        reg.add("lb", factor("0.45359237"), Dimension::MASS);
        reg.add("oz", factor("0.028349523125"), Dimension::MASS);

        // Celsius needs an additive offset, which multiplicative factors
        // cannot express; the name resolves but behaves as kelvin.
        reg.add("degC", factor("1"), Dimension::TEMPERATURE);

        reg.add("rad", factor("1"), Dimension::zero());
        reg.add(
            "deg",
            Float::with_val(FACTOR_PREC, Constant::Pi) / 180,
            Dimension::zero(),
        );

        reg.add("L", factor("0.001"), Dimension::LENGTH.pow(3));

        reg
    }

    fn add(&mut self, name: &str, factor: Float, dim: Dimension) {
        self.by_name.insert(name.to_owned(), self.units.len());
        self.units.push(Unit {
            name: name.to_owned(),
            factor,
            dim,
        });
    }

    pub fn lookup_exact(&self, name: &str) -> Option<&Unit> {
        self.by_name.get(name).map(|&i| &self.units[i])
    }

    /// Exact lookup, then the fallback: strip one leading character at a
    /// time and retry. The stripped prefix contributes no magnitude, so
    /// `Mm` resolves to plain `m`.
    pub fn lookup(&self, name: &str) -> Option<&Unit> {
        if let Some(unit) = self.lookup_exact(name) {
            return Some(unit);
        }
        for (idx, _) in name.char_indices().skip(1) {
            if let Some(unit) = self.lookup_exact(&name[idx..]) {
                return Some(unit);
            }
        }
        None
    }

    /// All units sharing a dimension, in registration order.
    pub fn units_with_dim<'a>(&'a self, dim: &'a Dimension) -> impl Iterator<Item = &'a Unit> {
        self.units.iter().filter(move |u| u.dim == *dim)
    }

    /// All units in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Unit> {
        self.units.iter()
    }
}

static STANDARD: Lazy<Registry> = Lazy::new(Registry::standard);

/// The process-wide registry; built on first use, immutable afterwards.
pub fn default_registry() -> &'static Registry {
    &STANDARD
}

fn factor(literal: &str) -> Float {
    // Registration literals are known-good.
    Float::with_val(FACTOR_PREC, Float::parse(literal).unwrap())
}
