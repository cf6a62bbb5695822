// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::output::fmt;
use crate::registry::Registry;
use crate::types::{Numeric, Quantity};

/// Display threshold for collapsing a scaled value to an integer.
const INT_SNAP: f64 = 1e-12;

fn numeric_string(value: &Numeric) -> String {
    match value {
        Numeric::Int(int) => int.to_string(),
        Numeric::Float(f) => fmt::general(f, 12),
    }
}

/// Renders a final value.
///
/// Dimensionless values print their numeric directly. Otherwise the
/// registry is scanned in registration order for the first unit of the
/// same dimension whose scaled magnitude falls in `[0.1, 1000)`; failing
/// that (or under `prefer_si`) the SI numeric is printed with the
/// compound dimension string.
pub fn to_human(quantity: &Quantity, registry: &Registry, prefer_si: bool) -> String {
    if quantity.dim.is_zero() {
        return numeric_string(&quantity.value);
    }

    if !prefer_si {
        let magnitude = quantity.value.estimate_magnitude();
        for unit in registry.units_with_dim(&quantity.dim) {
            let factor = unit.factor.to_f64();
            if factor == 0.0 {
                continue;
            }
            let scaled = magnitude / factor;
            if scaled.abs() >= 0.1 && scaled.abs() < 1000.0 {
                let rounded = scaled.round();
                if (scaled - rounded).abs() < INT_SNAP {
                    return format!("{} {}", rounded as i64, unit.name);
                }
                return format!("{} {}", fmt::general_f64(scaled, 12), unit.name);
            }
        }
    }

    format!(
        "{} {}",
        numeric_string(&quantity.value),
        quantity.dim.compound()
    )
}

#[cfg(test)]
mod tests {
    use super::to_human;
    use crate::registry::default_registry;
    use crate::types::{Numeric, Quantity};
    use rug::Integer;

    const PREC: u32 = 256;

    #[test]
    fn dimensionless_values() {
        let reg = default_registry();
        let int = Quantity::dimensionless(Numeric::Int(Integer::from(1024)));
        assert_eq!(to_human(&int, reg, false), "1024");

        let float = Quantity::from_literal("0.5", None, reg, PREC).unwrap();
        assert_eq!(to_human(&float, reg, false), "0.5");
    }

    #[test]
    fn picks_first_fitting_unit() {
        let reg = default_registry();
        let q = Quantity::from_literal("5.12", Some("m"), reg, PREC).unwrap();
        assert_eq!(to_human(&q, reg, false), "5.12 m");

        // 5000 meters read better as kilometers.
        let q = Quantity::from_literal("5", Some("km"), reg, PREC).unwrap();
        assert_eq!(to_human(&q, reg, false), "5 km");

        let q = Quantity::from_literal("2", Some("J"), reg, PREC).unwrap();
        assert_eq!(to_human(&q, reg, false), "2 J");
    }

    #[test]
    fn si_output_uses_compound_dimensions() {
        let reg = default_registry();
        let q = Quantity::from_literal("2", Some("J"), reg, PREC).unwrap();
        assert_eq!(to_human(&q, reg, true), "2 m^2*kg/s^2");
    }

    #[test]
    fn falls_back_when_no_unit_fits() {
        let reg = default_registry();
        // 10^9 meters: no length unit scales it into [0.1, 1000).
        let q = Quantity::from_literal("1e9", Some("m"), reg, PREC).unwrap();
        assert_eq!(to_human(&q, reg, false), "1e9 m");
    }
}
