use superqalc_core::{default_registry, one_line, CalcError, EvalConfig, Outcome};

fn exact(expr: &str) -> String {
    match one_line(default_registry(), expr, &EvalConfig::default()).unwrap() {
        Outcome::Exact(line) => line,
        Outcome::Approximate(line) => panic!("unexpected approximation: {}", line),
    }
}

#[test]
fn kilometers_to_meters() {
    assert_eq!(exact("100 km to m"), "100000.000000000000 m");
}

#[test]
fn conversions_are_fixed_point() {
    assert_eq!(exact("3 ft to in"), "36.000000000000 in");
    assert_eq!(exact("1 mi to ft"), "5280.000000000000 ft");
    assert_eq!(exact("2 atm to Pa"), "202650.000000000000 Pa");
    assert_eq!(exact("90 min to h"), "1.500000000000 h");
}

#[test]
fn every_unit_round_trips() {
    let registry = default_registry();
    for unit in registry.iter() {
        if unit.name.is_empty() {
            continue;
        }
        // The recovered target is the first (dimension, factor) match in
        // registration order; shadowed names (rad behind the dimensionless
        // entry, degC behind K) convert to their shadow.
        let expected = registry
            .iter()
            .find(|u| {
                u.dim == unit.dim && {
                    let f = u.factor.to_f64();
                    let v = unit.factor.to_f64();
                    (f - v).abs() / f64::max(1.0, v.abs()) < 1e-12
                }
            })
            .unwrap();
        let expr = format!("1 {} to {}", unit.name, unit.name);
        assert_eq!(
            exact(&expr),
            format!("1.000000000000 {}", expected.name),
            "round trip failed for {}",
            unit.name
        );
    }
}

#[test]
fn scaled_round_trips_to_si_base() {
    let registry = default_registry();
    for unit in registry.iter() {
        if unit.name.is_empty() || unit.dim.is_zero() {
            continue;
        }
        // Only dimensions that have a coherent (factor 1) named unit can
        // be addressed in a `to` expression.
        let si = match registry
            .iter()
            .find(|u| u.dim == unit.dim && !u.name.is_empty() && u.factor.to_f64() == 1.0)
        {
            Some(si) => si,
            None => continue, // e.g. liters: no named m^3 unit
        };
        let expr = format!("2 {} to {}", unit.name, si.name);
        let line = exact(&expr);
        let numeric: f64 = line
            .split_whitespace()
            .next()
            .unwrap()
            .parse()
            .expect("numeric prefix");
        let expected = 2.0 * unit.factor.to_f64();
        assert!(
            (numeric - expected).abs() <= 1e-12 * f64::max(1.0, expected.abs()),
            "{} gave {}, expected {}",
            expr,
            numeric,
            expected
        );
    }
}

#[test]
fn conversion_checks_dimensions() {
    let err = one_line(default_registry(), "3 s to m", &EvalConfig::default()).unwrap_err();
    assert_eq!(err, CalcError::UnitMismatch("to"));
    assert_eq!(err.to_string(), "Unit mismatch for to");
}

#[test]
fn unknown_conversion_targets() {
    // The right operand is a length of magnitude 2; no registered unit
    // has that factor.
    let err = one_line(default_registry(), "5 m to (2 m)", &EvalConfig::default()).unwrap_err();
    assert_eq!(err, CalcError::UnknownTargetUnit);
}

#[test]
fn degc_is_a_kelvin_placeholder() {
    // Affine temperature offsets are not implemented: degC carries
    // factor 1 in kelvin, and converting "to degC" resolves to the
    // earlier-registered K entry.
    assert_eq!(exact("300 K to degC"), "300.000000000000 K");
    assert_eq!(exact("0 degC + 0 K"), "0 K");
}
