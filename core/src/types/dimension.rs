// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Display symbols for the seven SI base dimensions, in canonical order:
/// length, mass, time, current, temperature, amount, luminous intensity.
pub const BASE_SYMBOLS: [&str; 7] = ["m", "kg", "s", "A", "K", "mol", "cd"];

/// Exponent vector over the seven SI base dimensions.
///
/// Multiplying two quantities adds their dimensions, dividing subtracts
/// them, and raising to an integer power scales every exponent. The zero
/// vector is dimensionless.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug)]
pub struct Dimension([i32; 7]);

impl Dimension {
    pub const LENGTH: Dimension = Dimension::base(0);
    pub const MASS: Dimension = Dimension::base(1);
    pub const TIME: Dimension = Dimension::base(2);
    pub const CURRENT: Dimension = Dimension::base(3);
    pub const TEMPERATURE: Dimension = Dimension::base(4);
    pub const AMOUNT: Dimension = Dimension::base(5);
    pub const LUMINOSITY: Dimension = Dimension::base(6);

    pub const fn zero() -> Dimension {
        Dimension([0; 7])
    }

    /// Dimension with exponent 1 on the given canonical axis.
    pub const fn base(index: usize) -> Dimension {
        let mut exps = [0; 7];
        exps[index] = 1;
        Dimension(exps)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0; 7]
    }

    /// Scales every exponent, for integer powers of a quantity.
    pub fn pow(&self, exp: i32) -> Dimension {
        let mut exps = self.0;
        for e in exps.iter_mut() {
            *e *= exp;
        }
        Dimension(exps)
    }

    pub fn exponents(&self) -> &[i32; 7] {
        &self.0
    }

    /// Compound form `m^2*kg/s^2`: positive exponents joined with `*`
    /// (or `1` when there are none), negated negative exponents after a
    /// single `/`.
    pub fn compound(&self) -> String {
        let mut numer: Vec<String> = Vec::new();
        let mut denom: Vec<String> = Vec::new();
        for (i, &p) in self.0.iter().enumerate() {
            if p == 0 {
                continue;
            }
            let (list, p) = if p > 0 {
                (&mut numer, p)
            } else {
                (&mut denom, -p)
            };
            if p == 1 {
                list.push(BASE_SYMBOLS[i].to_owned());
            } else {
                list.push(format!("{}^{}", BASE_SYMBOLS[i], p));
            }
        }
        let mut out = if numer.is_empty() {
            "1".to_owned()
        } else {
            numer.join("*")
        };
        if !denom.is_empty() {
            out.push('/');
            out.push_str(&denom.join("*"));
        }
        out
    }
}

impl Add for Dimension {
    type Output = Dimension;

    fn add(self, rhs: Dimension) -> Dimension {
        let mut exps = self.0;
        for (e, r) in exps.iter_mut().zip(rhs.0.iter()) {
            *e += r;
        }
        Dimension(exps)
    }
}

impl Sub for Dimension {
    type Output = Dimension;

    fn sub(self, rhs: Dimension) -> Dimension {
        let mut exps = self.0;
        for (e, r) in exps.iter_mut().zip(rhs.0.iter()) {
            *e -= r;
        }
        Dimension(exps)
    }
}

impl Mul<i32> for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: i32) -> Dimension {
        self.pow(rhs)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "{}", self.compound())
    }
}
