// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use rug::Float;

/// Splits one of rug's decimal strings into sign, bare digits, and the
/// exponent adjusted so the value reads `±0.digits × 10^exp`, with
/// leading zeros normalized away.
fn decompose(raw: &str) -> (bool, String, i32) {
    let negative = raw.starts_with('-');
    let start = usize::from(negative);
    let e_pos = raw.find(['e', 'E']);
    let end = e_pos.unwrap_or(raw.len());

    let mut digits = String::new();
    let mut dot_pos = None;
    for (i, ch) in raw[start..end].chars().enumerate() {
        if ch == '.' {
            dot_pos = Some(i as i32);
        } else {
            digits.push(ch);
        }
    }
    let raw_exp: i32 = e_pos
        .map(|p| raw[p + 1..].parse().unwrap_or(0))
        .unwrap_or(0);
    let mut exp = match dot_pos {
        Some(pos) => raw_exp + pos,
        None => raw_exp + digits.len() as i32,
    };
    while digits.starts_with('0') {
        digits.remove(0);
        exp -= 1;
    }
    (negative, digits, exp)
}

/// `%g`-style rendering with `sig` significant digits: fixed notation in
/// a readable range, `<digits>e<exp>` outside it, trailing zeros
/// trimmed.
pub fn general(value: &Float, sig: usize) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value.is_sign_negative() { "-inf" } else { "inf" }.to_owned();
    }
    if value.is_zero() {
        return "0".to_owned();
    }

    let raw = value.to_string_radix(10, Some(sig));
    let (negative, digits, exp) = decompose(&raw);
    if digits.is_empty() {
        return "0".to_owned();
    }

    let sci_exp = exp - 1;
    let body = if sci_exp < -4 || sci_exp >= sig as i32 {
        let (first, rest) = digits.split_at(1);
        let rest = rest.trim_end_matches('0');
        if rest.is_empty() {
            format!("{}e{}", first, sci_exp)
        } else {
            format!("{}.{}e{}", first, rest, sci_exp)
        }
    } else if exp <= 0 {
        let frac = digits.trim_end_matches('0');
        format!("0.{}{}", "0".repeat(-exp as usize), frac)
    } else if exp as usize >= digits.len() {
        format!("{}{}", digits, "0".repeat(exp as usize - digits.len()))
    } else {
        let (int_part, frac_part) = digits.split_at(exp as usize);
        let frac_part = frac_part.trim_end_matches('0');
        if frac_part.is_empty() {
            int_part.to_owned()
        } else {
            format!("{}.{}", int_part, frac_part)
        }
    };

    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

/// [`general`] for a machine float.
pub fn general_f64(value: f64, sig: usize) -> String {
    general(&Float::with_val(53, value), sig)
}

/// Scientific stand-in for a result whose log10 is known but whose digits
/// are not worth materializing: `10^frac` followed by `E<integer part>`.
/// A non-finite estimate degrades to `"0"`.
pub fn approx_from_log10(log10: f64) -> String {
    if !log10.is_finite() {
        return "0".to_owned();
    }
    let int_part = log10.trunc();
    let mantissa = 10f64.powf(log10 - int_part);
    format!("{:.9e}E{}", mantissa, int_part as i64)
}
