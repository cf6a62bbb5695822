// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Rewrites exponent towers of "nice" numbers into compact scientific
//! form: `999^9999^999` becomes `1E3^(1E4^(1E3))`.
//!
//! A term that is a power of ten collapses to `1E<zeros>`, a run of k
//! nines rounds up to `1E<k>`, and everything else is echoed untouched.
//! The tower is split only at top-level carets and already-parenthesized
//! exponents are unwrapped before recursing, so running the formatter
//! over its own output changes nothing.

/// Formats one right-associative exponent tower.
pub fn format_tower(expr: &str) -> String {
    match split_top_level(expr) {
        None => rewrite_term(expr),
        Some((head, rest)) => {
            let rest = strip_outer_parens(rest);
            format!("{}^({})", rewrite_term(head), format_tower(rest))
        }
    }
}

/// Splits at the first `^` outside parentheses.
fn split_top_level(expr: &str) -> Option<(&str, &str)> {
    let mut depth = 0usize;
    for (i, c) in expr.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '^' if depth == 0 => return Some((&expr[..i], &expr[i + 1..])),
            _ => {}
        }
    }
    None
}

fn balanced(s: &str) -> bool {
    let mut depth = 0i32;
    for c in s.chars() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth < 0 {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

fn strip_outer_parens(mut s: &str) -> &str {
    while let Some(inner) = s
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .filter(|inner| balanced(inner))
    {
        s = inner;
    }
    s
}

fn rewrite_term(term: &str) -> String {
    let trimmed = term.trim_start_matches('0');
    if trimmed.is_empty() {
        return "0".to_owned();
    }
    if is_power_of_ten(trimmed) {
        return format!("1E{}", trimmed.len() - 1);
    }
    if is_all_nines(trimmed) {
        return format!("1E{}", trimmed.len());
    }
    term.to_owned()
}

fn is_power_of_ten(s: &str) -> bool {
    s.starts_with('1') && s[1..].bytes().all(|b| b == b'0')
}

fn is_all_nines(s: &str) -> bool {
    s.bytes().all(|b| b == b'9')
}
