// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::iter::Peekable;
use std::str::Chars;

/// A lexical token. Resolution of identifiers and unit suffixes is the
/// evaluator's job; tokens carry text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Number literal, with the unit suffix that was glued directly onto
    /// it (`100km`), if any.
    Num {
        number: String,
        unit: Option<String>,
    },
    /// Bare identifier, usually a unit name.
    Ident(String),
    /// Operator character. Unrecognized characters also end up here and
    /// are rejected later, by the evaluator.
    Op(char),
    LParen,
    RParen,
    /// The textual conversion operator.
    To,
}

/// Characters that may open an identifier. `/` and `.` may only
/// continue one: a leading `/` has to stay the division operator.
fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '%'
}

/// Characters that may appear in identifiers and unit names.
fn is_ident_char(c: char) -> bool {
    is_ident_start(c) || c == '/' || c == '.'
}

#[derive(Clone)]
struct Scanner<'a>(Peekable<Chars<'a>>);

impl<'a> Scanner<'a> {
    /// Consumes a digit run into `buf`.
    fn digits(&mut self, buf: &mut String) {
        while let Some(&c) = self.0.peek() {
            if c.is_ascii_digit() {
                buf.push(c);
                self.0.next();
            } else {
                break;
            }
        }
    }

    /// Lexes a number starting at `first`: digits, at most one `.`, and
    /// an exponent only when digits actually follow the `e`/`E`. The dot
    /// and the exponent marker are only consumed when digits follow, so
    /// a trailing `.` stays outside the literal.
    fn number(&mut self, first: char) -> String {
        let mut num = String::new();
        if first == '.' {
            num.push('0');
            num.push('.');
        } else {
            num.push(first);
            self.digits(&mut num);
            if self.0.peek() == Some(&'.') {
                let mut ahead = self.clone();
                ahead.0.next();
                if matches!(ahead.0.peek(), Some(d) if d.is_ascii_digit()) {
                    self.0.next();
                    num.push('.');
                }
            }
        }
        self.digits(&mut num);

        if let Some(&e) = self.0.peek() {
            if e == 'e' || e == 'E' {
                let mut ahead = self.clone();
                ahead.0.next();
                let mut exp = String::new();
                exp.push(e);
                if let Some(&sign) = ahead.0.peek() {
                    if sign == '+' || sign == '-' {
                        ahead.0.next();
                        exp.push(sign);
                    }
                }
                if matches!(ahead.0.peek(), Some(c) if c.is_ascii_digit()) {
                    ahead.digits(&mut exp);
                    num.push_str(&exp);
                    *self = ahead;
                }
            }
        }
        num
    }

    /// Consumes a run of identifier characters.
    fn ident(&mut self, first: Option<char>) -> String {
        let mut id = String::new();
        if let Some(c) = first {
            id.push(c);
        }
        while let Some(&c) = self.0.peek() {
            if is_ident_char(c) {
                id.push(c);
                self.0.next();
            } else {
                break;
            }
        }
        id
    }
}

/// Single-pass lexer. Whitespace separates tokens and is otherwise
/// dropped; tokenization itself cannot fail.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut scanner = Scanner(input.chars().peekable());
    let mut out = Vec::new();

    while let Some(c) = scanner.0.next() {
        if c.is_whitespace() {
            continue;
        }
        let starts_number =
            c.is_ascii_digit() || (c == '.' && matches!(scanner.0.peek(), Some(d) if d.is_ascii_digit()));
        if starts_number {
            let number = scanner.number(c);
            // A unit glued straight onto the digits, as in `12cm`.
            let unit = match scanner.0.peek() {
                Some(&u) if is_ident_start(u) => Some(scanner.ident(None)),
                _ => None,
            };
            out.push(Token::Num { number, unit });
        } else if is_ident_start(c) {
            let id = scanner.ident(Some(c));
            if id == "to" {
                out.push(Token::To);
            } else {
                out.push(Token::Ident(id));
            }
        } else {
            out.push(match c {
                '(' => Token::LParen,
                ')' => Token::RParen,
                // `+ - * / ^` and, leniently, anything else.
                _ => Token::Op(c),
            });
        }
    }
    out
}
