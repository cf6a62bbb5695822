// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::tokenizer::Token;
use crate::error::CalcError;

/// `to` binds loosest; `^` tightest. Unknown operator characters get 0
/// and fall through to the evaluator, which rejects them.
fn precedence(op: &Token) -> i32 {
    match op {
        Token::To => 1,
        Token::Op('+') | Token::Op('-') => 2,
        Token::Op('*') | Token::Op('/') => 3,
        Token::Op('^') => 5,
        _ => 0,
    }
}

fn is_right_assoc(op: &Token) -> bool {
    matches!(op, Token::Op('^'))
}

fn is_operand_start(token: &Token) -> bool {
    matches!(token, Token::Num { .. } | Token::Ident(_) | Token::LParen)
}

fn is_operand_end(token: &Token) -> bool {
    matches!(token, Token::Num { .. } | Token::Ident(_) | Token::RParen)
}

/// Dijkstra's shunting-yard: infix tokens to postfix.
///
/// Juxtaposed operands multiply: `5 m` and `(1+2)(3)` get an implicit
/// `*` at multiplication precedence, which is what lets `5 m + 12 cm`
/// mean five meters plus twelve centimeters.
pub fn to_postfix(tokens: Vec<Token>) -> Result<Vec<Token>, CalcError> {
    let mut output = Vec::new();
    let mut ops: Vec<Token> = Vec::new();
    let mut prev_was_operand = false;

    for token in tokens {
        if prev_was_operand && is_operand_start(&token) {
            push_operator(Token::Op('*'), &mut ops, &mut output);
        }
        prev_was_operand = is_operand_end(&token);

        match token {
            Token::Num { .. } | Token::Ident(_) => output.push(token),
            Token::Op(_) | Token::To => push_operator(token, &mut ops, &mut output),
            Token::LParen => ops.push(Token::LParen),
            Token::RParen => loop {
                match ops.pop() {
                    Some(Token::LParen) => break,
                    Some(op) => output.push(op),
                    None => return Err(CalcError::ParenMismatch),
                }
            },
        }
    }

    while let Some(op) = ops.pop() {
        if matches!(op, Token::LParen) {
            return Err(CalcError::ParenMismatch);
        }
        output.push(op);
    }
    Ok(output)
}

fn push_operator(op: Token, ops: &mut Vec<Token>, output: &mut Vec<Token>) {
    while let Some(top) = ops.last() {
        if matches!(top, Token::LParen) {
            break;
        }
        let pops = if is_right_assoc(&op) {
            precedence(&op) < precedence(top)
        } else {
            precedence(&op) <= precedence(top)
        };
        if pops {
            output.push(ops.pop().unwrap());
        } else {
            break;
        }
    }
    ops.push(op);
}

#[cfg(test)]
mod tests {
    use super::to_postfix;
    use crate::error::CalcError;
    use crate::parsing::tokenize;

    fn postfix(input: &str) -> Vec<String> {
        to_postfix(tokenize(input))
            .unwrap()
            .into_iter()
            .map(|t| format!("{:?}", t))
            .collect()
    }

    #[test]
    fn precedence_orders_output() {
        assert_eq!(
            postfix("1 + 2 * 3"),
            postfix("1 + (2 * 3)"),
        );
        assert_ne!(postfix("1 + 2 * 3"), postfix("(1 + 2) * 3"));
    }

    #[test]
    fn caret_is_right_associative() {
        assert_eq!(postfix("2^3^2"), postfix("2^(3^2)"));
        assert_ne!(postfix("2^3^2"), postfix("(2^3)^2"));
    }

    #[test]
    fn juxtaposition_multiplies() {
        assert_eq!(postfix("5 m"), postfix("5 * m"));
        assert_eq!(postfix("1 N * 2 m"), postfix("1 * N * 2 * m"));
        assert_eq!(postfix("2 (3)"), postfix("2 * (3)"));
    }

    #[test]
    fn conversion_binds_loosest() {
        assert_eq!(postfix("100 km to m"), postfix("(100 km) to m"));
    }

    #[test]
    fn mismatched_parens() {
        assert_eq!(
            to_postfix(tokenize("(2 + 3")).unwrap_err(),
            CalcError::ParenMismatch
        );
        assert_eq!(
            to_postfix(tokenize("2 + 3)")).unwrap_err(),
            CalcError::ParenMismatch
        );
    }
}
