// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Lexing and infix-to-postfix translation.

mod shunting;
mod tokenizer;

pub use shunting::to_postfix;
pub use tokenizer::{tokenize, Token};
