// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The postfix stack machine.

mod eval;

pub use eval::{eval_postfix, EvalConfig, Evaluated};
