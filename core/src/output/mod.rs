// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Result rendering: general-precision number formatting and the
//! unit-aware pretty printer.

mod fmt;
mod pretty;

pub use fmt::{approx_from_log10, general, general_f64};
pub use pretty::to_human;
