// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types carried through evaluation: the dimension vector, the
//! tagged arbitrary-precision number, and their pairing.

mod dimension;
mod numeric;
mod quantity;

pub use dimension::{Dimension, BASE_SYMBOLS};
pub(crate) use numeric::decimal_digits;
pub use numeric::Numeric;
pub use quantity::Quantity;
