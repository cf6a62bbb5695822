// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use eyre::Result;
use std::io::{self, BufRead};
use superqalc_core::tower::format_tower;

/// Reads one exponent tower from stdin, writes the compact form.
fn main() -> Result<()> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    let tower = line.trim_end_matches(['\r', '\n']);
    println!("{}", format_tower(tower));
    Ok(())
}
