// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::{Arg, ArgAction, Command};
use eyre::Result;
use superqalc_core::{default_registry, one_line, EvalConfig, Outcome};

fn main() -> Result<()> {
    color_eyre::install()?;

    let matches = Command::new("superqalc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Unit-aware calculator with overflow-safe big-number arithmetic")
        .arg(
            Arg::new("EXPR")
                .help("Expression to evaluate, e.g. \"5 m + 12 cm\" or \"100 km to m\"")
                .required(true),
        )
        .arg(
            Arg::new("si")
                .long("si")
                .action(ArgAction::SetTrue)
                .help("Print the SI-coherent numeric with compound dimensions"),
        )
        .arg(
            Arg::new("max-digits")
                .long("max-digits")
                .value_name("N")
                .value_parser(clap::value_parser!(f64))
                .help("Estimated result digits beyond which exponentiation is approximated [default: 1e6]"),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .value_name("BITS")
                .value_parser(clap::value_parser!(u32).range(2..))
                .help("Mantissa width for float arithmetic [default: 256]"),
        )
        .get_matches();

    let expr = matches.get_one::<String>("EXPR").unwrap();
    let mut cfg = EvalConfig::default();
    cfg.prefer_si = matches.get_flag("si");
    if let Some(&max_digits) = matches.get_one::<f64>("max-digits") {
        cfg.max_digits = max_digits;
    }
    if let Some(&precision) = matches.get_one::<u32>("precision") {
        cfg.precision = precision;
    }

    match one_line(default_registry(), expr, &cfg) {
        Ok(Outcome::Exact(line)) => println!("{}", line),
        Ok(Outcome::Approximate(approx)) => {
            println!("warning: Floating point overflow");
            println!("{} ≈ {}", expr, approx);
        }
        // Tokenize/parse failures are real failures: stderr, exit 1.
        Err(err) if err.is_parse_error() => return Err(err.into()),
        // Evaluation errors are part of the result protocol: stdout,
        // exit 0.
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}
