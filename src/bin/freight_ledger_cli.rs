use std::{env, process};

use freight_ledger::{cli, init};

fn main() {
    init();

    if let Err(err) = cli::run(env::args().skip(1)) {
        cli::output::error(err);
        eprintln!("{}", cli::USAGE);
        process::exit(1);
    }
}
