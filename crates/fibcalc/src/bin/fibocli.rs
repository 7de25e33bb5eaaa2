//! fibocli: print the first N Fibonacci numbers.

use std::io;

use fibcalc_cli::ui::print_error;
use fibcalc_lib::{app, config, errors, logging};

fn main() {
    let config = config::FibConfig::parse();
    logging::init(config.verbose);

    let stdout = io::stdout();
    if let Err(err) = app::run_fib(&config, &mut stdout.lock()) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::handle_error(&err));
    }
}
