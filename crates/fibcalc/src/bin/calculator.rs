//! calculator: interactive two-operand arithmetic on stdin/stdout.

use std::io;

use fibcalc_cli::ui::print_error;
use fibcalc_lib::{app, config, errors, logging};

fn main() {
    let config = config::CalcConfig::parse();
    logging::init(config.verbose);

    let stdin = io::stdin();
    let stdout = io::stdout();
    // Domain errors are part of the normal output, so only I/O failures
    // change the exit code.
    if let Err(err) = app::run_calc(&config, &mut stdin.lock(), &mut stdout.lock()) {
        print_error(&format!("{err:#}"));
        std::process::exit(errors::handle_error(&err));
    }
}
