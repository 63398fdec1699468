//! gitbind binary entry point.

use std::process::ExitCode;

use gitbind::ui::output;

fn main() -> ExitCode {
    match gitbind::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(format!("{:#}", err));
            ExitCode::FAILURE
        }
    }
}
