use std::process::ExitCode;

use supportdesk::ui::output;

fn main() -> ExitCode {
    match supportdesk::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
