use duelist::commands::Cli;
use duelist::libs::messages::macros::init_logging;
use duelist::msg_error;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    match Cli::menu() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            msg_error!(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}
