use std::process::ExitCode;

fn main() -> ExitCode {
    bank_ledger::common::logging::init();

    match bank_ledger::app::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
