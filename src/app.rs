use std::io::{BufWriter, stdout};

use tracing::info;

use crate::{
    common::error::AppError,
    domain::ledger::Ledger,
    io::{reader, writer},
    worker::processor::Processor,
};

/// Runs a teller session.
///
/// `args[1]` is the request script; the transaction log goes to stdout.
/// When `args[2]` is given, the final account snapshot is written there as
/// CSV.
pub fn run<I, S>(args: I) -> Result<(), AppError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let args: Vec<String> = args.into_iter().map(|s| s.into()).collect();
    if args.len() < 2 {
        return Err(AppError::MissingArg);
    }
    let input_path = &args[1];
    let accounts_path = args.get(2);

    let file = std::fs::File::open(input_path)?;
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(file);
    let requests = reader::read_requests(&mut reader);

    let mut ledger = Ledger::new();
    let mut processor = Processor::new();

    for request in requests {
        let request = request.map_err(AppError::Parse)?;
        processor.process(&mut ledger, request);
    }
    info!(
        accounts = ledger.len(),
        entries = processor.log().entries().len(),
        "session finished"
    );

    let log = processor.into_log();
    let stdout = stdout();
    writer::write_log(BufWriter::new(stdout.lock()), &log)?;

    if let Some(path) = accounts_path {
        let file = std::fs::File::create(path)?;
        writer::write_accounts(BufWriter::new(file), ledger.accounts())?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_script_argument_is_an_error() {
        assert!(matches!(run(["bank_ledger"]), Err(AppError::MissingArg)));
    }

    #[test]
    fn unreadable_script_is_an_io_error() {
        let result = run(["bank_ledger", "/nonexistent/requests.csv"]);
        assert!(matches!(result, Err(AppError::Io(_))));
    }
}
