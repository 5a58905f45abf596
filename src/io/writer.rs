use std::io::Write;

use crate::{domain::account::Account, worker::log::TransactionLog};

#[derive(serde::Serialize)]
/// Internal CSV output row for the account snapshot.
///
/// Headers written (in this order): `account,holder,balance`.
struct OutputRow<'a> {
    account: &'a str,
    holder: &'a str,
    balance: String,
}

/// Writes the transaction log as text, one entry per line.
///
/// Each completed transaction (the entry reporting the new balance) is
/// followed by a blank line.
pub fn write_log<W: Write>(mut writer: W, log: &TransactionLog) -> std::io::Result<()> {
    for entry in log.entries() {
        writeln!(writer, "{entry}")?;
        if entry.ends_block() {
            writeln!(writer)?;
        }
    }
    writer.flush()
}

/// Writes an account snapshot as CSV, in the order the accounts were opened.
///
/// Balances are formatted with exactly 4 decimal places.
///
/// # Errors
///
/// Returns a `csv::Error` if writing/serializing any row fails.
///
/// # Examples
///
/// ```
/// use bank_ledger::io::writer::write_accounts;
/// use bank_ledger::domain::account::Account;
/// use bank_ledger::common::money::Money;
///
/// let accounts = vec![Account::new("A1", "Alice", Money::new(12_500))];
///
/// let mut out = Vec::new();
/// write_accounts(&mut out, &accounts).unwrap();
///
/// let s = String::from_utf8(out).unwrap();
/// assert_eq!(s, "account,holder,balance\nA1,Alice,1.2500\n");
/// ```
pub fn write_accounts<W: Write>(writer: W, accounts: &[Account]) -> Result<(), csv::Error> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for acc in accounts {
        wtr.serialize(OutputRow {
            account: acc.id(),
            holder: acc.holder_name(),
            balance: acc.balance().to_string_4dp(),
        })?;
    }

    wtr.flush()?;
    Ok(())
}
