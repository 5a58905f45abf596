use std::fmt;

use chrono::NaiveTime;

use crate::{
    common::{error::LedgerError, money::Money},
    worker::validate::InputError,
};

/// One line of the transaction log.
///
/// Form and duplicate-account errors carry no timestamp; everything that
/// reached the ledger does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    Invalid(InputError),
    DuplicateAccount,
    AccountCreated {
        at: NaiveTime,
        holder: String,
        account: String,
    },
    AccountNotFound {
        at: NaiveTime,
        account: String,
    },
    Deposited {
        at: NaiveTime,
        amount: Money,
        holder: String,
        account: String,
    },
    Withdrew {
        at: NaiveTime,
        amount: Money,
        holder: String,
        account: String,
    },
    InsufficientFunds {
        at: NaiveTime,
        account: String,
    },
    Rejected {
        at: NaiveTime,
        error: LedgerError,
    },
    NewBalance {
        at: NaiveTime,
        balance: Money,
    },
}

impl LogEntry {
    /// A blank line follows the entries that close a transaction.
    pub fn ends_block(&self) -> bool {
        matches!(self, LogEntry::NewBalance { .. })
    }
}

struct Stamp(NaiveTime);

impl fmt::Display for Stamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0.format("%H:%M:%S"))
    }
}

impl fmt::Display for LogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEntry::Invalid(err) => write!(f, "Error: {err}"),
            LogEntry::DuplicateAccount => f.write_str("Error: Account number already exists"),
            LogEntry::AccountCreated {
                at,
                holder,
                account,
            } => write!(f, "{} Account created: {holder} ({account})", Stamp(*at)),
            LogEntry::AccountNotFound { at, account } => {
                write!(f, "{} Error: Account not found: {account}", Stamp(*at))
            }
            LogEntry::Deposited {
                at,
                amount,
                holder,
                account,
            } => write!(
                f,
                "{} Deposited ${} to {holder} ({account})",
                Stamp(*at),
                amount.to_string_2dp()
            ),
            LogEntry::Withdrew {
                at,
                amount,
                holder,
                account,
            } => write!(
                f,
                "{} Withdrew ${} from {holder} ({account})",
                Stamp(*at),
                amount.to_string_2dp()
            ),
            LogEntry::InsufficientFunds { at, account } => write!(
                f,
                "{} Error: Insufficient funds in account {account}",
                Stamp(*at)
            ),
            LogEntry::Rejected { at, error } => write!(f, "{} Error: {error}", Stamp(*at)),
            LogEntry::NewBalance { at, balance } => {
                write!(f, "{} New balance: ${}", Stamp(*at), balance.to_string_2dp())
            }
        }
    }
}

/// Append-only list of log entries for a session.
#[derive(Debug, Default)]
pub struct TransactionLog {
    entries: Vec<LogEntry>,
}

impl TransactionLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: LogEntry) {
        self.entries.push(entry);
    }

    pub fn extend(&mut self, entries: impl IntoIterator<Item = LogEntry>) {
        self.entries.extend(entries);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }
}
