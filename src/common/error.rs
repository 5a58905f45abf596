use crate::common::money::Money;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("missing request csv path. usage: cargo run -- <requests.csv> [accounts_out.csv]")]
    MissingArg,
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Why an account refused a balance mutation.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Amount must be positive")]
    NonPositiveAmount,
    #[error("Insufficient funds: requested ${}, available ${}", .requested.to_string_2dp(), .available.to_string_2dp())]
    InsufficientFunds { requested: Money, available: Money },
    #[error("Balance overflow")]
    Overflow,
}
