use crate::common::money::Money;

/// Which teller button a request stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Create,
    Deposit,
    Withdraw,
}

impl Action {
    /// Accepts the short names and the button labels, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "create" | "create account" => Some(Action::Create),
            "deposit" => Some(Action::Deposit),
            "withdraw" => Some(Action::Withdraw),
            _ => None,
        }
    }
}

/// Raw teller input as sent from the reader to the worker. Text fields are
/// trimmed and may be empty; the worker validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TellerRequest {
    pub action: Action,
    pub account: String,
    pub holder: String,
    pub amount: String,
}

/// A request that passed form validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TellerCommand {
    Create { account: String, holder: String },
    Deposit { account: String, amount: Money },
    Withdraw { account: String, amount: Money },
}
