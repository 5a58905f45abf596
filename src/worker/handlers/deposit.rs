use chrono::NaiveTime;
use tracing::{debug, warn};

use crate::{common::money::Money, domain::ledger::Ledger, worker::log::LogEntry};

pub fn handle(ledger: &mut Ledger, account: &str, amount: Money, at: NaiveTime) -> Vec<LogEntry> {
    let Some(acc) = ledger.lookup_mut(account) else {
        warn!(account, "deposit to unknown account");
        return vec![LogEntry::AccountNotFound {
            at,
            account: account.to_owned(),
        }];
    };

    match acc.try_deposit(amount) {
        Ok(balance) => {
            debug!(account, %amount, %balance, "deposit applied");
            vec![
                LogEntry::Deposited {
                    at,
                    amount,
                    holder: acc.holder_name().to_owned(),
                    account: account.to_owned(),
                },
                LogEntry::NewBalance { at, balance },
            ]
        }
        Err(error) => {
            warn!(account, %amount, %error, "deposit refused");
            vec![LogEntry::Rejected { at, error }]
        }
    }
}
