use chrono::NaiveTime;
use tracing::{debug, warn};

use crate::{
    common::money::Money,
    domain::{account::Account, ledger::Ledger},
    worker::log::LogEntry,
};

/// Opens a zero-balance account unless the id is already taken.
pub fn handle(ledger: &mut Ledger, account: &str, holder: &str, at: NaiveTime) -> Vec<LogEntry> {
    if ledger.lookup(account).is_some() {
        warn!(account, "refusing duplicate account id");
        return vec![LogEntry::DuplicateAccount];
    }

    ledger.insert(Account::new(account, holder, Money::zero()));
    debug!(account, holder, accounts = ledger.len(), "account opened");

    vec![LogEntry::AccountCreated {
        at,
        holder: holder.to_owned(),
        account: account.to_owned(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn opens_account_with_zero_balance() {
        let mut ledger = Ledger::new();

        let log = handle(&mut ledger, "A1", "Alice", at());

        let acc = ledger.lookup("A1").expect("account exists");
        assert_eq!(acc.holder_name(), "Alice");
        assert_eq!(acc.balance(), Money::zero());
        assert_eq!(
            log,
            vec![LogEntry::AccountCreated {
                at: at(),
                holder: "Alice".into(),
                account: "A1".into(),
            }]
        );
    }

    #[test]
    fn refuses_existing_id_and_keeps_original_holder() {
        let mut ledger = Ledger::new();
        handle(&mut ledger, "A1", "Alice", at());

        let log = handle(&mut ledger, "A1", "Mallory", at());

        assert_eq!(log, vec![LogEntry::DuplicateAccount]);
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.lookup("A1").unwrap().holder_name(), "Alice");
    }
}
