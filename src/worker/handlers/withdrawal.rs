use chrono::NaiveTime;
use tracing::{debug, warn};

use crate::{
    common::{error::LedgerError, money::Money},
    domain::ledger::Ledger,
    worker::log::LogEntry,
};

pub fn handle(ledger: &mut Ledger, account: &str, amount: Money, at: NaiveTime) -> Vec<LogEntry> {
    let Some(acc) = ledger.lookup_mut(account) else {
        warn!(account, "withdrawal from unknown account");
        return vec![LogEntry::AccountNotFound {
            at,
            account: account.to_owned(),
        }];
    };

    match acc.try_withdraw(amount) {
        Ok(balance) => {
            debug!(account, %amount, %balance, "withdrawal applied");
            vec![
                LogEntry::Withdrew {
                    at,
                    amount,
                    holder: acc.holder_name().to_owned(),
                    account: account.to_owned(),
                },
                LogEntry::NewBalance { at, balance },
            ]
        }
        Err(LedgerError::InsufficientFunds { available, .. }) => {
            debug!(account, %amount, %available, "insufficient funds");
            vec![LogEntry::InsufficientFunds {
                at,
                account: account.to_owned(),
            }]
        }
        Err(error) => {
            warn!(account, %amount, %error, "withdrawal refused");
            vec![LogEntry::Rejected { at, error }]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::account::Account;

    fn at() -> NaiveTime {
        NaiveTime::from_hms_opt(17, 45, 59).unwrap()
    }

    fn money(v: i64) -> Money {
        Money::whole(v).unwrap()
    }

    fn seeded(balance: Money) -> Ledger {
        let mut ledger = Ledger::new();
        ledger.insert(Account::new("A1", "Alice", balance));
        ledger
    }

    #[test]
    fn debits_account_when_funds_cover_amount() {
        let mut ledger = seeded(money(100));

        let log = handle(&mut ledger, "A1", money(30), at());

        assert_eq!(ledger.lookup("A1").unwrap().balance(), money(70));
        assert_eq!(
            log,
            vec![
                LogEntry::Withdrew {
                    at: at(),
                    amount: money(30),
                    holder: "Alice".into(),
                    account: "A1".into(),
                },
                LogEntry::NewBalance {
                    at: at(),
                    balance: money(70),
                },
            ]
        );
    }

    #[test]
    fn exact_balance_can_be_withdrawn() {
        let mut ledger = seeded(money(70));

        handle(&mut ledger, "A1", money(70), at());

        assert_eq!(ledger.lookup("A1").unwrap().balance(), Money::zero());
    }

    #[test]
    fn insufficient_funds_leaves_balance_and_skips_new_balance_line() {
        let mut ledger = seeded(money(70));

        let log = handle(&mut ledger, "A1", money(1000), at());

        assert_eq!(ledger.lookup("A1").unwrap().balance(), money(70));
        assert_eq!(
            log,
            vec![LogEntry::InsufficientFunds {
                at: at(),
                account: "A1".into(),
            }]
        );
    }

    #[test]
    fn unknown_account_is_reported() {
        let mut ledger = seeded(money(70));

        let log = handle(&mut ledger, "B1", money(1), at());

        assert_eq!(
            log,
            vec![LogEntry::AccountNotFound {
                at: at(),
                account: "B1".into(),
            }]
        );
    }

    #[test]
    fn non_positive_amount_is_rejected_by_the_account() {
        let mut ledger = seeded(money(70));

        let log = handle(&mut ledger, "A1", money(-1), at());

        assert_eq!(
            log,
            vec![LogEntry::Rejected {
                at: at(),
                error: LedgerError::NonPositiveAmount,
            }]
        );
    }
}
