use std::str::FromStr;

use crate::common::{
    event::{Action, TellerCommand, TellerRequest},
    money::Money,
};

/// Form-level problems with a teller request, checked before the ledger is
/// touched.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    #[error("Account number and holder name are required")]
    MissingAccountOrHolder,
    #[error("Account number is required")]
    MissingAccount,
    #[error("Amount is required")]
    MissingAmount,
    #[error("Invalid amount format")]
    InvalidAmount,
    #[error("Amount must be positive")]
    NonPositiveAmount,
}

/// Turns raw form input into a command.
///
/// Checks run in a fixed order and the first failure wins: required text
/// fields, then amount presence, format and sign. The holder field is
/// ignored for deposits and withdrawals, and the amount for account creation.
pub fn validate(request: TellerRequest) -> Result<TellerCommand, InputError> {
    let TellerRequest {
        action,
        account,
        holder,
        amount,
    } = request;

    match action {
        Action::Create => {
            if account.is_empty() || holder.is_empty() {
                return Err(InputError::MissingAccountOrHolder);
            }
            Ok(TellerCommand::Create { account, holder })
        }
        Action::Deposit | Action::Withdraw => {
            if account.is_empty() {
                return Err(InputError::MissingAccount);
            }
            let amount = parse_amount(&amount)?;
            Ok(match action {
                Action::Deposit => TellerCommand::Deposit { account, amount },
                _ => TellerCommand::Withdraw { account, amount },
            })
        }
    }
}

fn parse_amount(text: &str) -> Result<Money, InputError> {
    if text.trim().is_empty() {
        return Err(InputError::MissingAmount);
    }
    let amount = Money::from_str(text).map_err(|_| InputError::InvalidAmount)?;
    if !amount.is_positive() {
        return Err(InputError::NonPositiveAmount);
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(action: Action, account: &str, holder: &str, amount: &str) -> TellerRequest {
        TellerRequest {
            action,
            account: account.into(),
            holder: holder.into(),
            amount: amount.into(),
        }
    }

    #[test]
    fn create_requires_account_and_holder() {
        assert_eq!(
            validate(request(Action::Create, "", "Alice", "")),
            Err(InputError::MissingAccountOrHolder)
        );
        assert_eq!(
            validate(request(Action::Create, "A1", "", "")),
            Err(InputError::MissingAccountOrHolder)
        );
    }

    #[test]
    fn create_ignores_amount_field() {
        assert_eq!(
            validate(request(Action::Create, "A1", "Alice", "not a number")),
            Ok(TellerCommand::Create {
                account: "A1".into(),
                holder: "Alice".into(),
            })
        );
    }

    #[test]
    fn transactions_require_account_before_amount() {
        assert_eq!(
            validate(request(Action::Deposit, "", "", "")),
            Err(InputError::MissingAccount)
        );
        assert_eq!(
            validate(request(Action::Withdraw, "", "", "abc")),
            Err(InputError::MissingAccount)
        );
    }

    #[test]
    fn amount_checks_run_in_order() {
        assert_eq!(
            validate(request(Action::Deposit, "A1", "", "")),
            Err(InputError::MissingAmount)
        );
        assert_eq!(
            validate(request(Action::Deposit, "A1", "", "ten")),
            Err(InputError::InvalidAmount)
        );
        assert_eq!(
            validate(request(Action::Withdraw, "A1", "", "-5")),
            Err(InputError::NonPositiveAmount)
        );
        assert_eq!(
            validate(request(Action::Withdraw, "A1", "", "0")),
            Err(InputError::NonPositiveAmount)
        );
    }

    #[test]
    fn amount_that_rounds_to_zero_is_not_positive() {
        assert_eq!(
            validate(request(Action::Deposit, "A1", "", "0.00001")),
            Err(InputError::NonPositiveAmount)
        );
    }

    #[test]
    fn valid_transactions_carry_parsed_amount() {
        assert_eq!(
            validate(request(Action::Deposit, "A1", "ignored", "100")),
            Ok(TellerCommand::Deposit {
                account: "A1".into(),
                amount: Money::whole(100).unwrap(),
            })
        );
        assert_eq!(
            validate(request(Action::Withdraw, "A1", "", "30.5")),
            Ok(TellerCommand::Withdraw {
                account: "A1".into(),
                amount: Money::new(305_000),
            })
        );
    }
}
