use crate::common::{error::LedgerError, money::Money};

/// A named balance holder. The balance never drops below zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    id: String,
    holder_name: String,
    balance: Money,
}

impl Account {
    /// A negative `initial_balance` is clamped to zero.
    pub fn new(
        id: impl Into<String>,
        holder_name: impl Into<String>,
        initial_balance: Money,
    ) -> Self {
        Self {
            id: id.into(),
            holder_name: holder_name.into(),
            balance: initial_balance.max(Money::zero()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Credits `amount` if it is positive; anything else is ignored.
    pub fn deposit(&mut self, amount: Money) {
        let _ = self.try_deposit(amount);
    }

    /// Debits `amount` if it is positive and covered by the balance; anything
    /// else is ignored.
    pub fn withdraw(&mut self, amount: Money) {
        let _ = self.try_withdraw(amount);
    }

    /// Credits `amount` and returns the new balance. The balance is left
    /// untouched on error.
    pub fn try_deposit(&mut self, amount: Money) -> Result<Money, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount);
        }
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(self.balance)
    }

    /// Debits `amount` and returns the new balance. The balance is left
    /// untouched on error.
    pub fn try_withdraw(&mut self, amount: Money) -> Result<Money, LedgerError> {
        if !amount.is_positive() {
            return Err(LedgerError::NonPositiveAmount);
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance = self
            .balance
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(self.balance)
    }
}
