use crate::domain::account::Account;

/// Every account known to a session, in the order they were opened.
///
/// `insert` does not reject duplicate ids; callers check with `lookup`
/// first. Lookups are a linear scan and return the first match.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: Vec<Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            accounts: Vec::new(),
        }
    }

    pub fn insert(&mut self, account: Account) {
        self.accounts.push(account);
    }

    pub fn lookup(&self, id: &str) -> Option<&Account> {
        self.accounts.iter().find(|acc| acc.id() == id)
    }

    pub fn lookup_mut(&mut self, id: &str) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|acc| acc.id() == id)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
