use chrono::{Local, NaiveTime, Timelike};
use tracing::debug;

use crate::{
    common::event::{TellerCommand, TellerRequest},
    domain::ledger::Ledger,
    worker::{
        handlers::{create, deposit, withdrawal},
        log::{LogEntry, TransactionLog},
        validate::validate,
    },
};

/// Source of log timestamps.
pub type Clock = fn() -> NaiveTime;

/// Local wall-clock time, truncated to whole seconds.
pub fn wall_clock() -> NaiveTime {
    let now = Local::now().time();
    now.with_nanosecond(0).unwrap_or(now)
}

/// Runs teller requests against a ledger and keeps the resulting log.
#[derive(Debug)]
pub struct Processor {
    clock: Clock,
    log: TransactionLog,
}

impl Default for Processor {
    fn default() -> Self {
        Self::new()
    }
}

impl Processor {
    pub fn new() -> Self {
        Self::with_clock(wall_clock)
    }

    pub fn with_clock(clock: Clock) -> Self {
        Self {
            clock,
            log: TransactionLog::new(),
        }
    }

    pub fn log(&self) -> &TransactionLog {
        &self.log
    }

    pub fn into_log(self) -> TransactionLog {
        self.log
    }

    pub fn process(&mut self, ledger: &mut Ledger, request: TellerRequest) {
        let command = match validate(request) {
            Ok(command) => command,
            Err(err) => {
                debug!(%err, "request failed validation");
                self.log.push(LogEntry::Invalid(err));
                return;
            }
        };

        let at = (self.clock)();
        let entries = match command {
            TellerCommand::Create { account, holder } => {
                create::handle(ledger, &account, &holder, at)
            }
            TellerCommand::Deposit { account, amount } => {
                deposit::handle(ledger, &account, amount, at)
            }
            TellerCommand::Withdraw { account, amount } => {
                withdrawal::handle(ledger, &account, amount, at)
            }
        };
        self.log.extend(entries);
    }
}
