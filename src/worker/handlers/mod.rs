pub mod create;
pub mod deposit;
pub mod withdrawal;
